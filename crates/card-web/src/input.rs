use card_core::{screen_to_world_ray, Camera, Ray};
use glam::Vec2;
use web_sys as web;

/// Pointer position in the canvas' backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

/// World ray under a canvas pixel, using the scene camera.
pub fn canvas_ray(canvas: &web::HtmlCanvasElement, pos: Vec2) -> Ray {
    let camera = Camera::looking_at_card(canvas_aspect(canvas));
    screen_to_world_ray(
        &camera,
        canvas.width() as f32,
        canvas.height() as f32,
        pos.x,
        pos.y,
    )
}
