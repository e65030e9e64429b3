use crate::input;
use card_core::Card;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub card: Rc<RefCell<Card>>,
    pub hovered: Rc<Cell<bool>>,
}

/// Hover is true while the pointer ray lands on the front image plane.
pub fn wire_pointer_handlers(w: PointerWiring) {
    // pointermove
    {
        let canvas_m = w.canvas.clone();
        let card_m = w.card.clone();
        let hovered_m = w.hovered.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            let ray = input::canvas_ray(&canvas_m, pos);
            let hit = card_m.borrow().front_hit(ray);
            if hit != hovered_m.get() {
                log::info!("[pointer] hover {}", if hit { "enter" } else { "leave" });
            }
            hovered_m.set(hit);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave
    {
        let hovered_l = w.hovered.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            hovered_l.set(false);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
