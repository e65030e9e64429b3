#![cfg(target_arch = "wasm32")]
use card_core::{
    Card, CardLayout, FaceMaterial, FaceSpec, ImageRgba, MaskCompositor, MaskConfig,
    DEMO_IMAGE_HEIGHT, DEMO_IMAGE_WIDTH,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store at CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    dom::add_resize_listener(&canvas);

    let image = ImageRgba::demo_pattern(DEMO_IMAGE_WIDTH, DEMO_IMAGE_HEIGHT);
    let card = build_card(&image)?;
    let gpu = frame::init_gpu(&canvas, &card, &image).await;
    if gpu.is_none() {
        log::warn!("[init] no WebGPU; the card will not be drawn");
    }

    let card = Rc::new(RefCell::new(card));
    let hovered = Rc::new(Cell::new(false));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        card: card.clone(),
        hovered: hovered.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        card,
        hovered,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Masked front over the demo artwork. The demo has no back face.
fn build_card(image: &ImageRgba) -> anyhow::Result<Card> {
    let mask = MaskCompositor::new(MaskConfig::showcase())?;
    let front = FaceSpec {
        material: FaceMaterial::Masked(mask),
        image_size: Some(image.size()),
    };
    Ok(Card::new(&CardLayout::default(), Some(front), None))
}
