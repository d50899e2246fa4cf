#![cfg(target_arch = "wasm32")]
use globe_core::{load_models, GlobeConfig, GlobeSession, InstantClock, ProceduralAssets};
use globe_render::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;

const CANVAS_ID: &str = "app-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    dom::wire_canvas_resize(&canvas);

    // Both models must be ready before the first frame is drawn
    let models = load_models(&ProceduralAssets::default()).await?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let mut renderer = Renderer::new(&instance, surface, canvas.width(), canvas.height()).await?;
    renderer.upload_models(&models);

    let mut session = GlobeSession::new(GlobeConfig::default());
    session.resize(canvas.width(), canvas.height());
    let session = Rc::new(RefCell::new(session));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        renderer,
        canvas,
        clock: InstantClock::new(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("globe-web running");
    Ok(())
}
