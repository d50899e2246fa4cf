use globe_core::{GlobeSession, InstantClock};
use globe_render::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub session: Rc<RefCell<GlobeSession>>,
    pub renderer: Renderer<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub clock: InstantClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        self.renderer.resize_if_needed(width, height);
        let output = {
            let mut session = self.session.borrow_mut();
            session.resize(width, height);
            session.frame(&mut self.clock)
        };
        match self.renderer.render(&output) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure()
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &TickHandle) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
