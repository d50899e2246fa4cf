use globe_core::{wheel_delta_pixels, GlobeSession, PointerButtons, ScrollUnit};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<GlobeSession>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_wheel(&w);
    wire_pointermove(&w);
}

fn wire_wheel(w: &InputWiring) {
    let session = w.session.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let unit = ScrollUnit::from_dom_delta_mode(ev.delta_mode());
        let delta = wheel_delta_pixels(ev.delta_y() as f32, unit);
        session.borrow_mut().on_scroll(delta);
        // keep the page from scrolling while zooming
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let session = w.session.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        session.borrow_mut().on_drag(
            ev.movement_x() as f32,
            ev.movement_y() as f32,
            PointerButtons(ev.buttons()),
        );
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
