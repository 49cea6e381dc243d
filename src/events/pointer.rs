use crate::audio::BackgroundLoop;
use crate::dom;
use crate::input;
use ripple_core::{DispatchOutcome, SimulationContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub sim: Rc<RefCell<SimulationContext>>,
    pub audio: Option<Rc<BackgroundLoop>>,
}

pub fn wire_input_handlers(w: &InputWiring) {
    wire_pointermove(w);
    wire_touchmove(w);
    wire_pointerdown(w);
}

fn log_outcome(outcome: DispatchOutcome) {
    if let DispatchOutcome::Inserted(p) = outcome {
        log::debug!("[input] ripple at ({:.3}, {:.3})", p.x, p.y);
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(viewport) = dom::window_viewport() else {
            return;
        };
        let client = input::pointer_client(&ev);
        let outcome = w.sim.borrow_mut().pointer_moved(client, viewport);
        log_outcome(outcome);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(viewport) = dom::window_viewport() else {
            return;
        };
        let first = input::first_touch_client(&ev);
        let outcome = w.sim.borrow_mut().touch_moved(first.as_slice(), viewport);
        log_outcome(outcome);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// First gesture unlocks the AudioContext under browser autoplay rules
fn wire_pointerdown(w: &InputWiring) {
    let Some(audio) = w.audio.clone() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        audio.resume();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
