use crate::overlay;
use ripple_core::{action_for_key, PanelAction, SimulationContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Update the HUD after a parameter change
fn update_hud_after_change(sim: &Rc<RefCell<SimulationContext>>) {
    if let Some(document) = crate::dom::window_document() {
        let params = *sim.borrow().params();
        overlay::update_params(&document, &params);
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, sim: &Rc<RefCell<SimulationContext>>) {
    let key = ev.key();
    let Some(action) = action_for_key(&key, ev.shift_key()) else {
        return;
    };
    match action {
        PanelAction::ToggleHelp => {
            if let Some(document) = crate::dom::window_document() {
                overlay::toggle(&document);
            }
        }
        action => {
            let changed = sim.borrow_mut().apply_panel(action);
            if changed {
                log::info!("[panel] {:?}", action);
                update_hud_after_change(sim);
            }
        }
    }
    // Arrow keys would otherwise scroll the page
    if key.starts_with("Arrow") {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(sim: Rc<RefCell<SimulationContext>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &sim);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
