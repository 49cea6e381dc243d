#![cfg(target_arch = "wasm32")]
use instant::Instant;
use ripple_core::{BoatAnimation, Camera, SimulationContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<SimulationContext>>) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let sim_resize = sim.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        if let Some(vp) = dom::window_viewport() {
            sim_resize.borrow_mut().resize(vp.width, vp.height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn start_background_audio(initial_gain: f32) -> Option<Rc<audio::BackgroundLoop>> {
    let bg = match audio::BackgroundLoop::new(initial_gain) {
        Ok(bg) => Rc::new(bg),
        Err(e) => {
            log::warn!("[audio] disabled: {:?}", e);
            return None;
        }
    };
    let bg_load = bg.clone();
    spawn_local(async move {
        if let Err(e) = bg_load.load_and_play(constants::BACKGROUND_AUDIO_URL).await {
            log::error!("[audio] {:?}", e);
        }
    });
    Some(bg)
}

fn wire_start_button(document: &web::Document, audio: Option<Rc<audio::BackgroundLoop>>) {
    dom::add_click_listener(document, constants::START_BUTTON_ID, move || {
        if let Some(a) = &audio {
            a.resume();
        }
        if let Some(d) = dom::window_document() {
            overlay::hide(&d);
        }
    });
}

fn load_surface_texture(slot: Rc<RefCell<Option<image::RgbaImage>>>) {
    spawn_local(async move {
        match assets::load_texture_image(constants::SURFACE_TEXTURE_URL).await {
            Ok(img) => *slot.borrow_mut() = Some(img),
            Err(e) => log::error!("[texture] {:?}; keeping placeholder", e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

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

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let camera = match dom::window_viewport() {
        Some(vp) => Camera::for_viewport(vp.width, vp.height),
        None => Camera::default(),
    };
    let sim = Rc::new(RefCell::new(SimulationContext::new(camera)));

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas, &sim);

    let initial_gain = sim.borrow().params().audio_gain;
    let bg = start_background_audio(initial_gain);
    wire_start_button(&document, bg.clone());

    let pending_texture = Rc::new(RefCell::new(None));
    load_surface_texture(pending_texture.clone());

    events::wire_global_keydown(sim.clone());
    events::wire_input_handlers(&events::InputWiring {
        sim: sim.clone(),
        audio: bg.clone(),
    });
    overlay::update_params(&document, sim.borrow().params());

    let gpu = frame::init_gpu(&canvas).await?;
    let (w, h) = gpu.size();
    log::info!("[gpu] ready at {}x{}", w, h);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        canvas,
        gpu,
        audio: bg,
        pending_texture,
        boat: BoatAnimation::default(),
        started: Instant::now(),
        last_gain: initial_gain,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
