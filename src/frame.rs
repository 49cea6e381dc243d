use crate::audio::BackgroundLoop;
use crate::constants::AUDIO_GAIN_EPSILON;
use crate::input;
use crate::render;
use instant::Instant;
use ripple_core::{BoatAnimation, SimulationContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub sim: Rc<RefCell<SimulationContext>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub audio: Option<Rc<BackgroundLoop>>,
    pub pending_texture: Rc<RefCell<Option<image::RgbaImage>>>,
    pub boat: BoatAnimation,
    pub started: Instant,
    pub last_gain: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        if let Some(img) = self.pending_texture.borrow_mut().take() {
            self.gpu.set_texture(&img);
        }

        // Keep the swapchain sized to the canvas backing store
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        let (inputs, camera) = {
            let mut sim = self.sim.borrow_mut();
            (sim.advance_frame(), sim.camera)
        };

        if let Some(audio) = &self.audio {
            let gain = inputs.params.audio_gain;
            if input::gain_changed(self.last_gain, gain, AUDIO_GAIN_EPSILON) {
                audio.set_volume(gain);
                self.last_gain = gain;
            }
        }

        let elapsed = self.started.elapsed().as_secs_f32();
        let wall_secs = js_sys::Date::now() / 1000.0;
        let pose = self.boat.pose(elapsed, wall_secs);

        if let Err(e) = self.gpu.render(&camera, &inputs, Some(&pose)) {
            match e {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    log::warn!("[render] surface {:?}; reconfiguring", e);
                    self.gpu.reconfigure();
                }
                other => log::error!("render error: {:?}", other),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
