use crate::assets;
use js_sys::ArrayBuffer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// One looping background track behind a single volume control.
pub struct BackgroundLoop {
    ctx: web::AudioContext,
    gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

impl BackgroundLoop {
    pub fn new(initial_gain: f32) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
        let gain = create_gain(&ctx, initial_gain.clamp(0.0, 1.0), "Background")?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect gain: {:?}", e))?;
        Ok(Self { ctx, gain })
    }

    /// Fetch, decode and start the track on a loop.
    pub async fn load_and_play(&self, url: &str) -> anyhow::Result<()> {
        let data: ArrayBuffer = assets::fetch_array_buffer(url).await?;
        let decoded = JsFuture::from(
            self.ctx
                .decode_audio_data(&data)
                .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?,
        )
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
        let buffer: web::AudioBuffer = decoded
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("decode {}: not an AudioBuffer", url))?;

        let src = self
            .ctx
            .create_buffer_source()
            .map_err(|e| anyhow::anyhow!("buffer source: {:?}", e))?;
        src.set_buffer(Some(&buffer));
        src.set_loop(true);
        src.connect_with_audio_node(&self.gain)
            .map_err(|e| anyhow::anyhow!("connect source: {:?}", e))?;
        src.start()
            .map_err(|e| anyhow::anyhow!("start source: {:?}", e))?;
        log::info!("[audio] looping {} ({:.1}s)", url, buffer.duration());
        Ok(())
    }

    pub fn set_volume(&self, gain: f32) {
        self.gain.gain().set_value(gain.clamp(0.0, 1.0));
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }
}
