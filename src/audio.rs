use crate::constants::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Background music plus the synthesized hit sound, sharing one mute switch.
///
/// Every part is optional: a browser that refuses to build the audio
/// element or the context still gets a working (silent) gallery.
pub struct GalleryAudio {
    background: Option<web::HtmlAudioElement>,
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
    muted: bool,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("[audio] {} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn build_background() -> anyhow::Result<web::HtmlAudioElement> {
    let el = web::HtmlAudioElement::new_with_src(BACKGROUND_MUSIC_URL)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_loop(true);
    el.set_volume(MUSIC_VOLUME);
    Ok(el)
}

fn build_graph() -> anyhow::Result<(web::AudioContext, web::GainNode)> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // Silent until the first unmute.
    let master = create_gain(&ctx, 0.0, "Master")?;
    _ = master.connect_with_audio_node(&ctx.destination());
    Ok((ctx, master))
}

/// Autoplay refusals reject the returned promise rather than throwing.
fn play_background(bg: &web::HtmlAudioElement) {
    match bg.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[audio] play failed: {:?}", e),
    }
}

impl GalleryAudio {
    pub fn new() -> Self {
        let background = build_background()
            .map_err(|e| log::error!("[audio] background music unavailable: {e}"))
            .ok();
        let (ctx, master) = match build_graph() {
            Ok((c, m)) => (Some(c), Some(m)),
            Err(e) => {
                log::error!("[audio] context unavailable: {e}");
                (None, None)
            }
        };
        Self {
            background,
            ctx,
            master,
            muted: true,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(bg) = &self.background {
            if muted {
                _ = bg.pause();
            } else {
                play_background(bg);
            }
        }
        if let Some(ctx) = &self.ctx {
            if !muted {
                _ = ctx.resume();
            }
        }
        if let Some(master) = &self.master {
            master.gain().set_value(if muted { 0.0 } else { 1.0 });
        }
        log::info!("[audio] muted={muted}");
    }

    /// Flip the mute state and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    /// Short falling blip routed through the master gain.
    pub fn play_hit(&self) {
        if self.muted {
            return;
        }
        let (Some(ctx), Some(master)) = (&self.ctx, &self.master) else {
            return;
        };
        if let Ok(src) = web::OscillatorNode::new(ctx) {
            src.set_type(web::OscillatorType::Triangle);
            let now = ctx.current_time();
            let t0 = now + 0.005;
            _ = src.frequency().set_value_at_time(HIT_FREQUENCY_HZ, t0);
            _ = src
                .frequency()
                .linear_ramp_to_value_at_time(HIT_FREQUENCY_HZ - HIT_DROP_HZ, t0 + HIT_DURATION_SEC);
            if let Ok(g) = web::GainNode::new(ctx) {
                g.gain().set_value(0.0);
                _ = g.gain().linear_ramp_to_value_at_time(HIT_LEVEL, t0 + 0.01);
                _ = g
                    .gain()
                    .linear_ramp_to_value_at_time(0.0, t0 + HIT_DURATION_SEC);
                _ = src.connect_with_audio_node(&g);
                _ = g.connect_with_audio_node(master);
                _ = src.start_with_when(t0);
                _ = src.stop_with_when(t0 + HIT_DURATION_SEC + 0.05);
            }
        }
    }
}
