#![cfg(target_arch = "wasm32")]
use crate::audio::GalleryAudio;
use crate::constants::*;
use crate::controls::OrbitControls;
use crate::labels::Labels;
use crate::lifecycle::ListenerAction;
use crate::stage::Stage;
use gallery_core::SceneParams;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod lifecycle;
mod overlay;
mod render;
mod stage;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Handles shared by the explore button, the overlay timer and teardown.
#[derive(Clone)]
struct ExploreWiring {
    document: web::Document,
    stage: Rc<RefCell<Stage>>,
    controls: Rc<RefCell<OrbitControls>>,
    audio: Rc<RefCell<GalleryAudio>>,
}

impl ExploreWiring {
    /// Hide the overlay, start the intro and attach the orbit listeners.
    /// `unmute` is set for a deliberate click, not for the auto-dismiss timer.
    fn begin(&self, unmute: bool) {
        overlay::hide(&self.document);
        if unmute && self.audio.borrow().is_muted() {
            let muted = self.audio.borrow_mut().toggle_mute();
            overlay::set_mute_label(&self.document, muted);
        }
        let started = match self.stage.borrow_mut().explore() {
            Ok(s) => s,
            Err(e) => {
                log::error!("[explore] {e}");
                return;
            }
        };
        if !started {
            return;
        }
        if let Err(e) = self.controls.borrow_mut().activate() {
            log::error!("[explore] orbit controls unavailable: {e}");
        }
        log::info!("[explore] started (unmute={unmute})");
    }
}

fn wire_overlay_buttons(w: &ExploreWiring) {
    let explore = w.clone();
    dom::add_click_listener(&w.document, EXPLORE_BUTTON_ID, move || explore.begin(true));

    let mute = w.clone();
    dom::add_click_listener(&w.document, MUTE_TOGGLE_ID, move || {
        let muted = mute.audio.borrow_mut().toggle_mute();
        overlay::set_mute_label(&mute.document, muted);
    });

    let timer = w.clone();
    dom::set_timeout(INTRO_TIMEOUT_MS, move || {
        if !overlay::is_hidden(&timer.document) {
            log::info!("[explore] intro timed out");
            timer.begin(false);
        }
    });
}

fn wire_page_lifecycle(w: &ExploreWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let controls = w.controls.clone();
    let on_hide = Closure::wrap(Box::new(move || {
        let mut controls = controls.borrow_mut();
        if lifecycle::on_page_hide(controls.is_active()) == ListenerAction::Detach {
            controls.deactivate();
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let controls = w.controls.clone();
    let stage = w.stage.clone();
    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        let exploring = stage.borrow().is_exploring();
        let mut controls = controls.borrow_mut();
        if lifecycle::on_page_show(exploring, controls.is_active()) != ListenerAction::Attach {
            return;
        }
        match controls.activate() {
            Ok(()) => log::info!("[orbit] restored (persisted={})", ev.persisted()),
            Err(e) => log::error!("[orbit] restore failed: {e}"),
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = SceneParams::default();
    let stage = Rc::new(RefCell::new(Stage::new(params)?));
    let audio = Rc::new(RefCell::new(GalleryAudio::new()));
    let labels = Rc::new(RefCell::new(Labels::new(document.clone(), LABELS_ID)));
    let controls = Rc::new(RefCell::new(OrbitControls::new(canvas.clone(), stage.clone())));
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));

    let wiring = ExploreWiring {
        document: document.clone(),
        stage: stage.clone(),
        controls,
        audio: audio.clone(),
    };
    overlay::show(&document);
    overlay::set_mute_label(&document, audio.borrow().is_muted());
    wire_overlay_buttons(&wiring);
    wire_page_lifecycle(&wiring);

    events::wire_pick_handlers(events::PickWiring {
        canvas: canvas.clone(),
        stage: stage.clone(),
        mouse_state: mouse_state.clone(),
        audio,
        labels: labels.clone(),
    });

    // Without WebGPU the overlay, audio and controls still work; nothing is drawn.
    let gpu = frame::init_gpu(&canvas, params.count).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        stage,
        canvas,
        mouse: mouse_state,
        labels,
        gpu,
        cursor_is_pointer: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
