use crate::audio::GalleryAudio;
use crate::camera;
use crate::constants::CLICK_SLOP_PX;
use crate::input;
use crate::labels::Labels;
use crate::stage::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PickWiring {
    pub canvas: web::HtmlCanvasElement,
    pub stage: Rc<RefCell<Stage>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub audio: Rc<RefCell<GalleryAudio>>,
    pub labels: Rc<RefCell<Labels>>,
}

/// Hover tracking and click-to-toggle on the canvas. Hover itself is
/// resolved each frame from the stored pointer position, since objects and
/// camera keep moving under a still pointer.
pub fn wire_pick_handlers(w: PickWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn wire_pointermove(w: &PickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut ms = w.mouse_state.borrow_mut();
        ms.x = pos.x;
        ms.y = pos.y;
        ms.inside = true;
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &PickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut ms = w.mouse_state.borrow_mut();
        ms.inside = false;
        ms.down_at = None;
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &PickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.mouse_state.borrow_mut().down_at = Some(input::client_pos(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let down = w.mouse_state.borrow_mut().down_at.take();
        if !input::is_click(down, input::client_pos(&ev), CLICK_SLOP_PX) {
            return;
        }
        // Taps never produce a hover, so pick at the release point.
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let toggled = {
            let mut stage = w.stage.borrow_mut();
            let (ro, rd) = camera::screen_to_world_ray(&w.canvas, &stage.camera, pos.x, pos.y);
            let now = stage.elapsed();
            let hit = stage.pick(ro, rd);
            hit.and_then(|i| stage.cloud.toggle_click(i, now).map(|c| (i, c)))
        };
        let Some((index, clicked)) = toggled else {
            return;
        };
        log::info!("[pick] item {} clicked={}", index + 1, clicked);
        w.audio.borrow().play_hit();
        w.labels.borrow_mut().set_visible(index, clicked);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
