use crate::stage::Stage;
use gallery_core::{OrbitController, Subscriptions};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    handler: Handler,
    non_passive: bool,
}

impl Listener {
    fn remove(self) {
        let cb = self.handler.as_ref().unchecked_ref();
        let res = if self.non_passive {
            let opts = web::EventListenerOptions::new();
            opts.set_capture(false);
            self.target
                .remove_event_listener_with_callback_and_event_listener_options(self.kind, cb, &opts)
        } else {
            self.target.remove_event_listener_with_callback(self.kind, cb)
        };
        if let Err(e) = res {
            log::warn!("[orbit] remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// Drag/touch/wheel listeners feeding the orbit controller.
///
/// Mouse and touch presses are taken from the canvas; moves and releases
/// from the window so a drag survives leaving the canvas.
pub struct OrbitControls {
    canvas: web::HtmlCanvasElement,
    stage: Rc<RefCell<Stage>>,
    subs: Subscriptions<Listener>,
}

impl OrbitControls {
    pub fn new(canvas: web::HtmlCanvasElement, stage: Rc<RefCell<Stage>>) -> Self {
        Self {
            canvas,
            stage,
            subs: Subscriptions::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.subs.is_empty()
    }

    pub fn activate(&mut self) -> anyhow::Result<()> {
        if self.is_active() {
            return Ok(());
        }
        if let Err(e) = self.attach_all() {
            self.deactivate();
            return Err(e);
        }
        log::info!("[orbit] {} listeners attached", self.subs.len());
        Ok(())
    }

    fn attach_all(&mut self) -> anyhow::Result<()> {
        let window: web::EventTarget = web::window()
            .ok_or_else(|| anyhow::anyhow!("no window"))?
            .into();
        let canvas: web::EventTarget = self.canvas.clone().into();
        let stage = &self.stage;

        let on_mouse_down = orbit_handler(stage, |orbit, ev| {
            if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
                orbit.pointer_down(m.client_x() as f32, m.client_y() as f32);
            }
        });
        let on_mouse_move = orbit_handler(stage, |orbit, ev| {
            if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
                orbit.pointer_move(m.client_x() as f32, m.client_y() as f32);
            }
        });
        let on_mouse_up = orbit_handler(stage, |orbit, _| orbit.pointer_up());
        let on_wheel = orbit_handler(stage, |orbit, ev| {
            ev.prevent_default();
            if let Some(w) = ev.dyn_ref::<web::WheelEvent>() {
                orbit.wheel(w.delta_y() as f32);
            }
        });
        let on_touch_start = orbit_handler(stage, |orbit, ev| {
            if let Some(t) = ev.dyn_ref::<web::TouchEvent>() {
                orbit.touch_start(&touch_points(t));
            }
        });
        let on_touch_move = orbit_handler(stage, |orbit, ev| {
            if let Some(t) = ev.dyn_ref::<web::TouchEvent>() {
                orbit.touch_move(&touch_points(t));
            }
        });
        let on_touch_end = orbit_handler(stage, |orbit, _| orbit.touch_end());

        self.listen(&canvas, "mousedown", on_mouse_down, false)?;
        self.listen(&window, "mousemove", on_mouse_move, false)?;
        self.listen(&window, "mouseup", on_mouse_up, false)?;
        self.listen(&canvas, "wheel", on_wheel, true)?;
        self.listen(&canvas, "touchstart", on_touch_start, false)?;
        self.listen(&window, "touchmove", on_touch_move, false)?;
        self.listen(&window, "touchend", on_touch_end, false)?;
        Ok(())
    }

    fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: Handler,
        non_passive: bool,
    ) -> anyhow::Result<()> {
        let cb = handler.as_ref().unchecked_ref();
        let res = if non_passive {
            // Must be able to preventDefault page scrolling.
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(false);
            target.add_event_listener_with_callback_and_add_event_listener_options(kind, cb, &opts)
        } else {
            target.add_event_listener_with_callback(kind, cb)
        };
        res.map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        self.subs.push(Listener {
            target: target.clone(),
            kind,
            handler,
            non_passive,
        });
        Ok(())
    }

    /// Remove every listener added by [`activate`](Self::activate) and reset
    /// the controller's pointer state. Safe to call repeatedly.
    pub fn deactivate(&mut self) -> usize {
        let removed = self.subs.release(Listener::remove);
        if removed > 0 {
            if let Some(orbit) = self.stage.borrow_mut().orbit_mut() {
                orbit.reset();
            }
            log::info!("[orbit] {removed} listeners removed");
        }
        removed
    }
}

fn orbit_handler(
    stage: &Rc<RefCell<Stage>>,
    mut apply: impl FnMut(&mut OrbitController, &web::Event) + 'static,
) -> Handler {
    let stage = stage.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(orbit) = stage.borrow_mut().orbit_mut() {
            apply(orbit, &ev);
        }
    }) as Box<dyn FnMut(_)>)
}

fn touch_points(ev: &web::TouchEvent) -> SmallVec<[Vec2; 4]> {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}
