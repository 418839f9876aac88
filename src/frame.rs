use crate::camera;
use crate::dom;
use crate::input;
use crate::labels::Labels;
use crate::render;
use crate::stage::Stage;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub stage: Rc<RefCell<Stage>>,
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub labels: Rc<RefCell<Labels>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub cursor_is_pointer: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let aspect = camera::canvas_aspect(&self.canvas);
        let mut stage = self.stage.borrow_mut();
        stage.advance(aspect);

        // Hover follows the stored pointer; objects move even when it doesn't.
        let ms = *self.mouse.borrow();
        let hovered = if ms.inside {
            let (ro, rd) = camera::screen_to_world_ray(&self.canvas, &stage.camera, ms.x, ms.y);
            stage.pick(ro, rd)
        } else {
            None
        };
        if stage.cloud.set_hovered(hovered) {
            log::debug!("[pick] hover {:?}", hovered);
        }
        let pointer = hovered.is_some();
        if pointer != self.cursor_is_pointer {
            dom::set_cursor(&self.canvas, pointer);
            self.cursor_is_pointer = pointer;
        }

        let rect = self.canvas.get_bounding_client_rect();
        let css_size = Vec2::new(rect.width() as f32, rect.height() as f32);
        self.labels
            .borrow()
            .reposition(&stage.camera, &stage.cloud, css_size);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&stage.camera, &stage.cloud) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
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
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
