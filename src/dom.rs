use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}");
    }
}

/// Run `handler` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let mut handler = Some(handler);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(h) = handler.take() {
            h();
        }
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, pointer: bool) {
    _ = canvas
        .style()
        .set_property("cursor", if pointer { "pointer" } else { "auto" });
}
