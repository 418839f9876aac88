use crate::camera::ndc_to_css;
use fnv::FnvHashMap;
use gallery_core::{Camera, SphericalCloud};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Floating "Item #n" tags over clicked objects.
pub struct Labels {
    document: web::Document,
    container: Option<web::Element>,
    items: FnvHashMap<usize, web::HtmlElement>,
}

fn label_text(index: usize) -> String {
    format!("Item #{}", index + 1)
}

impl Labels {
    pub fn new(document: web::Document, container_id: &str) -> Self {
        let container = document.get_element_by_id(container_id);
        if container.is_none() {
            log::warn!("[labels] missing #{container_id}; labels disabled");
        }
        Self {
            document,
            container,
            items: FnvHashMap::default(),
        }
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if !visible {
            if let Some(el) = self.items.remove(&index) {
                el.remove();
            }
            return;
        }
        if self.items.contains_key(&index) {
            return;
        }
        let Some(container) = &self.container else {
            return;
        };
        let el = match self
            .document
            .create_element("div")
            .map(|e| e.dyn_into::<web::HtmlElement>())
        {
            Ok(Ok(el)) => el,
            _ => {
                log::error!("[labels] could not create label element");
                return;
            }
        };
        el.set_class_name("item-label");
        el.set_text_content(Some(&label_text(index)));
        _ = el.style().set_property("display", "none");
        _ = container.append_child(&el);
        self.items.insert(index, el);
    }

    /// Move every label to its object's projected anchor.
    pub fn reposition(&self, camera: &Camera, cloud: &SphericalCloud, css_size: Vec2) {
        for (&index, el) in &self.items {
            let style = el.style();
            let projected = cloud
                .label_anchor(index)
                .and_then(|anchor| camera.world_to_ndc(anchor));
            match projected {
                Some(ndc) if ndc.z <= 1.0 => {
                    let p = ndc_to_css(ndc, css_size);
                    _ = style.set_property("left", &format!("{:.1}px", p.x));
                    _ = style.set_property("top", &format!("{:.1}px", p.y));
                    _ = style.set_property("display", "block");
                }
                _ => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}
