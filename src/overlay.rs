use crate::constants::{MUTED_GLYPH, MUTE_TOGGLE_ID, OVERLAY_ID, UNMUTED_GLYPH};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

/// Reflect the mute state on the toggle button.
pub fn set_mute_label(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(MUTE_TOGGLE_ID) {
        el.set_text_content(Some(if muted { MUTED_GLYPH } else { UNMUTED_GLYPH }));
        _ = el.set_attribute("aria-label", if muted { "Unmute" } else { "Mute" });
        _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
    }
}
