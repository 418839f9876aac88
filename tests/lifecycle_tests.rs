// Host-side tests for page hide/show listener handling.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use gallery_core::{Camera, CameraDirector};
use lifecycle::*;

#[test]
fn hide_detaches_only_attached_listeners() {
    assert_eq!(on_page_hide(true), ListenerAction::Detach);
    assert_eq!(on_page_hide(false), ListenerAction::Keep);
}

#[test]
fn first_show_before_explore_attaches_nothing() {
    assert_eq!(on_page_show(false, false), ListenerAction::Keep);
}

#[test]
fn show_while_attached_is_a_no_op() {
    assert_eq!(on_page_show(true, true), ListenerAction::Keep);
}

#[test]
fn restored_page_reattaches_after_hide() {
    // Exploring survives the hide, so a second explore cannot bring the
    // listeners back; the show transition has to.
    let cam = Camera::default();
    let mut director = CameraDirector::default();
    assert_eq!(director.explore(&cam), Ok(true));

    let mut attached = true;
    if on_page_hide(attached) == ListenerAction::Detach {
        attached = false;
    }
    assert_eq!(director.explore(&cam), Ok(false));
    assert_eq!(
        on_page_show(director.is_exploring(), attached),
        ListenerAction::Attach
    );
}
