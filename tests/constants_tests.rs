// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use gallery_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_matches_the_scene_design() {
    assert!((AMBIENT_INTENSITY - 0.4).abs() < 1e-6);
    assert!((SUN_INTENSITY - 1.5).abs() < 1e-6);
    assert!((POINT_INTENSITY - 0.5).abs() < 1e-6);
    assert_eq!(SUN_POSITION, [10.0, 15.0, 10.0]);
    assert_eq!(POINT_POSITION, [-10.0, -10.0, -10.0]);
    for c in CLEAR_COLOR_SRGB.iter().chain(&POINT_COLOR_SRGB) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_are_sane() {
    assert!(CLICK_SLOP_PX > 0.0);
    assert_eq!(INTRO_TIMEOUT_MS, 10_000);
    assert!((0.0..=1.0).contains(&MUSIC_VOLUME));
    assert!(HIT_FREQUENCY_HZ > HIT_DROP_HZ);
    assert!(HIT_LEVEL > 0.0 && HIT_LEVEL <= 1.0);
    assert!(HIT_DURATION_SEC > 0.0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, OVERLAY_ID, EXPLORE_BUTTON_ID, MUTE_TOGGLE_ID, LABELS_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_have_logical_relationships() {
    assert!(core::MIN_DISTANCE < core::INITIAL_DISTANCE);
    assert!(core::INITIAL_DISTANCE < core::MAX_DISTANCE);
    assert!(core::MIN_POLAR_ANGLE < core::MAX_POLAR_ANGLE);
    assert!(core::DAMPING > 0.0 && core::DAMPING < 1.0);
    // The intro flight ends at the orbit's resting distance.
    assert!((core::CAMERA_EXPLORE[2] - core::INITIAL_DISTANCE).abs() < 1e-6);
    assert!(core::CAMERA_START[2] <= core::MAX_DISTANCE);
    assert!((1.0 / core::FLIGHT_STEP - 50.0).abs() < 1e-3);
}
