// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn view_constants_are_sane() {
    // Damping in (0, 1) keeps smoothing non-oscillatory
    assert!(ROTATION_DAMPING > 0.0 && ROTATION_DAMPING < 1.0);
    assert!(DRAG_DEGREES_PER_PX > 0.0);
    assert!(WHEEL_ZOOM_PER_UNIT > 0.0);
    assert!(SCALE_MIN > 0.0 && SCALE_MIN < SCALE_MAX);
    assert!(SCALE_INITIAL >= SCALE_MIN && SCALE_INITIAL <= SCALE_MAX);
    assert!(PERSPECTIVE_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_constants_are_sane() {
    assert!(HEART_DURATION_MIN_SEC > 0.0);
    assert!(HEART_PEAK_OPACITY > 0.0 && HEART_PEAK_OPACITY <= 1.0);
    assert!(MESSAGE_FALL_MIN_SEC > MESSAGE_TINT_SEC);
    assert!(MESSAGE_MIN_OPACITY > 0.0 && MESSAGE_MIN_OPACITY < 1.0);
    assert!(MESSAGE_MIN_FONT_PX <= MESSAGE_BASE_FONT_PX);
}

#[test]
fn depth_layers_are_sorted_and_symmetric() {
    assert!(DEPTH_LAYERS.windows(2).all(|w| w[0] < w[1]));
    let n = DEPTH_LAYERS.len();
    for i in 0..n {
        assert_eq!(DEPTH_LAYERS[i], -DEPTH_LAYERS[n - 1 - i]);
    }
}
