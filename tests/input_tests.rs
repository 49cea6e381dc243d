// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(333.5, 200.25, 1.5), (500, 300));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 50.0, 1.0), (1, 50));
    assert_eq!(backing_size(f64::NAN, 10.0, 1.0), (1, 10));
}

#[test]
fn gain_changed_ignores_tiny_deltas() {
    assert!(!gain_changed(0.1, 0.1, 1e-4));
    assert!(!gain_changed(0.1, 0.10005, 1e-4));
    assert!(gain_changed(0.1, 0.2, 1e-4));
    assert!(gain_changed(0.2, 0.1, 1e-4));
}

#[test]
fn gain_changed_handles_nan() {
    assert!(gain_changed(f32::NAN, 0.1, 1e-4));
    assert!(gain_changed(0.1, f32::NAN, 1e-4));
}
