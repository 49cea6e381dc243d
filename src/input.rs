use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the first active touch, if any.
#[inline]
pub fn first_touch_client(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Canvas backing-store size for a CSS size and device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr).max(0.0) as u32;
    let h = (css_height * dpr).max(0.0) as u32;
    (w.max(1), h.max(1))
}

/// True when a gain change is large enough to be worth writing to the AudioParam.
#[inline]
pub fn gain_changed(previous: f32, next: f32, epsilon: f32) -> bool {
    (previous - next).abs() > epsilon || previous.is_nan() != next.is_nan()
}
