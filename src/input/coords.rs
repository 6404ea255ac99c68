//! Pointer distance helpers shared by the drag handlers.

use gpui::{Pixels, Point};

/// True if `current` is more than `threshold` pixels from `press` on either axis
#[inline]
pub fn exceeds_threshold(press: Point<Pixels>, current: Point<Pixels>, threshold: f32) -> bool {
    let dx = (f32::from(current.x) - f32::from(press.x)).abs();
    let dy = (f32::from(current.y) - f32::from(press.y)).abs();
    dx > threshold || dy > threshold
}

/// Signed horizontal travel from `from` to `to`
#[inline]
pub fn horizontal_delta(from: Pixels, to: Pixels) -> f32 {
    f32::from(to) - f32::from(from)
}

/// CSS-style width string, e.g. `"120px"`
#[inline]
pub fn format_width(width: f32) -> String {
    format!("{}px", width)
}
