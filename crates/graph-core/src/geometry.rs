// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Pos;

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Pos) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }
}

/// Half-pixel offset that keeps odd-width strokes crisp.
#[inline]
pub fn alias_pixel(line_width: f32) -> f32 {
    if line_width % 2.0 == 0.0 { 0.0 } else { 0.5 }
}
