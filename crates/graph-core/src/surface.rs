// File: crates/graph-core/src/surface.rs
// Summary: Drawing surface contract consumed by the graph; backends (Skia, recording) implement it.

use serde::{Deserialize, Serialize};

use crate::geometry::RectF;
use crate::types::{Color, Pos};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// Font request passed to text measurement and drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f32,
    pub style: FontStyle,
    pub family: String,
}

impl FontSpec {
    pub fn new(size: f32, style: FontStyle, family: impl Into<String>) -> Self {
        Self { size, style, family: family.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

pub trait TextMeasure {
    /// Advance width of `text` in pixels.
    fn measure_text(&self, text: &str, font: &FontSpec) -> f32;
}

/// Immediate-mode drawing target. Coordinates are surface pixels, origin top-left.
pub trait Surface: TextMeasure {
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn stroke_line(&mut self, from: Pos, to: Pos, color: Color, width: f32);
    /// Connected open path through `points` in order.
    fn stroke_polyline(&mut self, points: &[Pos], color: Color, width: f32);
    /// Closed filled polygon.
    fn fill_polygon(&mut self, points: &[Pos], color: Color);
    fn fill_rect(&mut self, rect: RectF, color: Color);
    fn fill_rounded_rect(&mut self, rect: RectF, radius: f32, color: Color);
    fn draw_circle(&mut self, center: Pos, radius: f32, fill: Color, stroke: Color, stroke_width: f32);
    fn fill_text(
        &mut self,
        text: &str,
        pos: Pos,
        font: &FontSpec,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
    );
}

/// Width of the widest entry in `texts`, 0 when empty.
pub fn longest_text<'a, M, I>(measure: &M, font: &FontSpec, texts: I) -> f32
where
    M: TextMeasure + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .map(|t| measure.measure_text(t, font))
        .fold(0.0, f32::max)
}
