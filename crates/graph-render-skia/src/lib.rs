// File: crates/graph-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing the graph-core Surface trait, with PNG export.

pub mod text;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use graph_core::geometry::RectF;
use graph_core::surface::{FontSpec, Surface, TextAlign, TextBaseline, TextMeasure};
use graph_core::types::{Color, Pos};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;
use text::to_skia;

/// Headless raster target. `clear` fills with the background color.
pub struct SkiaSurface {
    surface: skia::Surface,
    background: Color,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self { surface: raster(width, height)?, background: Color::WHITE, shaper: TextShaper::new() })
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Replace the backing raster; contents are lost.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        self.surface = raster(width, height)?;
        debug!(width, height, "resized raster surface");
        Ok(())
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "wrote PNG");
        Ok(())
    }

    fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }
}

fn raster(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
        .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

fn path_through(points: &[Pos], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        if close {
            path.close();
        }
    }
    path
}

fn to_rect(rect: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
}

impl TextMeasure for SkiaSurface {
    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        self.shaper.measure_width(text, font)
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> (f32, f32) {
        (self.surface.width() as f32, self.surface.height() as f32)
    }

    fn clear(&mut self) {
        let bg = to_skia(self.background);
        self.canvas().clear(bg);
    }

    fn stroke_line(&mut self, from: Pos, to: Pos, color: Color, width: f32) {
        let paint = stroke_paint(color, width);
        self.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn stroke_polyline(&mut self, points: &[Pos], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let mut paint = stroke_paint(color, width);
        paint.set_stroke_join(skia::paint::Join::Round);
        let path = path_through(points, false);
        self.canvas().draw_path(&path, &paint);
    }

    fn fill_polygon(&mut self, points: &[Pos], color: Color) {
        if points.len() < 3 {
            return;
        }
        let path = path_through(points, true);
        self.canvas().draw_path(&path, &fill_paint(color));
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.canvas().draw_rect(to_rect(rect), &fill_paint(color));
    }

    fn fill_rounded_rect(&mut self, rect: RectF, radius: f32, color: Color) {
        self.canvas().draw_round_rect(to_rect(rect), radius, radius, &fill_paint(color));
    }

    fn draw_circle(&mut self, center: Pos, radius: f32, fill: Color, stroke: Color, stroke_width: f32) {
        let canvas = self.canvas();
        canvas.draw_circle((center.x, center.y), radius, &fill_paint(fill));
        if stroke_width > 0.0 && !stroke.is_transparent() {
            canvas.draw_circle((center.x, center.y), radius, &stroke_paint(stroke, stroke_width));
        }
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Pos,
        font: &FontSpec,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, pos, font, color, align, baseline);
    }
}
