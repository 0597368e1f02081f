// File: crates/graph-core/src/recording.rs
// Summary: Headless Surface that records draw calls; used by tests and hosts without a backend.

use crate::geometry::RectF;
use crate::surface::{FontSpec, Surface, TextAlign, TextBaseline, TextMeasure};
use crate::types::{Color, Pos};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line { from: Pos, to: Pos, color: Color, width: f32 },
    Polyline { points: Vec<Pos>, color: Color, width: f32 },
    Polygon { points: Vec<Pos>, color: Color },
    Rect { rect: RectF, color: Color },
    RoundedRect { rect: RectF, radius: f32, color: Color },
    Circle { center: Pos, radius: f32, fill: Color, stroke: Color, stroke_width: f32 },
    Text { text: String, pos: Pos, size: f32, color: Color, align: TextAlign, baseline: TextBaseline },
}

/// Text is measured with a fixed advance of half the font size per character,
/// so layouts are deterministic across platforms.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `clear` calls seen, i.e. frames started.
    pub fn frame_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Clear)).count()
    }

    /// Commands issued since the most recent `clear`.
    pub fn last_frame(&self) -> &[DrawCommand] {
        match self.commands.iter().rposition(|c| matches!(c, DrawCommand::Clear)) {
            Some(i) => &self.commands[i + 1..],
            None => &self.commands,
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * 0.5
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Pos, to: Pos, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn stroke_polyline(&mut self, points: &[Pos], color: Color, width: f32) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), color, width });
    }

    fn fill_polygon(&mut self, points: &[Pos], color: Color) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), color });
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: RectF, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect { rect, radius, color });
    }

    fn draw_circle(&mut self, center: Pos, radius: f32, fill: Color, stroke: Color, stroke_width: f32) {
        self.commands.push(DrawCommand::Circle { center, radius, fill, stroke, stroke_width });
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
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size: font.size,
            color,
            align,
            baseline,
        });
    }
}
