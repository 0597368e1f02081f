// File: crates/graph-core/src/dataset.rs
// Summary: Dataset and point models: construction input, live/saved point style, marker drawing.
// Notes:
// - A point keeps its live style next to an explicit `SavedStyle`; `save` and
//   `restore_colors` copy between the two instead of snapshotting ad hoc fields.
// - Pixel positions are transient and recomputed by the draw pipeline every frame.

use serde::{Deserialize, Serialize};

use crate::surface::Surface;
use crate::types::{Color, Pos};

fn enabled_by_default() -> bool {
    true
}

/// One input series. `data`, `xdata` and `labels` are expected to be equal length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetInput {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub point_color: Color,
    pub point_stroke_color: Color,
    #[serde(default)]
    pub point_highlight_fill: Option<Color>,
    #[serde(default)]
    pub point_highlight_stroke: Option<Color>,
    pub data: Vec<Option<f64>>,
    pub xdata: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl DatasetInput {
    /// Enabled dataset using one color for line and markers; samples are filled in later.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: Some(label.into()),
            enabled: true,
            fill_color: Color { a: 51, ..color },
            stroke_color: color,
            point_color: color,
            point_stroke_color: Color::WHITE,
            point_highlight_fill: None,
            point_highlight_stroke: None,
            data: Vec::new(),
            xdata: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Append one `(x, y)` sample with its tooltip label.
    pub fn with_sample(mut self, x: f64, y: Option<f64>, label: impl Into<String>) -> Self {
        self.xdata.push(x);
        self.data.push(y);
        self.labels.push(label.into());
        self
    }
}

/// Construction input for the whole graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    /// X tick labels; their count also sizes the X axis.
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetInput>,
}

/// Stable identity of a point: dataset index and sample index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId {
    pub dataset: usize,
    pub index: usize,
}

/// Marker geometry shared by every point of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub display: bool,
    pub radius: f32,
    pub stroke_width: f32,
    pub hit_detection_radius: f32,
}

/// Snapshot a point animates from and restores colors to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavedStyle {
    pub pos: Pos,
    pub fill: Color,
    pub stroke: Color,
}

#[derive(Clone, Debug)]
pub struct Point {
    id: PointId,
    value: Option<f64>,
    xvalue: f64,
    label: String,
    dataset_label: Option<String>,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub highlight_fill: Color,
    pub highlight_stroke: Color,
    pos: Pos,
    saved: SavedStyle,
}

impl Point {
    pub fn id(&self) -> PointId { self.id }
    pub fn value(&self) -> Option<f64> { self.value }
    pub fn xvalue(&self) -> f64 { self.xvalue }
    pub fn label(&self) -> &str { &self.label }
    pub fn dataset_label(&self) -> Option<&str> { self.dataset_label.as_deref() }
    pub fn pos(&self) -> Pos { self.pos }
    pub fn saved(&self) -> &SavedStyle { &self.saved }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value;
    }

    /// Move immediately and make the new position the animation start.
    pub fn place_at(&mut self, pos: Pos) {
        self.pos = pos;
        self.save();
    }

    /// Snapshot the live position and colors.
    pub fn save(&mut self) {
        self.saved = SavedStyle { pos: self.pos, fill: self.fill_color, stroke: self.stroke_color };
    }

    /// Put back the fill/stroke colors from the last `save`.
    pub fn restore_colors(&mut self) {
        self.fill_color = self.saved.fill;
        self.stroke_color = self.saved.stroke;
    }

    pub fn highlight(&mut self) {
        self.fill_color = self.highlight_fill;
        self.stroke_color = self.highlight_stroke;
    }

    /// Overwrite live colors and persist them as the saved style.
    pub fn repaint(&mut self, fill: Color, stroke: Color) {
        self.fill_color = fill;
        self.stroke_color = stroke;
        self.save();
    }

    /// Interpolate from the saved position towards `target` by `ease` in `[0, 1]`.
    pub fn transition(&mut self, target: Pos, ease: f32) {
        let from = self.saved.pos;
        self.pos = Pos::new(
            from.x + (target.x - from.x) * ease,
            from.y + (target.y - from.y) * ease,
        );
    }

    pub fn distance_sq(&self, pos: Pos) -> f32 {
        self.pos.distance_sq(pos)
    }

    /// Per-axis proximity test using the marker radius plus the hit-detection allowance.
    pub fn in_range(&self, pos: Pos, style: &PointStyle) -> bool {
        let reach = style.radius + style.hit_detection_radius;
        (pos.x - self.pos.x).abs() < reach && (pos.y - self.pos.y).abs() < reach
    }

    /// Anchor for a tooltip caret: just above the marker.
    pub fn tooltip_position(&self, style: &PointStyle) -> Pos {
        Pos::new(self.pos.x, self.pos.y - (style.radius + style.hit_detection_radius))
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &PointStyle) {
        if style.display {
            surface.draw_circle(self.pos, style.radius, self.fill_color, self.stroke_color, style.stroke_width);
        }
    }
}

/// One named series with its color scheme and visibility.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub label: Option<String>,
    pub(crate) enabled: bool,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub point_color: Color,
    pub point_stroke_color: Color,
    pub(crate) points: Vec<Point>,
}

impl Dataset {
    /// Build the dataset and its points. Disabled datasets start in `disabled_color`.
    /// Samples are zipped, so the shortest of `data`/`xdata` bounds the point count.
    pub fn from_input(index: usize, input: &DatasetInput, disabled_color: Color) -> Self {
        let (fill, stroke) = if input.enabled {
            (input.point_color, input.point_stroke_color)
        } else {
            (disabled_color, disabled_color)
        };
        let highlight_fill = input.point_highlight_fill.unwrap_or(input.point_color);
        let highlight_stroke = input.point_highlight_stroke.unwrap_or(input.point_stroke_color);

        let points = input
            .data
            .iter()
            .zip(&input.xdata)
            .enumerate()
            .map(|(i, (&value, &xvalue))| {
                let saved = SavedStyle { pos: Pos::default(), fill, stroke };
                Point {
                    id: PointId { dataset: index, index: i },
                    value,
                    xvalue,
                    label: input.labels.get(i).cloned().unwrap_or_default(),
                    dataset_label: input.label.clone(),
                    fill_color: fill,
                    stroke_color: stroke,
                    highlight_fill,
                    highlight_stroke,
                    pos: Pos::default(),
                    saved,
                }
            })
            .collect();

        Self {
            label: input.label.clone(),
            enabled: input.enabled,
            fill_color: input.fill_color,
            stroke_color: input.stroke_color,
            point_color: input.point_color,
            point_stroke_color: input.point_stroke_color,
            points,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Text shown in the legend row.
    pub fn legend_label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Color of the line and legend swatch for the current visibility.
    pub fn line_color(&self, disabled_color: Color) -> Color {
        if self.enabled { self.stroke_color } else { disabled_color }
    }

    pub fn swatch_color(&self, disabled_color: Color) -> Color {
        if self.enabled { self.point_color } else { disabled_color }
    }
}
