// File: crates/graph-core/src/options.rs
// Summary: GraphOptions, the plain configuration struct recognized by the graph, with defaults.

use serde::{Deserialize, Serialize};

use crate::dataset::PointStyle;
use crate::event::PointerEventKind;
use crate::range::YRange;
use crate::surface::{FontSpec, FontStyle};
use crate::types::Color;

const DEFAULT_FONT_FAMILY: &str = "Helvetica Neue";

/// Manual Y range: `steps` lines of `step_width` starting at `start_value`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleOverride {
    pub steps: usize,
    pub step_width: f64,
    pub start_value: f64,
}

impl ScaleOverride {
    pub fn to_range(self) -> YRange {
        YRange::fixed(self.steps, self.step_width, self.start_value)
    }
}

/// Everything the graph reads from configuration.
///
/// Serializable so hosts can persist a setup; missing fields fall back to
/// [`GraphOptions::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    // Scale
    pub show_scale: bool,
    pub scale_show_labels: bool,
    pub scale_show_grid_lines: bool,
    pub scale_grid_line_color: Color,
    pub scale_grid_line_width: f32,
    pub scale_show_horizontal_lines: bool,
    pub scale_show_vertical_lines: bool,
    pub scale_line_color: Color,
    pub scale_line_width: f32,
    pub scale_font_size: f32,
    pub scale_font_style: FontStyle,
    pub scale_font_family: String,
    pub scale_font_color: Color,
    pub scale_begin_at_zero: bool,
    pub scale_integers_only: bool,
    pub scale_override: Option<ScaleOverride>,
    pub offset_grid_lines: bool,

    // Points and lines
    pub point_dot: bool,
    pub point_dot_radius: f32,
    pub point_dot_stroke_width: f32,
    pub point_hit_detection_radius: f32,
    pub dataset_stroke: bool,
    pub dataset_stroke_width: f32,
    pub dataset_fill: bool,

    // Legend and visibility
    pub legend_width: f32,
    pub legend_title: String,
    pub disabled_color: Color,

    // Tooltips (the legend panel shares their styling)
    pub show_tooltips: bool,
    pub tooltip_events: Vec<PointerEventKind>,
    pub tooltip_fill_color: Color,
    pub tooltip_font_size: f32,
    pub tooltip_font_style: FontStyle,
    pub tooltip_font_family: String,
    pub tooltip_font_color: Color,
    pub tooltip_title_font_size: f32,
    pub tooltip_title_font_style: FontStyle,
    pub tooltip_title_font_family: String,
    pub tooltip_title_font_color: Color,
    pub tooltip_x_padding: f32,
    pub tooltip_y_padding: f32,
    pub tooltip_caret_size: f32,
    pub tooltip_corner_radius: f32,
    pub multi_tooltip_key_background: Color,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            show_scale: true,
            scale_show_labels: true,
            scale_show_grid_lines: true,
            scale_grid_line_color: Color::rgba(0, 0, 0, 0.05),
            scale_grid_line_width: 1.0,
            scale_show_horizontal_lines: true,
            scale_show_vertical_lines: true,
            scale_line_color: Color::rgba(0, 0, 0, 0.1),
            scale_line_width: 1.0,
            scale_font_size: 12.0,
            scale_font_style: FontStyle::Normal,
            scale_font_family: DEFAULT_FONT_FAMILY.to_string(),
            scale_font_color: Color::rgb(0x66, 0x66, 0x66),
            scale_begin_at_zero: false,
            scale_integers_only: true,
            scale_override: None,
            offset_grid_lines: false,

            point_dot: true,
            point_dot_radius: 5.0,
            point_dot_stroke_width: 2.0,
            point_hit_detection_radius: 0.0,
            dataset_stroke: true,
            dataset_stroke_width: 2.0,
            dataset_fill: false,

            legend_width: 180.0,
            legend_title: "Models".to_string(),
            disabled_color: Color::rgba(0, 0, 0, 0.02),

            show_tooltips: true,
            tooltip_events: vec![
                PointerEventKind::MouseMove,
                PointerEventKind::TouchStart,
                PointerEventKind::TouchMove,
                PointerEventKind::MouseOut,
            ],
            tooltip_fill_color: Color::rgba(0, 0, 0, 0.8),
            tooltip_font_size: 14.0,
            tooltip_font_style: FontStyle::Normal,
            tooltip_font_family: DEFAULT_FONT_FAMILY.to_string(),
            tooltip_font_color: Color::WHITE,
            tooltip_title_font_size: 14.0,
            tooltip_title_font_style: FontStyle::Bold,
            tooltip_title_font_family: DEFAULT_FONT_FAMILY.to_string(),
            tooltip_title_font_color: Color::WHITE,
            tooltip_x_padding: 6.0,
            tooltip_y_padding: 6.0,
            tooltip_caret_size: 8.0,
            tooltip_corner_radius: 6.0,
            multi_tooltip_key_background: Color::WHITE,
        }
    }
}

impl GraphOptions {
    pub fn scale_font(&self) -> FontSpec {
        FontSpec::new(self.scale_font_size, self.scale_font_style, self.scale_font_family.clone())
    }

    pub fn tooltip_font(&self) -> FontSpec {
        FontSpec::new(self.tooltip_font_size, self.tooltip_font_style, self.tooltip_font_family.clone())
    }

    pub fn tooltip_title_font(&self) -> FontSpec {
        FontSpec::new(
            self.tooltip_title_font_size,
            self.tooltip_title_font_style,
            self.tooltip_title_font_family.clone(),
        )
    }

    /// Grid line width, 0 when grid lines are hidden.
    pub fn grid_line_width(&self) -> f32 {
        if self.scale_show_grid_lines { self.scale_grid_line_width } else { 0.0 }
    }

    /// Grid line color, transparent when grid lines are hidden.
    pub fn grid_line_color(&self) -> Color {
        if self.scale_show_grid_lines { self.scale_grid_line_color } else { Color::TRANSPARENT }
    }

    /// Inner padding of the plot area; only used when the scale is hidden so markers are not clipped.
    pub fn scale_padding(&self) -> f32 {
        if self.show_scale { 0.0 } else { self.point_dot_radius + self.point_dot_stroke_width }
    }

    pub fn point_style(&self) -> PointStyle {
        PointStyle {
            display: self.point_dot,
            radius: self.point_dot_radius,
            stroke_width: self.point_dot_stroke_width,
            hit_detection_radius: self.point_hit_detection_radius,
        }
    }
}
