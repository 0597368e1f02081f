// File: crates/graph-core/src/scale.rs
// Summary: ScaleModel: pixel mapping for the numeric X and Y axes plus grid/label geometry and drawing.
// Notes:
// - Ranges come from every point of every dataset, disabled ones included, so
//   toggling visibility never moves the axes.
// - `update` only re-lays out pixel geometry; `rebuild_y_range` is the sole
//   path that recomputes the Y range after construction.

use tracing::debug;

use crate::geometry::{alias_pixel, RectF};
use crate::grid::{linspace, min_max};
use crate::options::GraphOptions;
use crate::range::{calculate_scale_range, decimal_places, YRange};
use crate::surface::{longest_text, FontSpec, Surface, TextAlign, TextBaseline, TextMeasure};
use crate::types::{Color, Pos};

/// Gap between the Y labels and the plot, and extra width reserved for them.
const Y_LABEL_GAP: f32 = 10.0;
const TICK_LEN: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct ScaleModel {
    width: f32,
    height: f32,

    font: FontSpec,
    text_color: Color,
    line_color: Color,
    line_width: f32,
    grid_line_color: Color,
    grid_line_width: f32,
    show_horizontal_lines: bool,
    show_vertical_lines: bool,
    show_labels: bool,
    display: bool,
    offset_grid_lines: bool,
    legend_width: f32,
    padding: f32,
    begin_at_zero: bool,
    integers_only: bool,
    y_override: Option<YRange>,

    x_labels: Vec<String>,
    y_labels: Vec<String>,
    y_label_width: f32,
    x_label_width: f32,

    y_range: YRange,
    xmin: f64,
    xmax: f64,
    x_padding_left: f32,
    x_padding_right: f32,
    xstart_point: f32,
    xend_point: f32,
    start_point: f32,
    end_point: f32,
}

impl ScaleModel {
    /// Fit a scale for `size` over all Y `values` and X `xvalues`.
    pub fn build<M: TextMeasure + ?Sized>(
        values: &[Option<f64>],
        xvalues: &[f64],
        labels: &[String],
        size: (f32, f32),
        options: &GraphOptions,
        measure: &M,
    ) -> Self {
        let (xmin, xmax) = min_max(xvalues.iter().copied()).unwrap_or((0.0, 0.0));
        let mut scale = Self {
            width: size.0,
            height: size.1,
            font: options.scale_font(),
            text_color: options.scale_font_color,
            line_color: options.scale_line_color,
            line_width: options.scale_line_width,
            grid_line_color: options.grid_line_color(),
            grid_line_width: options.grid_line_width(),
            show_horizontal_lines: options.scale_show_horizontal_lines,
            show_vertical_lines: options.scale_show_vertical_lines,
            show_labels: options.scale_show_labels,
            display: options.show_scale,
            offset_grid_lines: options.offset_grid_lines,
            legend_width: options.legend_width,
            padding: options.scale_padding(),
            begin_at_zero: options.scale_begin_at_zero,
            integers_only: options.scale_integers_only,
            y_override: options.scale_override.map(|o| o.to_range()),
            x_labels: labels.to_vec(),
            y_labels: Vec::new(),
            y_label_width: 0.0,
            x_label_width: 0.0,
            y_range: YRange::default(),
            xmin,
            xmax,
            x_padding_left: 0.0,
            x_padding_right: 0.0,
            xstart_point: 0.0,
            xend_point: 0.0,
            start_point: 0.0,
            end_point: 0.0,
        };
        scale.layout_vertical();
        scale.calculate_y_range(values);
        scale.build_y_labels(measure);
        scale.layout_horizontal(measure);
        debug!(
            xmin = scale.xmin,
            xmax = scale.xmax,
            ymin = scale.y_range.min,
            ymax = scale.y_range.max,
            steps = scale.y_range.steps,
            "built scale"
        );
        scale
    }

    /// Re-lay out pixel geometry for a resized surface. Ranges and labels are kept.
    pub fn update<M: TextMeasure + ?Sized>(&mut self, size: (f32, f32), measure: &M) {
        self.width = size.0;
        self.height = size.1;
        self.layout_vertical();
        self.layout_horizontal(measure);
    }

    /// Recompute the Y range (automatic mode only) and its labels from `values`.
    /// X padding is left as laid out by the last `build`/`update`.
    pub fn rebuild_y_range<M: TextMeasure + ?Sized>(&mut self, values: &[Option<f64>], measure: &M) {
        self.calculate_y_range(values);
        self.build_y_labels(measure);
    }

    fn calculate_y_range(&mut self, values: &[Option<f64>]) {
        self.y_range = match self.y_override {
            Some(range) => range,
            None => calculate_scale_range(
                values,
                self.end_point - self.start_point,
                self.font.size,
                self.begin_at_zero,
                self.integers_only,
            ),
        };
    }

    fn layout_vertical(&mut self) {
        if self.display {
            self.start_point = self.font.size;
            self.end_point = self.height - self.font.size * 1.5 - 5.0;
        } else {
            self.start_point = 0.0;
            self.end_point = self.height;
        }
        self.start_point += self.padding;
        self.end_point -= self.padding;
    }

    fn build_y_labels<M: TextMeasure + ?Sized>(&mut self, measure: &M) {
        let decimals = decimal_places(self.y_range.step_value);
        self.y_labels = (0..=self.y_range.steps)
            .map(|i| format!("{:.*}", decimals, self.y_range.value_at(i)))
            .collect();
        self.y_label_width = if self.display && self.show_labels {
            longest_text(measure, &self.font, self.y_labels.iter().map(String::as_str)) + Y_LABEL_GAP
        } else {
            0.0
        };
    }

    /// Left padding fits the first X label or the Y labels; right padding fits
    /// the last X label plus the legend allowance.
    fn layout_horizontal<M: TextMeasure + ?Sized>(&mut self, measure: &M) {
        let first = self.x_labels.first().map_or(0.0, |l| measure.measure_text(l, &self.font));
        let last = self.x_labels.last().map_or(0.0, |l| measure.measure_text(l, &self.font));

        self.x_padding_right = last / 2.0 + 3.0 + self.legend_width;
        self.x_padding_left = (first / 2.0).max(self.y_label_width);
        self.x_label_width = longest_text(measure, &self.font, self.x_labels.iter().map(String::as_str));

        self.xstart_point = self.x_padding_left + self.padding;
        self.xend_point = self.width - self.x_padding_right - self.padding;
    }

    pub fn xmin(&self) -> f64 { self.xmin }
    pub fn xmax(&self) -> f64 { self.xmax }
    pub fn y_range(&self) -> YRange { self.y_range }
    pub fn xstart_point(&self) -> f32 { self.xstart_point }
    pub fn xend_point(&self) -> f32 { self.xend_point }
    pub fn start_point(&self) -> f32 { self.start_point }
    pub fn end_point(&self) -> f32 { self.end_point }
    pub fn y_labels(&self) -> &[String] { &self.y_labels }
    pub fn y_label_width(&self) -> f32 { self.y_label_width }
    pub fn x_label_width(&self) -> f32 { self.x_label_width }

    /// Plotted area `[xstart, xend] x [start, end]`.
    pub fn plot_bounds(&self) -> RectF {
        RectF::from_ltrb(self.xstart_point, self.start_point, self.xend_point, self.end_point)
    }

    /// Linear map of an X value into `[xstart_point, xend_point]`.
    /// A degenerate range (single distinct X) maps everything to the midpoint.
    pub fn calculate_x(&self, value: f64) -> f32 {
        let span = self.xmax - self.xmin;
        if span == 0.0 || !span.is_finite() {
            return (self.xstart_point + self.xend_point) / 2.0;
        }
        let scaling = f64::from(self.xend_point - self.xstart_point) / span;
        self.xstart_point + (scaling * (value - self.xmin)) as f32
    }

    /// Linear map of a Y value into `[end_point, start_point]` (larger values are higher up).
    pub fn calculate_y(&self, value: f64) -> f32 {
        let span = self.y_range.max - self.y_range.min;
        if span == 0.0 || !span.is_finite() {
            return self.end_point;
        }
        let scaling = f64::from(self.end_point - self.start_point) / span;
        self.end_point - (scaling * (value - self.y_range.min)) as f32
    }

    pub fn calculate_pos(&self, xvalue: f64, value: f64) -> Pos {
        Pos::new(self.calculate_x(xvalue), self.calculate_y(value))
    }

    /// X values at which the category labels are drawn, evenly spread over `[xmin, xmax]`.
    pub fn x_tick_values(&self) -> Vec<f64> {
        linspace(self.xmin, self.xmax, self.x_labels.len())
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.display {
            return;
        }
        self.draw_y_axis(surface);
        self.draw_x_axis(surface);
    }

    fn line_style(&self, index: usize) -> (Color, f32) {
        if index > 0 {
            (self.grid_line_color, self.grid_line_width)
        } else {
            (self.line_color, self.line_width)
        }
    }

    fn draw_y_axis<S: Surface + ?Sized>(&self, surface: &mut S) {
        let steps = self.y_range.steps.max(1) as f32;
        let gap = (self.end_point - self.start_point) / steps;

        for (i, label) in self.y_labels.iter().enumerate() {
            let center = self.end_point - gap * i as f32;
            let (color, width) = self.line_style(i);
            let line_y = center.round() + alias_pixel(width);

            if self.show_labels {
                surface.fill_text(
                    label,
                    Pos::new(self.xstart_point - Y_LABEL_GAP, center),
                    &self.font,
                    self.text_color,
                    TextAlign::Right,
                    TextBaseline::Middle,
                );
            }
            if i == 0 || self.show_horizontal_lines {
                stroke(surface, Pos::new(self.xstart_point, line_y), Pos::new(self.xend_point, line_y), color, width);
            }
            stroke(
                surface,
                Pos::new(self.xstart_point - TICK_LEN, line_y),
                Pos::new(self.xstart_point, line_y),
                self.line_color,
                self.line_width,
            );
        }
    }

    fn draw_x_axis<S: Surface + ?Sized>(&self, surface: &mut S) {
        let ticks = self.x_tick_values();
        let half_gap = if self.offset_grid_lines && ticks.len() > 1 {
            (self.xend_point - self.xstart_point) / (ticks.len() - 1) as f32 / 2.0
        } else {
            0.0
        };

        for (i, (label, value)) in self.x_labels.iter().zip(ticks).enumerate() {
            let (color, width) = self.line_style(i);
            let x = self.calculate_x(value) + alias_pixel(width);
            let line_x = x - half_gap;

            if i == 0 || self.show_vertical_lines {
                stroke(surface, Pos::new(line_x, self.end_point), Pos::new(line_x, self.start_point - 3.0), color, width);
            }
            stroke(
                surface,
                Pos::new(line_x, self.end_point),
                Pos::new(line_x, self.end_point + TICK_LEN),
                self.line_color,
                self.line_width,
            );
            if self.show_labels {
                surface.fill_text(
                    label,
                    Pos::new(x, self.end_point + 8.0),
                    &self.font,
                    self.text_color,
                    TextAlign::Center,
                    TextBaseline::Top,
                );
            }
        }
    }
}

fn stroke<S: Surface + ?Sized>(surface: &mut S, from: Pos, to: Pos, color: Color, width: f32) {
    if width > 0.0 && !color.is_transparent() {
        surface.stroke_line(from, to, color, width);
    }
}
