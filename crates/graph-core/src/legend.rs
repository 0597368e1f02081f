// File: crates/graph-core/src/legend.rs
// Summary: Legend panel: geometry, row lookup in both directions, hit-testing and painting.
// Notes:
// - Row 0 is the title; row `i >= 1` shows dataset `i - 1`.
// - The bounding box is fixed at construction; toggles only change colors.

use crate::dataset::Dataset;
use crate::geometry::RectF;
use crate::options::GraphOptions;
use crate::plugin::CustomRenderer;
use crate::surface::{longest_text, FontSpec, Surface, TextAlign, TextBaseline, TextMeasure};
use crate::types::{Color, Pos};

/// Gap between the color swatch and the label text.
const SWATCH_GAP: f32 = 3.0;

/// Paint and spacing for the legend, taken from the tooltip options.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendStyle {
    pub x_padding: f32,
    pub y_padding: f32,
    pub font: FontSpec,
    pub title_font: FontSpec,
    pub fill_color: Color,
    pub text_color: Color,
    pub title_text_color: Color,
    pub corner_radius: f32,
    pub swatch_background: Color,
}

impl LegendStyle {
    pub fn from_options(options: &GraphOptions) -> Self {
        Self {
            x_padding: options.tooltip_x_padding,
            y_padding: options.tooltip_y_padding,
            font: options.tooltip_font(),
            title_font: options.tooltip_title_font(),
            fill_color: options.tooltip_fill_color,
            text_color: options.tooltip_font_color,
            title_text_color: options.tooltip_title_font_color,
            corner_radius: options.tooltip_corner_radius,
            swatch_background: options.multi_tooltip_key_background,
        }
    }
}

/// One dataset row as handed to a custom renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow<'a> {
    pub dataset: usize,
    pub label: &'a str,
    pub color: Color,
    pub enabled: bool,
    /// Vertical center of the row.
    pub line_y: f32,
}

/// Read-only legend data for custom renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendView<'a> {
    pub bounds: RectF,
    pub title: &'a str,
    pub title_y: f32,
    pub rows: Vec<LegendRow<'a>>,
}

#[derive(Clone, Debug)]
pub struct Legend {
    /// Left edge.
    pub x: f32,
    /// Vertical center.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    title: String,
    labels: Vec<String>,
    style: LegendStyle,
}

impl Legend {
    /// Size the panel for `labels` and place it so its right edge sits at
    /// `right_x`, vertically centered on `center_y`.
    pub fn new<M: TextMeasure + ?Sized>(
        right_x: f32,
        center_y: f32,
        title: impl Into<String>,
        labels: Vec<String>,
        style: LegendStyle,
        measure: &M,
    ) -> Self {
        let title = title.into();
        let rows = labels.len() as f32;
        let font_size = style.font.size;
        let height = rows * font_size
            + (rows - 1.0) * (font_size / 2.0)
            + style.y_padding * 2.0
            + style.title_font.size * 1.5;

        let title_width = measure.measure_text(&title, &style.title_font);
        let label_width = longest_text(measure, &style.font, labels.iter().map(String::as_str))
            + font_size
            + SWATCH_GAP;
        let width = label_width.max(title_width) + style.x_padding * 2.0;

        Self { x: right_x - width, y: center_y, width, height, title, labels, style }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn style(&self) -> &LegendStyle {
        &self.style
    }

    pub fn bounds(&self) -> RectF {
        RectF::from_ltwh(self.x, self.y - self.height / 2.0, self.width, self.height)
    }

    fn base_line(&self) -> f32 {
        self.y - self.height / 2.0 + self.style.y_padding
    }

    /// Top of the first dataset row; everything above belongs to the title band.
    fn rows_top(&self) -> f32 {
        self.base_line() + self.style.title_font.size * 1.5
    }

    /// Vertical center of row `index`; 0 is the title.
    pub fn line_height(&self, index: usize) -> f32 {
        let font_size = self.style.font.size;
        if index == 0 {
            self.base_line() + self.style.title_font.size / 2.0
        } else {
            self.rows_top() + font_size * 1.5 * (index - 1) as f32 + font_size / 2.0
        }
    }

    /// Row (`>= 1`) whose band contains `y`, the inverse of [`Legend::line_height`].
    /// `None` above the first dataset row or below the last.
    pub fn reverse_line_height(&self, y: f32) -> Option<usize> {
        let offset = y - self.rows_top();
        if offset < 0.0 {
            return None;
        }
        let row = (offset / (self.style.font.size * 1.5)).floor() as usize + 1;
        (row <= self.labels.len()).then_some(row)
    }

    /// Dataset index of the row under `y`.
    pub fn dataset_at(&self, y: f32) -> Option<usize> {
        self.reverse_line_height(y).map(|row| row - 1)
    }

    pub fn contains_point(&self, p: Pos) -> bool {
        self.bounds().contains(p)
    }

    pub fn view<'a>(&'a self, datasets: &'a [Dataset], disabled_color: Color) -> LegendView<'a> {
        let rows = datasets
            .iter()
            .enumerate()
            .map(|(i, d)| LegendRow {
                dataset: i,
                label: d.legend_label(),
                color: d.swatch_color(disabled_color),
                enabled: d.is_enabled(),
                line_y: self.line_height(i + 1),
            })
            .collect();
        LegendView { bounds: self.bounds(), title: &self.title, title_y: self.line_height(0), rows }
    }

    /// Paint the panel, or hand the legend data to `custom` instead.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        datasets: &[Dataset],
        disabled_color: Color,
        custom: Option<&mut dyn CustomRenderer>,
    ) {
        if let Some(custom) = custom {
            custom.legend(&self.view(datasets, disabled_color));
            return;
        }

        let style = &self.style;
        surface.fill_rounded_rect(self.bounds(), style.corner_radius, style.fill_color);
        surface.fill_text(
            &self.title,
            Pos::new(self.x + style.x_padding, self.line_height(0)),
            &style.title_font,
            style.title_text_color,
            TextAlign::Left,
            TextBaseline::Middle,
        );

        let size = style.font.size;
        for (i, dataset) in datasets.iter().enumerate() {
            let line_y = self.line_height(i + 1);
            surface.fill_text(
                dataset.legend_label(),
                Pos::new(self.x + style.x_padding + size + SWATCH_GAP, line_y),
                &style.font,
                style.text_color,
                TextAlign::Left,
                TextBaseline::Middle,
            );
            let swatch = RectF::from_ltwh(self.x + style.x_padding, line_y - size / 2.0, size, size);
            surface.fill_rect(swatch, style.swatch_background);
            surface.fill_rect(swatch, dataset.swatch_color(disabled_color));
        }
    }
}
