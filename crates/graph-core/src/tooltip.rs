// File: crates/graph-core/src/tooltip.rs
// Summary: Single-point tooltip: text, box/caret placement within the surface, and painting.

use crate::dataset::Point;
use crate::geometry::RectF;
use crate::options::GraphOptions;
use crate::surface::{FontSpec, Surface, TextAlign, TextBaseline, TextMeasure};
use crate::types::{Color, Pos};

const CARET_PADDING: f32 = 2.0;

/// `"label: value"`, or just the value when the point has no label.
pub fn tooltip_text(point: &Point) -> String {
    let value = point.value().map(|v| v.to_string()).unwrap_or_default();
    if point.label().is_empty() {
        value
    } else {
        format!("{}: {}", point.label(), value)
    }
}

/// Laid-out tooltip, also handed to custom renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    pub text: String,
    /// Point the caret touches.
    pub anchor: Pos,
    pub rect: RectF,
    pub caret: [Pos; 3],
    pub corner_radius: f32,
    pub font: FontSpec,
    pub fill_color: Color,
    pub text_color: Color,
}

impl TooltipView {
    /// Place a tooltip for `point` above it (below when there is no room),
    /// shifting sideways when it would leave a surface of `surface_width`.
    pub fn layout<M: TextMeasure + ?Sized>(
        point: &Point,
        options: &GraphOptions,
        measure: &M,
        surface_width: f32,
    ) -> Self {
        let font = options.tooltip_font();
        let text = tooltip_text(point);
        let tip = point.tooltip_position(&options.point_style());
        let anchor = Pos::new(tip.x.round(), tip.y.round());

        let caret_size = options.tooltip_caret_size;
        let corner = options.tooltip_corner_radius;
        let width = measure.measure_text(&text, &font) + options.tooltip_x_padding * 2.0;
        let rect_height = font.size + options.tooltip_y_padding * 2.0;
        let total_height = rect_height + caret_size + CARET_PADDING;

        let mut left = anchor.x - width / 2.0;
        if anchor.x + width / 2.0 > surface_width {
            left = anchor.x - width + (corner + caret_size);
        } else if anchor.x - width / 2.0 < 0.0 {
            left = anchor.x - (corner + caret_size);
        }

        let (top, caret) = if anchor.y - total_height < 0.0 {
            let base = anchor.y + CARET_PADDING + caret_size;
            (
                base,
                [
                    Pos::new(anchor.x, anchor.y + CARET_PADDING),
                    Pos::new(anchor.x + caret_size, base),
                    Pos::new(anchor.x - caret_size, base),
                ],
            )
        } else {
            let base = anchor.y - (CARET_PADDING + caret_size);
            (
                anchor.y - total_height,
                [
                    Pos::new(anchor.x, anchor.y - CARET_PADDING),
                    Pos::new(anchor.x + caret_size, base),
                    Pos::new(anchor.x - caret_size, base),
                ],
            )
        };

        Self {
            text,
            anchor,
            rect: RectF::from_ltwh(left, top, width, rect_height),
            caret,
            corner_radius: corner,
            font,
            fill_color: options.tooltip_fill_color,
            text_color: options.tooltip_font_color,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_polygon(&self.caret, self.fill_color);
        surface.fill_rounded_rect(self.rect, self.corner_radius, self.fill_color);
        surface.fill_text(
            &self.text,
            Pos::new(self.rect.left + self.rect.width() / 2.0, self.rect.top + self.rect.height() / 2.0),
            &self.font,
            self.text_color,
            TextAlign::Center,
            TextBaseline::Middle,
        );
    }
}
