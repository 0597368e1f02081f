// File: crates/graph-core/src/render.rs
// Summary: Per-frame draw pipeline: clear, scale, per-dataset transition/line/markers, legend on top.

use tracing::trace;

use crate::dataset::{Dataset, PointStyle};
use crate::legend::Legend;
use crate::options::GraphOptions;
use crate::plugin::CustomRenderer;
use crate::registry::PointRegistry;
use crate::scale::ScaleModel;
use crate::surface::Surface;
use crate::types::Pos;

/// Everything a frame reads besides the mutable point registry.
pub struct Frame<'a> {
    pub scale: Option<&'a ScaleModel>,
    pub legend: &'a Legend,
    pub options: &'a GraphOptions,
}

impl Frame<'_> {
    /// Draw one frame at easing fraction `ease` in `[0, 1]`.
    ///
    /// Without a scale only the clear happens. Every point with a value moves
    /// from its saved position toward its target; null samples are skipped by
    /// the line, not interpolated. Markers follow the line of their dataset and
    /// the legend is painted last.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        registry: &mut PointRegistry,
        ease: f32,
        custom: Option<&mut dyn CustomRenderer>,
    ) {
        surface.clear();
        let Some(scale) = self.scale else {
            return;
        };
        trace!(ease, "draw frame");
        scale.draw(surface);

        let style = self.options.point_style();
        for dataset in registry.datasets_mut() {
            self.draw_dataset(surface, scale, dataset, &style, ease);
        }

        self.legend.draw(surface, registry.datasets(), self.options.disabled_color, custom);
    }

    fn draw_dataset<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        scale: &ScaleModel,
        dataset: &mut Dataset,
        style: &PointStyle,
        ease: f32,
    ) {
        let options = self.options;
        for point in dataset.points_mut() {
            if let Some(value) = point.value() {
                point.transition(scale.calculate_pos(point.xvalue(), value), ease);
            }
        }

        let path: Vec<Pos> = dataset.points().iter().filter(|p| p.has_value()).map(|p| p.pos()).collect();
        if path.len() >= 2 {
            if options.dataset_fill {
                let (first, last) = (path[0], path[path.len() - 1]);
                let mut area = path.clone();
                area.push(Pos::new(last.x, scale.end_point()));
                area.push(Pos::new(first.x, scale.end_point()));
                let fill = if dataset.is_enabled() { dataset.fill_color } else { options.disabled_color };
                surface.fill_polygon(&area, fill);
            }
            if options.dataset_stroke {
                surface.stroke_polyline(&path, dataset.line_color(options.disabled_color), options.dataset_stroke_width);
            }
        }

        for point in dataset.points().iter().filter(|p| p.has_value()) {
            point.draw(surface, style);
        }
    }
}
