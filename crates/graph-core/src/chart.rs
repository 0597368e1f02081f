// File: crates/graph-core/src/chart.rs
// Summary: GraphChart orchestrator: construction, public API, event dispatch and tooltip handling.

use tracing::{debug, warn};

use crate::dataset::{Dataset, GraphData, Point, PointId};
use crate::error::{GraphError, GraphResult};
use crate::event::{DispatchOutcome, PointerEvent, PointerEventKind};
use crate::hit_test::{active_points_for, nearest_point, ActiveSet};
use crate::legend::{Legend, LegendStyle};
use crate::options::GraphOptions;
use crate::plugin::CustomRenderer;
use crate::registry::PointRegistry;
use crate::render::Frame;
use crate::scale::ScaleModel;
use crate::surface::Surface;
use crate::tooltip::TooltipView;
use crate::types::Pos;

/// An XY graph bound to one drawing surface.
///
/// The chart never schedules its own repaints: the host calls [`GraphChart::draw`]
/// with increasing easing fractions to animate, and feeds pointer input through
/// [`GraphChart::handle_event`].
pub struct GraphChart<S: Surface> {
    surface: S,
    options: GraphOptions,
    labels: Vec<String>,
    registry: PointRegistry,
    scale: Option<ScaleModel>,
    legend: Legend,
    active: ActiveSet,
    custom: Option<Box<dyn CustomRenderer>>,
}

impl<S: Surface> GraphChart<S> {
    /// Build datasets, points, scale and legend. Nothing is drawn yet.
    ///
    /// Without datasets there is no scale and drawing only clears the surface.
    pub fn new(surface: S, data: GraphData, options: GraphOptions) -> Self {
        let size = surface.size();
        let mut registry = PointRegistry::from_inputs(&data.datasets, options.disabled_color);

        let scale = (!registry.is_empty()).then(|| {
            ScaleModel::build(&registry.values(), &registry.xvalues(), &data.labels, size, &options, &surface)
        });
        if let Some(scale) = &scale {
            let start = Pos::new(scale.xend_point(), scale.end_point());
            registry.points_mut().for_each(|p| p.place_at(start));
        }

        let legend_labels = registry.datasets().iter().map(|d| d.legend_label().to_string()).collect();
        let legend = Legend::new(
            size.0,
            size.1 / 2.0,
            options.legend_title.clone(),
            legend_labels,
            LegendStyle::from_options(&options),
            &surface,
        );

        debug!(
            datasets = registry.len(),
            points = registry.points().count(),
            width = size.0,
            height = size.1,
            "constructed graph"
        );

        Self {
            surface,
            options,
            labels: data.labels,
            registry,
            scale,
            legend,
            active: ActiveSet::default(),
            custom: None,
        }
    }

    /// Hand legend and tooltip painting to `renderer`.
    pub fn with_custom_renderer(mut self, renderer: Box<dyn CustomRenderer>) -> Self {
        self.custom = Some(renderer);
        self
    }

    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }
    pub fn options(&self) -> &GraphOptions { &self.options }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn datasets(&self) -> &[Dataset] { self.registry.datasets() }
    pub fn dataset(&self, index: usize) -> Option<&Dataset> { self.registry.datasets().get(index) }
    pub fn registry(&self) -> &PointRegistry { &self.registry }
    pub fn scale(&self) -> Option<&ScaleModel> { self.scale.as_ref() }
    pub fn legend(&self) -> &Legend { &self.legend }
    pub fn active_points(&self) -> &[PointId] { self.active.ids() }
    pub fn point(&self, id: PointId) -> Option<&Point> { self.registry.point(id) }

    /// Change a sample's Y value; takes effect on the next [`GraphChart::update`].
    pub fn set_point_value(&mut self, id: PointId, value: Option<f64>) -> GraphResult<()> {
        let len = self.registry.len();
        if id.dataset >= len {
            return Err(GraphError::DatasetIndexOutOfRange { index: id.dataset, len });
        }
        let point = self
            .registry
            .point_mut(id)
            .ok_or(GraphError::PointIndexOutOfRange { dataset: id.dataset, index: id.index })?;
        point.set_value(value);
        Ok(())
    }

    /// Clear highlights, make current positions the animation start, recompute
    /// the Y range from current values and redraw.
    pub fn update(&mut self) {
        for &id in self.active.ids() {
            if let Some(point) = self.registry.point_mut(id) {
                point.restore_colors();
            }
        }
        self.registry.save_all();
        if let Some(scale) = self.scale.as_mut() {
            scale.rebuild_y_range(&self.registry.values(), &self.surface);
        }
        self.draw(None);
    }

    /// Re-lay out the scale for the surface's current size. Ranges are kept.
    pub fn reflow(&mut self) {
        let size = self.surface.size();
        if let Some(scale) = self.scale.as_mut() {
            scale.update(size, &self.surface);
            debug!(width = size.0, height = size.1, "reflowed scale");
        }
    }

    /// Draw one frame; `None` draws the finished state.
    pub fn draw(&mut self, ease: Option<f32>) {
        let ease = ease.filter(|e| e.is_finite()).map_or(1.0, |e| e.clamp(0.0, 1.0));
        let frame = Frame { scale: self.scale.as_ref(), legend: &self.legend, options: &self.options };
        let custom = self.custom.as_deref_mut().map(|c| c as &mut dyn CustomRenderer);
        frame.draw(&mut self.surface, &mut self.registry, ease, custom);
    }

    /// Toggle dataset visibility; returns the new enabled state. Does not redraw.
    pub fn enable_disable_dataset(&mut self, index: usize) -> GraphResult<bool> {
        self.registry.enable_disable_dataset(index)
    }

    /// The nearest point of an enabled dataset, or nothing outside the plot area.
    pub fn points_at_event(&self, event: &PointerEvent) -> Vec<&Point> {
        self.scale
            .as_ref()
            .and_then(|s| nearest_point(&self.registry, s.plot_bounds(), event.pos))
            .and_then(|id| self.registry.point(id))
            .into_iter()
            .collect()
    }

    /// Route a pointer event: clicks go to the legend toggle, configured tooltip
    /// events to the highlight/tooltip pass.
    pub fn handle_event(&mut self, event: &PointerEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::Ignored;
        if event.kind == PointerEventKind::Click {
            outcome = self.handle_legend_click(event.pos);
        }
        if self.options.show_tooltips && self.options.tooltip_events.contains(&event.kind) {
            let tooltip = self.handle_tooltip_event(event);
            if outcome == DispatchOutcome::Ignored {
                outcome = tooltip;
            }
        }
        outcome
    }

    fn handle_legend_click(&mut self, pos: Pos) -> DispatchOutcome {
        if !self.legend.contains_point(pos) {
            return DispatchOutcome::Ignored;
        }
        let Some(index) = self.legend.dataset_at(pos.y) else {
            return DispatchOutcome::Ignored;
        };
        match self.enable_disable_dataset(index) {
            Ok(_) => {
                self.draw(None);
                DispatchOutcome::Toggled(index)
            }
            Err(err) => {
                warn!(%err, "legend row without dataset");
                DispatchOutcome::Ignored
            }
        }
    }

    fn handle_tooltip_event(&mut self, event: &PointerEvent) -> DispatchOutcome {
        let bounds = self.scale.as_ref().map(ScaleModel::plot_bounds);
        let active = active_points_for(event, &self.legend, bounds, &self.registry);

        self.registry.restore_all_colors();
        for &id in &active {
            if let Some(point) = self.registry.point_mut(id) {
                point.highlight();
            }
        }
        self.show_tooltip(active, false)
    }

    /// Make `ids` the active set and repaint, unless it equals the current set
    /// and `force` is false. A single active point gets a tooltip.
    pub fn show_tooltip(&mut self, ids: Vec<PointId>, force: bool) -> DispatchOutcome {
        if !force && !self.active.is_changed(&ids) {
            return DispatchOutcome::Unchanged;
        }
        debug!(count = ids.len(), "active points changed");
        self.active.replace(ids);
        self.draw(None);

        if let Some(custom) = self.custom.as_mut() {
            custom.tooltip(None);
        }
        if let [id] = self.active.ids() {
            if let Some(point) = self.registry.point(*id) {
                let view = TooltipView::layout(point, &self.options, &self.surface, self.surface.size().0);
                match self.custom.as_mut() {
                    Some(custom) => custom.tooltip(Some(&view)),
                    None => view.draw(&mut self.surface),
                }
            }
        }
        DispatchOutcome::Redrawn
    }
}
