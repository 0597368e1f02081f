// File: crates/graph-core/tests/hit_test.rs
// Purpose: Nearest-point lookup and pointer dispatch: highlight, tooltip, legend hover and click.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use graph_core::{
    CustomRenderer, DatasetInput, DispatchOutcome, DrawCommand, GraphData, GraphOptions, LegendView, PointId,
    PointerEvent, Pos, TooltipView,
};

use common::{alpha, chart_with, data, drawn_chart, ALPHA, ALPHA_HIGHLIGHT, BETA};

const fn id(dataset: usize, index: usize) -> PointId {
    PointId { dataset, index }
}

fn nearest(chart: &graph_core::GraphChart<graph_core::RecordingSurface>, x: f32, y: f32) -> Vec<PointId> {
    chart.points_at_event(&PointerEvent::mouse_move(x, y)).iter().map(|p| p.id()).collect()
}

#[test]
fn finds_nearest_enabled_point() {
    let chart = drawn_chart();
    assert_eq!(nearest(&chart, 330.0, 250.0), vec![id(0, 1)]);
    // beta's middle point sits right here but beta is disabled
    assert_eq!(nearest(&chart, 318.0, 214.0), vec![id(0, 1)]);
}

#[test]
fn enabling_makes_points_hittable() {
    let mut chart = drawn_chart();
    chart.enable_disable_dataset(1).unwrap();
    assert_eq!(nearest(&chart, 318.0, 214.0), vec![id(1, 1)]);
}

#[test]
fn nothing_outside_plot_area() {
    let chart = drawn_chart();
    assert!(nearest(&chart, 10.0, 200.0).is_empty());
    assert!(nearest(&chart, 700.0, 200.0).is_empty());
    assert!(nearest(&chart, 300.0, 390.0).is_empty());
}

#[test]
fn ties_keep_the_earlier_dataset() {
    let mut twin = alpha();
    twin.label = Some("twin".into());
    let d = GraphData { labels: vec!["a".into(), "b".into(), "c".into()], datasets: vec![alpha(), twin] };
    let mut chart = chart_with(d, GraphOptions::default());
    chart.draw(None);
    assert_eq!(nearest(&chart, 318.0, 250.0), vec![id(0, 1)]);
}

#[test]
fn points_without_value_are_not_hit() {
    let mut d = data(false);
    d.datasets[0].data[1] = None;
    let mut chart = chart_with(d, GraphOptions::default());
    chart.draw(None);

    assert_eq!(nearest(&chart, 318.0, 255.0), vec![id(0, 0)]);
    assert_eq!(nearest(&chart, 600.0, 370.0), vec![id(0, 2)]);
}

#[test]
fn hover_highlights_and_suppresses_repeat_redraws() {
    let mut chart = drawn_chart();
    let hover = PointerEvent::mouse_move(330.0, 250.0);

    assert_eq!(chart.handle_event(&hover), DispatchOutcome::Redrawn);
    assert_eq!(chart.active_points(), [id(0, 1)]);
    assert_eq!(chart.point(id(0, 1)).unwrap().fill_color, ALPHA_HIGHLIGHT);
    assert_eq!(chart.point(id(0, 0)).unwrap().fill_color, ALPHA);

    let frames = chart.surface().frame_count();
    assert_eq!(chart.handle_event(&PointerEvent::mouse_move(331.0, 251.0)), DispatchOutcome::Unchanged);
    assert_eq!(chart.surface().frame_count(), frames);
}

#[test]
fn moving_to_another_point_restores_the_previous_one() {
    let mut chart = drawn_chart();
    chart.handle_event(&PointerEvent::mouse_move(330.0, 250.0));
    assert_eq!(chart.handle_event(&PointerEvent::mouse_move(600.0, 20.0)), DispatchOutcome::Redrawn);

    assert_eq!(chart.active_points(), [id(0, 2)]);
    assert_eq!(chart.point(id(0, 1)).unwrap().fill_color, ALPHA);
    assert_eq!(chart.point(id(0, 2)).unwrap().fill_color, ALPHA_HIGHLIGHT);
}

#[test]
fn mouse_out_clears_highlight() {
    let mut chart = drawn_chart();
    chart.handle_event(&PointerEvent::mouse_move(330.0, 250.0));

    assert_eq!(chart.handle_event(&PointerEvent::mouse_out(330.0, 250.0)), DispatchOutcome::Redrawn);
    assert!(chart.active_points().is_empty());
    assert_eq!(chart.point(id(0, 1)).unwrap().fill_color, ALPHA);

    assert_eq!(chart.handle_event(&PointerEvent::mouse_out(0.0, 0.0)), DispatchOutcome::Unchanged);
}

#[test]
fn mouse_out_over_legend_activates_nothing() {
    let mut chart = drawn_chart();
    // right edge of the surface, inside the legend's alpha row band
    assert_eq!(chart.handle_event(&PointerEvent::mouse_out(800.0, 200.0)), DispatchOutcome::Unchanged);
    assert!(chart.active_points().is_empty());
    assert!(chart.dataset(0).unwrap().points().iter().all(|p| p.fill_color == ALPHA));

    chart.handle_event(&PointerEvent::mouse_move(760.0, 200.0));
    assert_eq!(chart.handle_event(&PointerEvent::mouse_out(800.0, 200.0)), DispatchOutcome::Redrawn);
    assert!(chart.active_points().is_empty());
}

#[test]
fn in_range_reaches_radius_plus_hit_allowance_per_axis() {
    let options = GraphOptions { point_hit_detection_radius: 2.0, ..GraphOptions::default() };
    let mut chart = chart_with(data(true), options);
    chart.draw(None);
    let style = chart.options().point_style();
    let point = chart.point(id(0, 0)).unwrap();
    let (x, y) = (point.pos().x, point.pos().y);

    assert!(point.in_range(Pos::new(x + 6.9, y), &style));
    assert!(point.in_range(Pos::new(x + 6.0, y - 6.0), &style));
    assert!(!point.in_range(Pos::new(x + 7.0, y), &style));
    assert!(!point.in_range(Pos::new(x, y - 7.0), &style));
}

#[test]
fn single_active_point_shows_tooltip() {
    let mut chart = drawn_chart();
    chart.handle_event(&PointerEvent::mouse_move(330.0, 250.0));

    let frame = chart.surface().last_frame();
    assert!(frame.iter().any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "b: 4")));
    // legend panel plus tooltip box
    let panels: Vec<usize> = frame
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, DrawCommand::RoundedRect { .. }))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(panels.len(), 2);
}

#[test]
fn legend_hover_activates_whole_dataset() {
    let mut chart = drawn_chart();
    assert_eq!(chart.handle_event(&PointerEvent::mouse_move(760.0, 200.0)), DispatchOutcome::Redrawn);
    assert_eq!(chart.active_points(), [id(0, 0), id(0, 1), id(0, 2)]);
    assert!(chart.dataset(0).unwrap().points().iter().all(|p| p.fill_color == ALPHA_HIGHLIGHT));

    // several points active: no tooltip text
    assert!(!chart.surface().last_frame().iter().any(|c| matches!(c, DrawCommand::Text { text, .. } if text.contains(": "))));
}

#[test]
fn legend_title_hover_activates_nothing() {
    let mut chart = drawn_chart();
    assert_eq!(chart.handle_event(&PointerEvent::mouse_move(760.0, 179.0)), DispatchOutcome::Unchanged);
}

#[test]
fn legend_click_toggles_dataset() {
    let mut chart = drawn_chart();
    let frames = chart.surface().frame_count();

    assert_eq!(chart.handle_event(&PointerEvent::click(760.0, 221.0)), DispatchOutcome::Toggled(1));
    assert!(chart.dataset(1).unwrap().is_enabled());
    assert_eq!(chart.surface().frame_count(), frames + 1);
    assert!(chart.surface().last_frame().iter().any(|c| matches!(
        c,
        DrawCommand::Polyline { color, .. } if *color == BETA
    )));

    assert_eq!(chart.handle_event(&PointerEvent::click(760.0, 221.0)), DispatchOutcome::Toggled(1));
    assert!(!chart.dataset(1).unwrap().is_enabled());
}

#[test]
fn click_outside_legend_is_ignored() {
    let mut chart = drawn_chart();
    assert_eq!(chart.handle_event(&PointerEvent::click(330.0, 250.0)), DispatchOutcome::Ignored);
    assert!(chart.active_points().is_empty());
}

#[test]
fn tooltips_can_be_disabled() {
    let options = GraphOptions { show_tooltips: false, ..GraphOptions::default() };
    let mut chart = chart_with(data(false), options);
    chart.draw(None);
    assert_eq!(chart.handle_event(&PointerEvent::mouse_move(330.0, 250.0)), DispatchOutcome::Ignored);
    assert_eq!(chart.point(id(0, 1)).unwrap().fill_color, ALPHA);
}

#[test]
fn forced_tooltip_redraws_same_set() {
    let mut chart = drawn_chart();
    assert_eq!(chart.show_tooltip(vec![id(0, 1)], false), DispatchOutcome::Redrawn);
    assert_eq!(chart.show_tooltip(vec![id(0, 1)], false), DispatchOutcome::Unchanged);
    assert_eq!(chart.show_tooltip(vec![id(0, 1)], true), DispatchOutcome::Redrawn);
}

struct TooltipLog(Rc<RefCell<Vec<Option<String>>>>);

impl CustomRenderer for TooltipLog {
    fn id(&self) -> &'static str {
        "tooltip-log"
    }

    fn legend(&mut self, _legend: &LegendView<'_>) {}

    fn tooltip(&mut self, tooltip: Option<&TooltipView>) {
        self.0.borrow_mut().push(tooltip.map(|t| t.text.clone()));
    }
}

#[test]
fn custom_renderer_receives_tooltip() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chart = chart_with(data(false), GraphOptions::default())
        .with_custom_renderer(Box::new(TooltipLog(Rc::clone(&log))));
    chart.draw(None);

    chart.handle_event(&PointerEvent::mouse_move(330.0, 250.0));
    assert_eq!(*log.borrow(), vec![None, Some("b: 4".to_string())]);
    assert!(!chart.surface().last_frame().iter().any(|c| matches!(c, DrawCommand::RoundedRect { .. })));

    chart.handle_event(&PointerEvent::mouse_out(0.0, 0.0));
    assert_eq!(log.borrow().last(), Some(&None));
}

#[test]
fn unlabeled_point_tooltip_is_the_value() {
    let d = GraphData {
        labels: vec![],
        datasets: vec![DatasetInput::new("solo", ALPHA).with_sample(0.0, Some(2.5), "").with_sample(1.0, Some(10.0), "")],
    };
    let mut chart = chart_with(d, GraphOptions::default());
    chart.draw(None);
    let first = chart.point(id(0, 0)).unwrap().pos();
    chart.handle_event(&PointerEvent::mouse_move(first.x + 1.0, first.y));
    assert!(chart.surface().texts().any(|t| t == "2.5"));
}
