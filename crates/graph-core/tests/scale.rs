// File: crates/graph-core/tests/scale.rs
// Purpose: Scale fitting, value-to-pixel mapping, re-layout and axis drawing.

mod common;

use approx::assert_relative_eq;
use proptest::prelude::*;
use graph_core::{DrawCommand, GraphOptions, PointId, RecordingSurface, ScaleModel, ScaleOverride, YRange};

use common::{chart_with, data, drawn_chart};

#[test]
fn fits_range_over_all_datasets() {
    let chart = chart_with(data(false), GraphOptions::default());
    let scale = chart.scale().expect("scale");

    // beta is disabled but still counts towards the range
    assert_eq!(scale.y_range(), YRange { steps: 9, step_value: 1.0, min: 1.0, max: 10.0 });
    assert_eq!((scale.xmin(), scale.xmax()), (0.0, 2.0));
    assert_eq!(scale.y_labels().first().map(String::as_str), Some("1"));
    assert_eq!(scale.y_labels().last().map(String::as_str), Some("10"));
}

#[test]
fn plot_area_reserves_labels_and_legend() {
    let chart = chart_with(data(true), GraphOptions::default());
    let scale = chart.scale().expect("scale");

    assert_relative_eq!(scale.start_point(), 12.0);
    assert_relative_eq!(scale.end_point(), 377.0);
    assert_relative_eq!(scale.y_label_width(), 22.0);
    assert_relative_eq!(scale.xstart_point(), 22.0);
    assert_relative_eq!(scale.xend_point(), 614.0);
}

#[test]
fn maps_values_linearly() {
    let chart = chart_with(data(true), GraphOptions::default());
    let scale = chart.scale().expect("scale");

    assert_relative_eq!(scale.calculate_x(0.0), 22.0);
    assert_relative_eq!(scale.calculate_x(1.0), 318.0);
    assert_relative_eq!(scale.calculate_x(2.0), 614.0);
    assert_relative_eq!(scale.calculate_y(1.0), 377.0);
    assert_relative_eq!(scale.calculate_y(10.0), 12.0);
    assert_relative_eq!(scale.calculate_y(4.0), 377.0 - 365.0 / 3.0, epsilon = 1e-3);
}

#[test]
fn single_x_value_maps_to_center() {
    let mut d = data(true);
    for ds in &mut d.datasets {
        ds.xdata.iter_mut().for_each(|x| *x = 5.0);
    }
    let chart = chart_with(d, GraphOptions::default());
    let scale = chart.scale().expect("scale");
    assert_relative_eq!(scale.calculate_x(5.0), (22.0 + 614.0) / 2.0);
}

#[test]
fn override_replaces_automatic_range() {
    let options = GraphOptions {
        scale_override: Some(ScaleOverride { steps: 4, step_width: 5.0, start_value: 0.0 }),
        ..GraphOptions::default()
    };
    let chart = chart_with(data(true), options);
    let scale = chart.scale().expect("scale");
    assert_eq!(scale.y_range(), YRange { steps: 4, step_value: 5.0, min: 0.0, max: 20.0 });
    assert_eq!(scale.y_labels(), ["0", "5", "10", "15", "20"]);
}

#[test]
fn begin_at_zero_starts_axis_at_zero() {
    let options = GraphOptions { scale_begin_at_zero: true, ..GraphOptions::default() };
    let chart = chart_with(data(true), options);
    assert_eq!(chart.scale().expect("scale").y_range().min, 0.0);
}

#[test]
fn hidden_scale_pads_for_markers() {
    let options = GraphOptions { show_scale: false, ..GraphOptions::default() };
    let chart = chart_with(data(true), options);
    let scale = chart.scale().expect("scale");

    // marker radius 5 + stroke 2
    assert_relative_eq!(scale.start_point(), 7.0);
    assert_relative_eq!(scale.end_point(), 393.0);
    assert_eq!(scale.y_label_width(), 0.0);
}

#[test]
fn update_recomputes_y_range_from_new_values() {
    let mut chart = chart_with(data(true), GraphOptions::default());
    chart.set_point_value(PointId { dataset: 0, index: 2 }, Some(40.0)).unwrap();
    chart.update();

    let range = chart.scale().expect("scale").y_range();
    assert!(range.max >= 40.0);
    assert!(range.min <= 1.0);
}

#[test]
fn reflow_keeps_ranges() {
    let mut chart = chart_with(data(true), GraphOptions::default());
    let before = chart.scale().expect("scale").y_range();

    chart.surface_mut().resize(1000.0, 500.0);
    chart.reflow();

    let scale = chart.scale().expect("scale");
    assert_eq!(scale.y_range(), before);
    assert_relative_eq!(scale.end_point(), 477.0);
    assert_relative_eq!(scale.xend_point(), 814.0);
}

#[test]
fn draws_axis_labels() {
    let chart = drawn_chart();
    let texts: Vec<&str> = chart.surface().texts().collect();
    for expected in ["1", "10", "a", "b", "c"] {
        assert!(texts.contains(&expected), "missing label {expected}");
    }
}

#[test]
fn hidden_grid_lines_draw_only_axes() {
    let options = GraphOptions { scale_show_grid_lines: false, ..GraphOptions::default() };
    let scale = ScaleModel::build(
        &[Some(0.0), Some(2.0)],
        &[0.0, 1.0],
        &["x".to_string(), "y".to_string()],
        (400.0, 200.0),
        &options,
        &RecordingSurface::new(400.0, 200.0),
    );
    let mut surface = RecordingSurface::new(400.0, 200.0);
    scale.draw(&mut surface);

    let grid = options.scale_grid_line_color;
    assert!(!surface
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Line { color, .. } if *color == grid)));
    let axis_lines = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { color, .. } if *color == options.scale_line_color))
        .count();
    assert!(axis_lines >= 2);
}

#[test]
fn vertical_grid_lines_align_to_their_own_width() {
    let options = GraphOptions { scale_grid_line_width: 2.0, scale_line_width: 1.0, ..GraphOptions::default() };
    let scale = ScaleModel::build(
        &[Some(0.0), Some(2.0)],
        &[0.0, 1.0],
        &["x".to_string(), "y".to_string()],
        (400.0, 200.0),
        &options,
        &RecordingSurface::new(400.0, 200.0),
    );
    let mut surface = RecordingSurface::new(400.0, 200.0);
    scale.draw(&mut surface);

    let vertical = |color: graph_core::Color, width: f32| {
        surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, color: c, width: w } if from.x == to.x && *c == color && *w == width => Some(from.x),
                _ => None,
            })
            .collect::<Vec<f32>>()
    };
    // even-width grid line sits on the value, odd-width axis line is offset by half a pixel
    assert_eq!(vertical(options.scale_grid_line_color, 2.0), vec![scale.calculate_x(1.0)]);
    assert!(vertical(options.scale_line_color, 1.0).contains(&(scale.calculate_x(0.0) + 0.5)));
}

#[test]
fn x_ticks_spread_over_x_range() {
    let chart = chart_with(data(true), GraphOptions::default());
    assert_eq!(chart.scale().expect("scale").x_tick_values(), vec![0.0, 1.0, 2.0]);
}

#[test]
fn ranges_ignore_enabled_state() {
    let all_on = chart_with(data(true), GraphOptions::default());
    let mut d = data(false);
    d.datasets[0].enabled = false;
    let all_off = chart_with(d, GraphOptions::default());

    let (a, b) = (all_on.scale().expect("scale"), all_off.scale().expect("scale"));
    assert_eq!(a.y_range(), b.y_range());
    assert_eq!((a.xmin(), a.xmax()), (b.xmin(), b.xmax()));
}

proptest! {
    #[test]
    fn x_mapping_is_monotonic(xmin in -1e3f64..1e3, span in 0.1f64..1e3, a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let mut d = data(true);
        d.datasets[0].xdata = vec![xmin, xmin + span / 2.0, xmin + span];
        d.datasets[1].xdata = vec![xmin; 3];
        let chart = chart_with(d, GraphOptions::default());
        let scale = chart.scale().expect("scale");

        prop_assert!((scale.calculate_x(xmin) - scale.xstart_point()).abs() < 1e-3);
        prop_assert!((scale.calculate_x(xmin + span) - scale.xend_point()).abs() < 1e-2);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale.calculate_x(xmin + lo * span) <= scale.calculate_x(xmin + hi * span));
    }
}
