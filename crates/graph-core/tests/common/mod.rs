// File: crates/graph-core/tests/common/mod.rs
// Purpose: Shared fixture: two datasets of three samples on an 800x400 recording surface.
//
// With the default options and half-size glyph advance this lays out as:
// Y range 1..10 in 9 steps, plot x 22..614, plot y 12..377,
// legend x 736..800, y 166..234, rows centered at 200 and 221.

#![allow(dead_code)]

use graph_core::{Color, DatasetInput, GraphChart, GraphData, GraphOptions, RecordingSurface};

pub const ALPHA: Color = Color::rgb(220, 60, 60);
pub const BETA: Color = Color::rgb(60, 60, 220);
pub const ALPHA_HIGHLIGHT: Color = Color::rgb(255, 200, 0);

pub fn alpha() -> DatasetInput {
    let mut d = DatasetInput::new("alpha", ALPHA)
        .with_sample(0.0, Some(1.0), "a")
        .with_sample(1.0, Some(4.0), "b")
        .with_sample(2.0, Some(10.0), "c");
    d.point_highlight_fill = Some(ALPHA_HIGHLIGHT);
    d
}

pub fn beta(enabled: bool) -> DatasetInput {
    DatasetInput::new("beta", BETA)
        .with_enabled(enabled)
        .with_sample(0.0, Some(3.0), "a")
        .with_sample(1.0, Some(5.0), "b")
        .with_sample(2.0, Some(7.0), "c")
}

pub fn data(beta_enabled: bool) -> GraphData {
    GraphData {
        labels: vec!["a".into(), "b".into(), "c".into()],
        datasets: vec![alpha(), beta(beta_enabled)],
    }
}

pub fn chart_with(data: GraphData, options: GraphOptions) -> GraphChart<RecordingSurface> {
    GraphChart::new(RecordingSurface::new(800.0, 400.0), data, options)
}

/// Beta starts disabled; one finished frame has been drawn.
pub fn drawn_chart() -> GraphChart<RecordingSurface> {
    let mut chart = chart_with(data(false), GraphOptions::default());
    chart.draw(None);
    chart
}
