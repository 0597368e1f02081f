// File: crates/graph-examples/src/bin/graph.rs
// Summary: Renders an XY graph to PNG frames: entry animation, hover tooltip and a legend toggle.
//
// Usage: example-graph [samples.csv]
// CSV columns: dataset,x,y,label (empty y is a gap in the line).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use graph_core::{
    AnimationFrames, Color, DatasetInput, DispatchOutcome, GraphChart, GraphData, GraphOptions, PointId, PointerEvent,
};
use graph_render_skia::SkiaSurface;
use serde::Deserialize;
use tracing::info;

const PALETTE: [Color; 5] = [
    Color::rgb(220, 80, 80),
    Color::rgb(64, 160, 255),
    Color::rgb(40, 200, 120),
    Color::rgb(240, 170, 40),
    Color::rgb(150, 90, 210),
];

#[derive(Debug, Deserialize)]
struct SampleRow {
    dataset: String,
    x: f64,
    y: Option<f64>,
    #[serde(default)]
    label: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let data = match std::env::args_os().nth(1) {
        Some(path) => load_csv(Path::new(&path))?,
        None => builtin_scenario(),
    };
    info!(datasets = data.datasets.len(), "loaded graph data");

    let out_dir = PathBuf::from("target/out");
    let surface = SkiaSurface::new(graph_core::types::WIDTH, graph_core::types::HEIGHT)?;
    let mut chart = GraphChart::new(surface, data, GraphOptions::default());

    for (i, ease) in AnimationFrames::default().enumerate() {
        chart.draw(Some(ease));
        if i % 15 == 0 {
            chart.surface_mut().write_png(out_dir.join(format!("graph_frame_{i:02}.png")))?;
        }
    }
    chart.surface_mut().write_png(out_dir.join("graph_final.png"))?;

    if let Some(target) = chart.point(PointId { dataset: 0, index: 1 }).map(|p| p.pos()) {
        let outcome = chart.handle_event(&PointerEvent::mouse_move(target.x + 2.0, target.y + 2.0));
        info!(?outcome, "hovered second sample");
        chart.surface_mut().write_png(out_dir.join("graph_tooltip.png"))?;
    }

    let legend = chart.legend();
    let click = PointerEvent::click(legend.x + legend.width / 2.0, legend.line_height(1));
    if let DispatchOutcome::Toggled(index) = chart.handle_event(&click) {
        let enabled = chart.dataset(index).is_some_and(|d| d.is_enabled());
        info!(index, enabled, "toggled dataset from legend");
        chart.surface_mut().write_png(out_dir.join("graph_toggled.png"))?;
    }

    info!(dir = %out_dir.display(), "done");
    Ok(())
}

fn builtin_scenario() -> GraphData {
    let labels: Vec<String> = (1..=6).map(|i| format!("Run {i}")).collect();
    let series = [
        ("Baseline", [0.62, 0.66, 0.71, 0.73, 0.74, 0.75]),
        ("Wide", [0.58, 0.67, 0.74, 0.78, 0.80, 0.81]),
        ("Deep", [0.55, 0.61, 0.69, 0.77, 0.83, 0.86]),
    ];
    let datasets = series
        .iter()
        .zip(PALETTE)
        .map(|((name, ys), color)| {
            ys.iter().enumerate().fold(DatasetInput::new(*name, color), |d, (i, y)| {
                d.with_sample((i + 1) as f64, Some(*y), labels[i].clone())
            })
        })
        .collect();
    GraphData { labels, datasets }
}

/// Group CSV rows by dataset name, in order of first appearance.
fn load_csv(path: &Path) -> Result<GraphData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut order: Vec<String> = Vec::new();
    let mut by_name: BTreeMap<String, DatasetInput> = BTreeMap::new();
    let mut labels: Vec<String> = Vec::new();

    for row in rdr.deserialize() {
        let row: SampleRow = row.with_context(|| format!("reading {}", path.display()))?;
        if !row.label.is_empty() && !labels.contains(&row.label) {
            labels.push(row.label.clone());
        }
        let entry = by_name.entry(row.dataset.clone()).or_insert_with(|| {
            let color = PALETTE[order.len() % PALETTE.len()];
            order.push(row.dataset.clone());
            DatasetInput::new(row.dataset.clone(), color)
        });
        entry.xdata.push(row.x);
        entry.data.push(row.y);
        entry.labels.push(row.label);
    }

    let datasets = order.iter().filter_map(|name| by_name.remove(name)).collect();
    Ok(GraphData { labels, datasets })
}
