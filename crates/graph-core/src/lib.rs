// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the XY graph model, layout, hit testing and draw pipeline.

pub mod animation;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod options;
pub mod plugin;
pub mod range;
pub mod recording;
pub mod registry;
pub mod render;
pub mod scale;
pub mod surface;
pub mod tooltip;
pub mod types;

pub use animation::{ease_out_quart, linear, AnimationFrames, Easing};
pub use chart::GraphChart;
pub use dataset::{Dataset, DatasetInput, GraphData, Point, PointId, PointStyle};
pub use error::{GraphError, GraphResult};
pub use event::{DispatchOutcome, PointerEvent, PointerEventKind};
pub use geometry::RectF;
pub use hit_test::{nearest_point, ActiveSet};
pub use legend::{Legend, LegendStyle, LegendView};
pub use options::{GraphOptions, ScaleOverride};
pub use plugin::CustomRenderer;
pub use range::{calculate_scale_range, YRange};
pub use recording::{DrawCommand, RecordingSurface};
pub use registry::PointRegistry;
pub use scale::ScaleModel;
pub use surface::{FontSpec, FontStyle, Surface, TextAlign, TextBaseline, TextMeasure};
pub use tooltip::TooltipView;
pub use types::{Color, Pos};
