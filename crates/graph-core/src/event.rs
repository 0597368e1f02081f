// File: crates/graph-core/src/event.rs
// Summary: Pointer events delivered by the host and the outcome of dispatching them.

use serde::{Deserialize, Serialize};

use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    MouseMove,
    MouseOut,
    TouchStart,
    TouchMove,
    Click,
}

/// Pointer event already translated into surface-relative pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Pos,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, pos: Pos::new(x, y) }
    }
    pub fn mouse_move(x: f32, y: f32) -> Self { Self::new(PointerEventKind::MouseMove, x, y) }
    pub fn mouse_out(x: f32, y: f32) -> Self { Self::new(PointerEventKind::MouseOut, x, y) }
    pub fn click(x: f32, y: f32) -> Self { Self::new(PointerEventKind::Click, x, y) }
}

/// What a dispatched event did to the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No handler applied to this event.
    Ignored,
    /// The active set did not change; nothing was repainted.
    Unchanged,
    /// The active set changed and the chart was repainted.
    Redrawn,
    /// A legend click toggled the dataset at this index and the chart was repainted.
    Toggled(usize),
}
