// File: crates/graph-core/src/plugin.rs
// Summary: Custom renderer hook replacing built-in legend and tooltip painting.

use crate::legend::LegendView;
use crate::tooltip::TooltipView;

/// Host-supplied renderer for the overlay parts of the graph.
///
/// When installed, the legend and tooltip are not painted on the surface;
/// the graph only computes their data and hands it over.
pub trait CustomRenderer {
    fn id(&self) -> &'static str;
    /// Called once per frame with the legend contents.
    fn legend(&mut self, legend: &LegendView<'_>);
    /// `None` hides the tooltip; called before every tooltip pass.
    fn tooltip(&mut self, tooltip: Option<&TooltipView>);
}
