// File: crates/graph-core/src/registry.rs
// Summary: PointRegistry owns every dataset and its points; visibility toggling and bulk point ops.

use tracing::{debug, warn};

use crate::dataset::{Dataset, DatasetInput, Point, PointId};
use crate::error::{GraphError, GraphResult};
use crate::types::Color;

#[derive(Clone, Debug)]
pub struct PointRegistry {
    datasets: Vec<Dataset>,
    disabled_color: Color,
}

impl PointRegistry {
    pub fn from_inputs(inputs: &[DatasetInput], disabled_color: Color) -> Self {
        let datasets = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                if input.data.len() != input.xdata.len() || input.data.len() != input.labels.len() {
                    warn!(
                        dataset = i,
                        data = input.data.len(),
                        xdata = input.xdata.len(),
                        labels = input.labels.len(),
                        "dataset sequences differ in length; extra samples are dropped"
                    );
                }
                Dataset::from_input(i, input, disabled_color)
            })
            .collect();
        Self { datasets, disabled_color }
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn datasets_mut(&mut self) -> &mut [Dataset] {
        &mut self.datasets
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn disabled_color(&self) -> Color {
        self.disabled_color
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.datasets.get(id.dataset)?.points.get(id.index)
    }

    pub fn point_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.datasets.get_mut(id.dataset)?.points.get_mut(id.index)
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.datasets.iter().flat_map(|d| d.points.iter())
    }

    pub fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.datasets.iter_mut().flat_map(|d| d.points.iter_mut())
    }

    /// Points of enabled datasets only.
    pub fn enabled_points(&self) -> impl Iterator<Item = &Point> {
        self.datasets.iter().filter(|d| d.enabled).flat_map(|d| d.points.iter())
    }

    /// Y values of every point, disabled datasets included.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points().map(Point::value).collect()
    }

    /// X values of every point, disabled datasets included.
    pub fn xvalues(&self) -> Vec<f64> {
        self.points().map(Point::xvalue).collect()
    }

    /// Ids of every point in dataset `index`, empty when out of range.
    pub fn dataset_point_ids(&self, index: usize) -> Vec<PointId> {
        self.datasets
            .get(index)
            .map(|d| d.points.iter().map(Point::id).collect())
            .unwrap_or_default()
    }

    pub fn save_all(&mut self) {
        self.points_mut().for_each(Point::save);
    }

    pub fn restore_all_colors(&mut self) {
        self.points_mut().for_each(Point::restore_colors);
    }

    /// Flip dataset `index` between enabled and disabled, recoloring and saving its points.
    /// Returns the new enabled state.
    pub fn enable_disable_dataset(&mut self, index: usize) -> GraphResult<bool> {
        let len = self.datasets.len();
        let disabled_color = self.disabled_color;
        let dataset = self
            .datasets
            .get_mut(index)
            .ok_or(GraphError::DatasetIndexOutOfRange { index, len })?;

        dataset.enabled = !dataset.enabled;
        let (fill, stroke) = if dataset.enabled {
            (dataset.point_color, dataset.point_stroke_color)
        } else {
            (disabled_color, disabled_color)
        };
        for point in &mut dataset.points {
            point.repaint(fill, stroke);
        }
        debug!(dataset = index, enabled = dataset.enabled, "toggled dataset visibility");
        Ok(dataset.enabled)
    }
}
