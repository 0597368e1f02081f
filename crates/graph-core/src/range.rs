// File: crates/graph-core/src/range.rs
// Summary: "Nice" Y-axis range/step computation for a given pixel height and font size.

use serde::{Deserialize, Serialize};

/// Stepped value range for the Y axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YRange {
    pub steps: usize,
    pub step_value: f64,
    pub min: f64,
    pub max: f64,
}

impl YRange {
    /// Range spelled out as `start + steps * step_width`.
    pub fn fixed(steps: usize, step_width: f64, start: f64) -> Self {
        Self { steps, step_value: step_width, min: start, max: start + steps as f64 * step_width }
    }

    /// Value at grid line `index` (0 is the axis).
    pub fn value_at(&self, index: usize) -> f64 {
        self.min + index as f64 * self.step_value
    }
}

impl Default for YRange {
    fn default() -> Self {
        Self::fixed(1, 1.0, 0.0)
    }
}

#[inline]
pub fn order_of_magnitude(value: f64) -> i32 {
    value.log10().floor() as i32
}

/// Number of digits after the decimal point in the shortest representation of `value`.
pub fn decimal_places(value: f64) -> usize {
    if value.fract() == 0.0 || !value.is_finite() {
        return 0;
    }
    let repr = format!("{value}");
    repr.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

/// Compute a stepped range covering every present value.
///
/// The step count is fitted between 2 and `floor(drawing_size / (text_size * 1.5))`
/// by doubling or halving a power-of-ten step. With `integers_only`, halving stops
/// once the step would become fractional. Absent values are ignored; an input with
/// no values at all yields `0..1` in one step.
pub fn calculate_scale_range(
    values: &[Option<f64>],
    drawing_size: f32,
    text_size: f32,
    start_from_zero: bool,
    integers_only: bool,
) -> YRange {
    let min_steps = 2.0;
    let max_steps = (f64::from(drawing_size) / (f64::from(text_size) * 1.5)).floor().max(0.0);
    let skip_fitting = min_steps >= max_steps;

    let (mut min_value, mut max_value) = values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !min_value.is_finite() || !max_value.is_finite() {
        return YRange::default();
    }

    if max_value == min_value {
        max_value += 0.5;
        if min_value >= 0.5 && !start_from_zero {
            min_value -= 0.5;
        } else {
            max_value += 0.5;
        }
    }

    let value_range = (max_value - min_value).abs();
    let magnitude = order_of_magnitude(value_range);
    let unit = 10f64.powi(magnitude);
    let graph_max = (max_value / unit).ceil() * unit;
    let graph_min = if start_from_zero { 0.0 } else { (min_value / unit).floor() * unit };
    let graph_range = graph_max - graph_min;
    let mut step_value = unit;
    let mut steps = (graph_range / step_value).round();

    while (steps > max_steps || steps * 2.0 < max_steps) && !skip_fitting {
        if steps > max_steps {
            step_value *= 2.0;
            steps = (graph_range / step_value).round();
        } else if integers_only && magnitude >= 0 {
            if (step_value / 2.0) % 1.0 == 0.0 {
                step_value /= 2.0;
                steps = (graph_range / step_value).round();
            } else {
                break;
            }
        } else {
            step_value /= 2.0;
            steps = (graph_range / step_value).round();
        }
    }

    if skip_fitting {
        steps = min_steps;
        step_value = graph_range / steps;
    }

    YRange {
        steps: steps as usize,
        step_value,
        min: graph_min,
        max: graph_min + steps * step_value,
    }
}
