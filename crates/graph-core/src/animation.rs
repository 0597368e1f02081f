// File: crates/graph-core/src/animation.rs
// Summary: Easing curves and a step iterator for hosts driving `draw` frame by frame.

pub type Easing = fn(f32) -> f32;

pub fn linear(t: f32) -> f32 {
    t
}

pub fn ease_out_quart(t: f32) -> f32 {
    let u = t - 1.0;
    -(u * u * u * u - 1.0)
}

/// Default number of frames for an entry animation.
pub const DEFAULT_STEPS: u32 = 60;

/// Yields `steps` eased fractions, increasing, the last one exactly 1.0.
#[derive(Clone, Debug)]
pub struct AnimationFrames {
    step: u32,
    steps: u32,
    easing: Easing,
}

impl AnimationFrames {
    pub fn new(steps: u32, easing: Easing) -> Self {
        Self { step: 0, steps: steps.max(1), easing }
    }
}

impl Default for AnimationFrames {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS, ease_out_quart)
    }
}

impl Iterator for AnimationFrames {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.step >= self.steps {
            return None;
        }
        self.step += 1;
        if self.step == self.steps {
            return Some(1.0);
        }
        let t = self.step as f32 / self.steps as f32;
        Some((self.easing)(t).clamp(0.0, 1.0))
    }
}
