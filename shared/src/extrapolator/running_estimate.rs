use crate::SmoothingConfig;

/// A non-negative running estimate that rises fast and falls slowly.
#[derive(Clone, Debug, PartialEq)]
pub struct RunningEstimate {
    value: f64,
    rise_weight: f64,
    fall_weight: f64,
}

impl RunningEstimate {
    /// Weights outside `[0, 1]` (or NaN) are clamped into it, which keeps
    /// every update a blend of the old value and the sample.
    pub fn new(smoothing: &SmoothingConfig) -> Self {
        Self {
            value: 0.0,
            rise_weight: unit_weight(smoothing.rise_weight),
            fall_weight: unit_weight(smoothing.fall_weight),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Overwrites the estimate, discarding all history.
    pub fn seed(&mut self, value: f64) {
        self.value = value.max(0.0);
    }

    /// Folds one observation into the estimate. Negative observations count
    /// as zero.
    pub fn observe(&mut self, sample: f64) {
        let sample = sample.max(0.0);
        let weight = if sample > self.value {
            self.rise_weight
        } else {
            self.fall_weight
        };
        self.value = (self.value * (1.0 - weight) + sample * weight).max(0.0);
    }
}

fn unit_weight(weight: f64) -> f64 {
    weight.max(0.0).min(1.0)
}
