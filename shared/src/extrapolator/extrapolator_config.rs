use std::default::Default;

/// Weights of an asymmetric running average.
///
/// The estimate moves `rise_weight` of the way toward a sample that is larger
/// than it, and `fall_weight` of the way toward one that is not. A large rise
/// weight and a small fall weight track network degradation quickly while
/// riding out jittery delivery.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingConfig {
    /// Fraction of the gap closed when a sample exceeds the estimate.
    pub rise_weight: f64,
    /// Fraction of the gap closed when a sample is at or below the estimate.
    pub fall_weight: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            rise_weight: 0.5,
            fall_weight: 0.125,
        }
    }
}

/// Contains Config properties which will be used by an Extrapolator
#[derive(Clone, Debug, PartialEq)]
pub struct ExtrapolatorConfig {
    /// Time spans (in seconds) at or below this are treated as zero when
    /// dividing by them, both when deriving a sample's velocity and when
    /// deriving the extrapolation velocity from the snap and aim points.
    pub time_epsilon: f64,
    /// Smoothing applied to observed latency (local time minus packet time)
    pub latency: SmoothingConfig,
    /// Smoothing applied to observed gaps between accepted packet times
    pub update_interval: SmoothingConfig,
}

impl Default for ExtrapolatorConfig {
    fn default() -> Self {
        Self {
            time_epsilon: 1e-4,
            latency: SmoothingConfig::default(),
            update_interval: SmoothingConfig::default(),
        }
    }
}
