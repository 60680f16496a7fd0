//! # Reckon Shared
//! Dead-reckoning extrapolation of remote entity state.
//!
//! Create one [`Extrapolator`] per quantity you want to track for a remote
//! entity, feed it timestamped samples as packets arrive, and ask it where the
//! entity is every frame. It keeps a running estimate of network latency and
//! update cadence, and assumes the entity coasts to a stop when updates stop
//! arriving.
//!
//! All times are in seconds on a globally synchronized clock. Clock skew
//! correction is the caller's concern.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod extrapolator;
mod real;

pub use extrapolator::{
    error::ExtrapolatorError,
    extrapolator::{Extrapolator, ScalarExtrapolator},
    extrapolator_config::{ExtrapolatorConfig, SmoothingConfig},
    prediction::Prediction,
    running_estimate::RunningEstimate,
};
pub use real::Real;
