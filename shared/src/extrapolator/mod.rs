pub mod error;
pub mod extrapolator;
pub mod extrapolator_config;
pub mod prediction;
pub mod running_estimate;
