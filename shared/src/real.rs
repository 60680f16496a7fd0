use std::fmt::Debug;

/// Scalar type an [`Extrapolator`](crate::Extrapolator) stores positions and
/// velocities in.
///
/// Arithmetic is carried out in `f64` against the `f64` clock and narrowed
/// back on store, so single-precision storage loses nothing to time math.
pub trait Real: Copy + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static {
    const ZERO: Self;

    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;
}

impl Real for f32 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}
