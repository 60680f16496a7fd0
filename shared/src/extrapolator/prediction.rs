use crate::Real;

/// Answer to an [`Extrapolator::predict`](crate::Extrapolator::predict) query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction<const N: usize, T: Real = f32> {
    /// Best-estimate position. When out of range this is evaluated at the
    /// nearest end of the valid window, so it is still usable.
    pub position: [T; N],
    /// Extrapolation velocity, or zero when out of range.
    pub velocity: [T; N],
    /// Whether the requested time fell inside the valid window.
    pub in_range: bool,
}

impl<const N: usize, T: Real> Prediction<N, T> {
    pub(crate) fn out_of_range(position: [T; N]) -> Self {
        Self {
            position,
            velocity: [T::ZERO; N],
            in_range: false,
        }
    }
}
