use std::fmt::Debug;

use num_traits::{Float, FloatConst};

/// Numeric type a filter can run on.
///
/// Blanket implemented for every float that can be built from an `f32`,
/// which in practice means `f32` and `f64`.
pub trait Sample: Float + FloatConst + From<f32> + Default + Debug {}

impl<T> Sample for T where T: Float + FloatConst + From<f32> + Default + Debug {}

/// Angular frequency `2π·freq` of a frequency in Hz.
pub(crate) fn angular_frequency<T: Sample>(freq: T) -> T {
    freq * T::TAU()
}

pub(crate) fn is_positive_finite<T: Sample>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

/// Lossy conversion used only for error reporting.
pub(crate) fn to_report<T: Sample>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
