mod first_order;
pub use first_order::*;
mod second_order;
pub use second_order::*;

use crate::helpers::Sample;

/// One sample in, one sample out.
///
/// Every call advances the recurrence, so samples must be fed in the order
/// they arrived. A non-positive sampling interval or cutoff is not rejected
/// here and produces unspecified (possibly non-finite) output.
pub trait FilterAlgorithm<T: Sample>: Clone {
    /// The cutoff frequency in Hz the filter was built with.
    fn cutoff(&self) -> T;

    /// Filters `input`, sampled `sampling_interval` seconds after the previous sample.
    fn process(&mut self, input: T, sampling_interval: T) -> T;

    /// Clears the sample history, keeping the configuration.
    fn reset(&mut self);
}
