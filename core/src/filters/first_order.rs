use super::FilterAlgorithm;
use crate::helpers::{angular_frequency, Sample};

/// 1-Pole Low Pass Filter
///
/// The smoothing factor is derived on every sample from the time constant
/// and the sampling interval, so the interval may vary between calls.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderFilter<T: Sample> {
    cutoff: T,
    rc: T,
    y1: T,
}

impl<T: Sample> FirstOrderFilter<T> {
    pub fn new(cutoff: T) -> Self {
        Self {
            cutoff,
            rc: Self::time_constant(cutoff),
            y1: T::zero(),
        }
    }

    fn time_constant(cutoff: T) -> T {
        T::one() / angular_frequency(cutoff)
    }

    fn get_alpha(&self, sampling_interval: T) -> T {
        sampling_interval / (self.rc + sampling_interval)
    }

    /// The last value returned by `process`, zero before the first call.
    pub fn previous_output(&self) -> T {
        self.y1
    }
}

impl<T: Sample> FilterAlgorithm<T> for FirstOrderFilter<T> {
    fn cutoff(&self) -> T {
        self.cutoff
    }

    fn process(&mut self, input: T, sampling_interval: T) -> T {
        let alpha = self.get_alpha(sampling_interval);
        let out = self.y1 + alpha * (input - self.y1);
        self.y1 = out;
        out
    }

    fn reset(&mut self) {
        self.y1 = T::zero();
    }
}
