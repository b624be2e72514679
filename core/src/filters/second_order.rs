use super::FilterAlgorithm;
use crate::helpers::{angular_frequency, Sample};

#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct Coefficients<T: Sample> {
    pub a1: T,
    pub a2: T,
    pub b0: T,
    pub b1: T,
    pub b2: T,
}

impl<T: Sample> Coefficients<T> {
    pub fn from_cutoff(cutoff: T, sampling_interval: T) -> Self {
        let one = T::one();
        let two = one + one;

        let omega = angular_frequency(cutoff) * sampling_interval;

        let omega_s = omega.sin();
        let omega_c = omega.cos();
        let alpha = omega_s / T::SQRT_2();
        let scale = one / (one + alpha);

        let b0 = (one - omega_c) / (two * scale);
        let b1 = (one - omega_c) * scale;
        let a1 = -two * omega_c * scale;
        let a2 = (one - alpha) * scale;

        Coefficients {
            a1,
            a2,
            b0,
            b1,
            b2: b0,
        }
    }
}

/// 2-Pole Butterworth-style Low Pass Filter
///
/// The coefficients depend on the sampling interval and are derived again on
/// every call, which lets the interval jitter between samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondOrderFilter<T: Sample> {
    cutoff: T,
    coefs: Coefficients<T>,
    x1: T,
    x2: T,
    y1: T,
    y2: T,
}

impl<T: Sample> SecondOrderFilter<T> {
    pub fn new(cutoff: T) -> Self {
        Self::with_history(cutoff, T::zero(), T::zero())
    }

    /// Starts the filter as if `previous_input1` and then `previous_input2`
    /// (the older one) had already been fed in. Previous outputs start at zero.
    pub fn with_history(cutoff: T, previous_input1: T, previous_input2: T) -> Self {
        Self {
            cutoff,
            coefs: Coefficients::default(),
            x1: previous_input1,
            x2: previous_input2,
            y1: T::zero(),
            y2: T::zero(),
        }
    }

    /// The coefficients used by the most recent `process` call.
    /// All zero before the first call.
    pub fn coefficients(&self) -> Coefficients<T> {
        self.coefs
    }

    /// Previous inputs, most recent first.
    pub fn previous_inputs(&self) -> (T, T) {
        (self.x1, self.x2)
    }

    /// Previous outputs, most recent first.
    pub fn previous_outputs(&self) -> (T, T) {
        (self.y1, self.y2)
    }
}

impl<T: Sample> FilterAlgorithm<T> for SecondOrderFilter<T> {
    fn cutoff(&self) -> T {
        self.cutoff
    }

    fn process(&mut self, input: T, sampling_interval: T) -> T {
        // TODO: keep the coefficients while cutoff and interval stay the same
        self.coefs = Coefficients::from_cutoff(self.cutoff, sampling_interval);

        let out = self.coefs.b0 * input + self.coefs.b1 * self.x1 + self.coefs.b2 * self.x2
            - self.coefs.a1 * self.y1
            - self.coefs.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = out;

        out
    }

    fn reset(&mut self) {
        self.x1 = T::zero();
        self.x2 = T::zero();
        self.y1 = T::zero();
        self.y2 = T::zero();
    }
}
