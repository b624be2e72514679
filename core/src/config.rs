use thiserror::Error;

use crate::helpers::{is_positive_finite, to_report, Sample};

/// Cutoff frequency used by `LowPassConfig::default()`, in Hz.
pub const DEFAULT_CUTOFF_FREQUENCY: f32 = 10.0;

/// Type of the low-pass filter algorithm.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FilterKind {
    /// Single pole exponential smoothing, the discretized RC circuit.
    ///
    /// Cheaper than `SecondOrder` but rolls off at only 6 dB/octave.
    /// See more info about this method [here](https://en.wikipedia.org/wiki/Low-pass_filter#RC_filter)
    #[default]
    FirstOrder,

    /// Two pole Butterworth-style biquad.
    ///
    /// Rolls off at 12 dB/octave. Recomputes its coefficients on every sample.
    /// See more info about this method [here](https://en.wikipedia.org/wiki/Butterworth_filter#Normalized_Butterworth_polynomials)
    SecondOrder,
}

/// Options for initializing a new `LowPassFilter`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LowPassConfig<T: Sample> {
    /// Frequency in Hz above which the input gets attenuated.
    /// Must be finite and positive.
    ///
    /// Default: `10.0`
    pub cutoff_frequency: T,

    /// The filter algorithm. See the `FilterKind` documentation for
    /// available options.
    ///
    /// Default: `FirstOrder`
    pub kind: FilterKind,
}

impl<T: Sample> LowPassConfig<T> {
    pub fn new(cutoff_frequency: T, kind: FilterKind) -> Self {
        Self {
            cutoff_frequency,
            kind,
        }
    }

    /// Checks that the configuration describes a usable filter.
    pub fn validate(&self) -> Result<(), FilterError> {
        if is_positive_finite(self.cutoff_frequency) {
            Ok(())
        } else {
            Err(FilterError::InvalidConfiguration(
                InvalidParameter::CutoffFrequency(to_report(self.cutoff_frequency)),
            ))
        }
    }
}

impl<T: Sample> Default for LowPassConfig<T> {
    fn default() -> Self {
        Self {
            cutoff_frequency: DEFAULT_CUTOFF_FREQUENCY.into(),
            kind: FilterKind::default(),
        }
    }
}

/// A parameter rejected by validation, with the offending value.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InvalidParameter {
    #[error("cutoff frequency must be finite and positive, got {0}")]
    CutoffFrequency(f64),

    #[error("sampling interval must be finite and non-negative, got {0}")]
    SamplingInterval(f64),
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidParameter),

    #[error("The filter has no algorithm configured")]
    Unconfigured,
}
