use simdeez::prelude::*;

use crate::{
    config::{FilterError, FilterKind, InvalidParameter, LowPassConfig},
    filters::{FilterAlgorithm, FirstOrderFilter, SecondOrderFilter},
    helpers::{to_report, Sample},
};

/// One of the available filter algorithms, holding its state by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm<T: Sample> {
    FirstOrder(FirstOrderFilter<T>),
    SecondOrder(SecondOrderFilter<T>),
}

impl<T: Sample> Algorithm<T> {
    pub fn new(kind: FilterKind, cutoff: T) -> Self {
        match kind {
            FilterKind::FirstOrder => Self::FirstOrder(FirstOrderFilter::new(cutoff)),
            FilterKind::SecondOrder => Self::SecondOrder(SecondOrderFilter::new(cutoff)),
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::FirstOrder(_) => FilterKind::FirstOrder,
            Self::SecondOrder(_) => FilterKind::SecondOrder,
        }
    }
}

impl<T: Sample> FilterAlgorithm<T> for Algorithm<T> {
    fn cutoff(&self) -> T {
        match self {
            Self::FirstOrder(filter) => filter.cutoff(),
            Self::SecondOrder(filter) => filter.cutoff(),
        }
    }

    fn process(&mut self, input: T, sampling_interval: T) -> T {
        match self {
            Self::FirstOrder(filter) => filter.process(input, sampling_interval),
            Self::SecondOrder(filter) => filter.process(input, sampling_interval),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::FirstOrder(filter) => filter.reset(),
            Self::SecondOrder(filter) => filter.reset(),
        }
    }
}

/// A low-pass filter owning exactly one filter algorithm.
///
/// A filter with no algorithm is *inert*: it is what `Default` builds and
/// what `take` leaves behind. Inert filters return zero for every sample
/// and never change.
///
/// Cloning copies the configuration only. The clone starts with an empty
/// sample history, no matter how many samples the original has seen.
///
/// A filter keeps no internal locks. `process` needs `&mut self`, so sharing
/// one between threads requires external synchronization.
#[derive(Debug, Default, PartialEq)]
pub struct LowPassFilter<T: Sample> {
    algorithm: Option<Algorithm<T>>,
}

impl<T: Sample> LowPassFilter<T> {
    /// Creates a new filter with the given cutoff frequency in Hz.
    ///
    /// Fails if the cutoff is not finite and positive.
    pub fn new(cutoff: T, kind: FilterKind) -> Result<Self, FilterError> {
        Self::from_config(&LowPassConfig::new(cutoff, kind))
    }

    /// Same as `new`, with `None` selecting the default `FirstOrder` kind.
    pub fn with_kind(cutoff: T, kind: Option<FilterKind>) -> Result<Self, FilterError> {
        Self::new(cutoff, kind.unwrap_or_default())
    }

    pub fn from_config(config: &LowPassConfig<T>) -> Result<Self, FilterError> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected low-pass filter configuration: {err}");
            return Err(err);
        }

        log::debug!(
            "Creating {:?} low-pass filter with cutoff {:?} Hz",
            config.kind,
            config.cutoff_frequency
        );

        Ok(Self {
            algorithm: Some(Algorithm::new(config.kind, config.cutoff_frequency)),
        })
    }

    /// The active configuration, or `None` if the filter is inert.
    pub fn config(&self) -> Option<LowPassConfig<T>> {
        self.algorithm
            .as_ref()
            .map(|algorithm| LowPassConfig::new(algorithm.cutoff(), algorithm.kind()))
    }

    /// The configured filter kind, or `None` if the filter is inert.
    pub fn kind(&self) -> Option<FilterKind> {
        self.algorithm.as_ref().map(Algorithm::kind)
    }

    pub fn cutoff(&self) -> Option<T> {
        self.algorithm.as_ref().map(|algorithm| algorithm.cutoff())
    }

    pub fn is_inert(&self) -> bool {
        self.algorithm.is_none()
    }

    /// Read-only access to the owned algorithm and its state.
    pub fn algorithm(&self) -> Option<&Algorithm<T>> {
        self.algorithm.as_ref()
    }

    /// Filters one sample taken `sampling_interval` seconds after the previous one.
    ///
    /// Inert filters return zero. The interval is not checked; a negative or
    /// non-finite interval gives meaningless output. Use `try_process` to
    /// validate it first.
    pub fn process(&mut self, input: T, sampling_interval: T) -> T {
        match &mut self.algorithm {
            Some(algorithm) => algorithm.process(input, sampling_interval),
            None => T::zero(),
        }
    }

    /// Like `process`, but rejects a negative or non-finite interval and
    /// reports an inert filter as an error. Nothing changes on error.
    pub fn try_process(&mut self, input: T, sampling_interval: T) -> Result<T, FilterError> {
        if !sampling_interval.is_finite() || sampling_interval < T::zero() {
            return Err(InvalidParameter::SamplingInterval(to_report(sampling_interval)).into());
        }

        let algorithm = self.algorithm.as_mut().ok_or(FilterError::Unconfigured)?;
        Ok(algorithm.process(input, sampling_interval))
    }

    /// Filters `samples` in place, in order, with a fixed interval between them.
    pub fn process_block(&mut self, samples: &mut [T], sampling_interval: T) {
        match &mut self.algorithm {
            Some(algorithm) => {
                for s in samples.iter_mut() {
                    *s = algorithm.process(*s, sampling_interval);
                }
            }
            None => samples.fill(T::zero()),
        }
    }

    /// Clears the sample history. The configuration is kept.
    pub fn reset(&mut self) {
        if let Some(algorithm) = &mut self.algorithm {
            algorithm.reset();
        }
    }

    /// Moves the algorithm, along with its sample history, into a new filter.
    /// `self` is left inert.
    pub fn take(&mut self) -> Self {
        log::trace!("Transferring low-pass filter {:?}", self.kind());
        Self {
            algorithm: self.algorithm.take(),
        }
    }
}

impl LowPassFilter<f32> {
    /// Filters every lane of `val` as consecutive samples, lowest lane first.
    pub fn process_simd<S: Simd>(&mut self, val: S::Vf32, sampling_interval: f32) -> S::Vf32 {
        let mut out = val;
        for i in 0..S::Vf32::WIDTH {
            out[i] = self.process(val[i], sampling_interval);
        }
        out
    }
}

impl<T: Sample> Clone for LowPassFilter<T> {
    fn clone(&self) -> Self {
        Self {
            algorithm: self
                .algorithm
                .as_ref()
                .map(|algorithm| Algorithm::new(algorithm.kind(), algorithm.cutoff())),
        }
    }
}

#[cfg(test)]
mod tests {
    use simdeez::simd_runtime_generate;

    use super::*;

    const DT: f32 = 0.001;

    fn ramp() -> Vec<f32> {
        (1..=10).map(|i| i as f32 * 10.0).collect()
    }

    #[test]
    fn test_defaults_to_first_order() {
        let filter = LowPassFilter::with_kind(20.0f32, None).unwrap();
        assert_eq!(filter.kind(), Some(FilterKind::FirstOrder));

        let filter = LowPassFilter::with_kind(20.0f32, Some(FilterKind::SecondOrder)).unwrap();
        assert_eq!(filter.kind(), Some(FilterKind::SecondOrder));
        assert_eq!(filter.cutoff(), Some(20.0));
    }

    #[test]
    fn test_dispatches_to_selected_algorithm() {
        let mut first = LowPassFilter::new(20.0f32, FilterKind::FirstOrder).unwrap();
        let mut second = LowPassFilter::new(20.0f32, FilterKind::SecondOrder).unwrap();
        let mut first_ref = FirstOrderFilter::new(20.0f32);
        let mut second_ref = SecondOrderFilter::new(20.0f32);

        for x in ramp() {
            assert_eq!(first.process(x, DT), first_ref.process(x, DT));
            assert_eq!(second.process(x, DT), second_ref.process(x, DT));
        }
        assert_eq!(second.algorithm(), Some(&Algorithm::SecondOrder(second_ref)));
    }

    #[test]
    fn test_rejects_invalid_cutoff() {
        for cutoff in [0.0f32, -5.0, f32::NAN, f32::INFINITY] {
            let err = LowPassFilter::new(cutoff, FilterKind::SecondOrder).unwrap_err();
            assert!(matches!(
                err,
                FilterError::InvalidConfiguration(InvalidParameter::CutoffFrequency(_))
            ));
        }
    }

    #[test]
    fn test_config_round_trip() {
        let config = LowPassConfig::new(42.0f64, FilterKind::SecondOrder);
        let filter = LowPassFilter::from_config(&config).unwrap();
        assert_eq!(filter.config(), Some(config));

        let filter = LowPassFilter::from_config(&LowPassConfig::<f64>::default()).unwrap();
        assert_eq!(filter.kind(), Some(FilterKind::FirstOrder));
        assert_eq!(filter.cutoff(), Some(10.0));
    }

    #[test]
    fn test_clone_is_independent_and_fresh() {
        let mut original = LowPassFilter::new(20.0f32, FilterKind::SecondOrder).unwrap();
        for x in ramp() {
            original.process(x, DT);
        }

        let mut copy = original.clone();
        assert_eq!(copy.kind(), original.kind());
        assert_eq!(copy.cutoff(), original.cutoff());

        // The copy starts from an empty history
        let mut fresh = LowPassFilter::new(20.0f32, FilterKind::SecondOrder).unwrap();
        assert_eq!(copy.process(5.0, DT), fresh.process(5.0, DT));

        // Feeding one does not affect the other
        let mut untouched = original.clone();
        for x in ramp() {
            untouched.process(x, DT);
        }
        let mut witness = untouched.clone();
        for x in ramp() {
            witness.process(x, DT);
        }
        for x in [1.0, 2.0, 3.0] {
            copy.process(-x * 100.0, DT);
            assert_eq!(untouched.process(x, DT), witness.process(x, DT));
        }
    }

    #[test]
    fn test_clone_of_inert_is_inert() {
        let filter = LowPassFilter::<f32>::default();
        assert!(filter.clone().is_inert());
    }

    #[test]
    fn test_take_transfers_history() {
        let mut original = LowPassFilter::new(20.0f64, FilterKind::SecondOrder).unwrap();
        let mut shadow = original.clone();

        for x in [3.0, 1.0, 4.0, 1.0, 5.0] {
            assert_eq!(original.process(x, 0.001), shadow.process(x, 0.001));
        }

        let mut moved = original.take();
        assert_eq!(moved.kind(), Some(FilterKind::SecondOrder));
        assert_eq!(original.kind(), None);
        assert!(original.is_inert());

        for x in [9.0, 2.0, 6.0, 5.0, 3.0] {
            assert_eq!(moved.process(x, 0.001), shadow.process(x, 0.001));
            assert_eq!(original.process(x, 0.001), 0.0);
        }
    }

    #[test]
    fn test_inert_filter_is_a_no_op() {
        let mut filter = LowPassFilter::<f32>::default();
        assert_eq!(filter.kind(), None);
        assert_eq!(filter.cutoff(), None);
        assert_eq!(filter.config(), None);

        for x in [1.0, -7.5, 1e9] {
            assert_eq!(filter.process(x, DT), 0.0);
        }
        filter.reset();
        assert_eq!(filter, LowPassFilter::default());

        let mut samples = vec![1.0, 2.0, 3.0];
        filter.process_block(&mut samples, DT);
        assert_eq!(samples, vec![0.0, 0.0, 0.0]);

        assert_eq!(filter.try_process(1.0, DT), Err(FilterError::Unconfigured));
    }

    #[test]
    fn test_try_process_validates_interval() {
        let mut filter = LowPassFilter::new(20.0f32, FilterKind::FirstOrder).unwrap();
        let before = filter.clone();

        for dt in [-0.001, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                filter.try_process(1.0, dt),
                Err(FilterError::InvalidConfiguration(
                    InvalidParameter::SamplingInterval(_)
                ))
            ));
        }
        assert_eq!(filter, before);

        let mut reference = filter.clone();
        assert_eq!(filter.try_process(10.0, DT), Ok(reference.process(10.0, DT)));
        assert_eq!(filter.try_process(10.0, 0.0), Ok(reference.process(10.0, 0.0)));
    }

    #[test]
    fn test_process_block_matches_process() {
        let mut block = LowPassFilter::new(20.0f32, FilterKind::SecondOrder).unwrap();
        let mut single = block.clone();

        let mut samples = ramp();
        block.process_block(&mut samples, DT);
        for (out, x) in samples.iter().zip(ramp()) {
            assert_eq!(*out, single.process(x, DT));
        }
    }

    #[test]
    fn test_reset_restarts_sequence() {
        let mut filter = LowPassFilter::new(20.0f32, FilterKind::SecondOrder).unwrap();
        let first: Vec<f32> = ramp().into_iter().map(|x| filter.process(x, DT)).collect();
        filter.reset();
        let second: Vec<f32> = ramp().into_iter().map(|x| filter.process(x, DT)).collect();
        assert_eq!(first, second);
        assert_eq!(filter.kind(), Some(FilterKind::SecondOrder));
    }

    #[test]
    fn test_process_simd_matches_scalar() {
        simd_runtime_generate!(
            fn run() {
                let mut scalar = LowPassFilter::new(20.0f32, FilterKind::SecondOrder).unwrap();
                let mut vectored = scalar.clone();

                let mut input = S::Vf32::set1(0.0);
                for i in 0..S::Vf32::WIDTH {
                    input[i] = i as f32 + 1.0;
                }

                let out = vectored.process_simd::<S>(input, DT);
                for i in 0..S::Vf32::WIDTH {
                    assert_eq!(out[i], scalar.process(i as f32 + 1.0, DT));
                }
            }
        );

        run();
    }

    #[test]
    fn test_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<LowPassFilter<f32>>();
        assert_send::<LowPassFilter<f64>>();
    }
}
