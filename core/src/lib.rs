//! Low-pass filters for smoothing noisy samples in real-time loops.
//!
//! ```
//! use lowpass_core::{FilterKind, LowPassFilter};
//!
//! let mut filter = LowPassFilter::new(20.0f32, FilterKind::SecondOrder)?;
//! for reading in [10.0, 20.0, 30.0] {
//!     let smoothed = filter.process(reading, 0.001);
//!     assert!(smoothed.is_finite());
//! }
//! # Ok::<(), lowpass_core::FilterError>(())
//! ```

pub mod filters;

mod config;
pub use config::*;

mod lowpass;
pub use lowpass::*;

pub mod helpers;
pub use helpers::Sample;
