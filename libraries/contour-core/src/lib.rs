//! Contour Core
//!
//! Platform-agnostic core types, traits, and error handling for the Contour
//! EQ editor.
//!
//! This crate provides the foundational building blocks shared by the
//! signal-model crates:
//! - **Domain Types**: `Band`, `BandPatch`, `FrequencyPoint`, `EqPreset`
//! - **Domain Constants**: frequency/gain/Q bounds, curve and spectrum
//!   resolutions, the fixed default 7-band configuration
//! - **Boundary Traits**: `PresetStore`
//! - **Error Handling**: unified `ContourError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use contour_core::{apply_patch, default_bands, BandPatch};
//!
//! let bands = default_bands();
//! let updated = apply_patch(&bands, 4, &BandPatch::new().gain(6.0).q(2.5));
//!
//! assert_eq!(updated.iter().find(|b| b.id == 4).unwrap().gain, 6.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{ContourError, Result};
pub use storage::PresetStore;
pub use types::{
    apply_patch, clamp_frequency, clamp_gain, clamp_q, default_bands, Band, BandPatch, EqPreset,
    FilterType, FrequencyPoint, CURVE_POINTS, DEFAULT_DYNAMIC_RANGE, MAX_FREQUENCY, MAX_GAIN,
    MAX_Q, MIN_FREQUENCY, MIN_GAIN, MIN_Q, NUM_BANDS, SPECTRUM_POINTS,
};
