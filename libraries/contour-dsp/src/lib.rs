//! Contour DSP
//!
//! Pure signal-model engines for the Contour EQ editor:
//! - Curve engine: band set + master gain → log-sampled response curve
//! - Spectrum simulator: synthetic analyzer ticks with attack/decay ballistics
//! - Dynamics engine: level-driven effective gain per dynamic band
//! - Effective-band resolution: global bypass and solo
//!
//! Everything here is a pure function; the spectrum simulator's smoothing
//! memory is threaded through by the caller and its randomness is an
//! injected [`rand::Rng`], so every engine is deterministic under test.
//!
//! This is a display model, not a real-time audio processor: no audio is
//! captured or filtered, and the analyzer feed is shaped noise.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod curve;
pub mod dynamics;
pub mod resolve;
pub mod spectrum;

pub use curve::{band_contribution, compute_response, sample_frequencies};
pub use dynamics::{apply_dynamics, spectrum_index};
pub use resolve::resolve_effective;
pub use spectrum::{next_tick, MAX_SMOOTHING, SPECTRUM_MAX_DB, SPECTRUM_MIN_DB};
