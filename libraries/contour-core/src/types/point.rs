//! Frequency/gain point sequences shared by the curve and spectrum feeds

use serde::{Deserialize, Serialize};

/// Number of samples in the response curve published to the renderer
pub const CURVE_POINTS: usize = 500;

/// Number of samples in the simulated spectrum feed
pub const SPECTRUM_POINTS: usize = 100;

/// A single `(frequency, gain)` sample
///
/// Sequences of these are ordered by ascending frequency and have a fixed
/// length agreed with the consumer ([`CURVE_POINTS`] for the response curve,
/// [`SPECTRUM_POINTS`] for the spectrum feed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    /// Frequency in Hz
    pub frequency: f32,
    /// Level in dB
    pub gain: f32,
}

impl FrequencyPoint {
    /// Create a new point
    pub fn new(frequency: f32, gain: f32) -> Self {
        Self { frequency, gain }
    }
}
