//! Core types for session management

use contour_core::{FrequencyPoint, CURVE_POINTS, MAX_FREQUENCY, MIN_FREQUENCY, SPECTRUM_POINTS};
use serde::{Deserialize, Serialize};

/// Default smoothing setting for the spectrum display
pub const DEFAULT_SMOOTHING: f32 = 0.8;

/// Configuration for an EQ session
///
/// The defaults match the fixed constants agreed with the rendering layer;
/// they are configurable here only so tests can run on smaller grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lower edge of the sampled frequency range in Hz
    pub freq_min: f32,

    /// Upper edge of the sampled frequency range in Hz
    pub freq_max: f32,

    /// Response-curve resolution in points
    pub curve_points: usize,

    /// Spectrum-feed resolution in points
    pub spectrum_points: usize,

    /// Initial spectrum smoothing (0.0-0.98)
    pub smoothing: f32,

    /// Initial master gain in dB
    pub master_gain: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            freq_min: MIN_FREQUENCY,
            freq_max: MAX_FREQUENCY,
            curve_points: CURVE_POINTS,
            spectrum_points: SPECTRUM_POINTS,
            smoothing: DEFAULT_SMOOTHING,
            master_gain: 0.0,
        }
    }
}

/// One tick's published output: what the rendering layer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickFrame {
    /// The display response curve (post dynamics), ascending frequency
    pub response: Vec<FrequencyPoint>,

    /// The simulated spectrum feed, ascending frequency
    pub spectrum: Vec<FrequencyPoint>,
}
