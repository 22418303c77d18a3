//! Domain types for the Contour signal model

pub mod band;
pub mod point;
pub mod preset;

pub use band::{
    apply_patch, clamp_frequency, clamp_gain, clamp_q, default_bands, Band, BandPatch, FilterType,
    DEFAULT_DYNAMIC_RANGE, MAX_FREQUENCY, MAX_GAIN, MAX_Q, MIN_FREQUENCY, MIN_GAIN, MIN_Q,
    NUM_BANDS,
};
pub use point::{FrequencyPoint, CURVE_POINTS, SPECTRUM_POINTS};
pub use preset::EqPreset;
