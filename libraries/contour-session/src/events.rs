//! Session events
//!
//! Event-based communication for UI synchronization. Events accumulate in
//! the session's pending buffer and are drained by the host between ticks.

use serde::{Deserialize, Serialize};

/// Events emitted by the EQ session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A band's parameters changed through a patch
    BandChanged {
        /// Id of the changed band
        band_id: u32,
    },

    /// The selected band changed (None clears the selection)
    SelectionChanged {
        /// Id of the newly selected band, if any
        band_id: Option<u32>,
    },

    /// Master gain changed
    MasterGainChanged {
        /// New master gain in dB
        gain: f32,
    },

    /// Global bypass toggled
    BypassChanged {
        /// Whether bypass is now active
        active: bool,
    },

    /// Spectrum smoothing setting changed
    SmoothingChanged {
        /// New smoothing value (0.0-0.98)
        smoothing: f32,
    },

    /// A preset replaced the live band set and master gain
    PresetApplied {
        /// Id of the applied preset
        preset_id: String,
        /// Name of the applied preset
        name: String,
    },

    /// The session stopped scheduling ticks
    Shutdown,
}
