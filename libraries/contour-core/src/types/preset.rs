//! Named preset snapshots of a band configuration

use serde::{Deserialize, Serialize};

use super::band::{clamp_gain, Band};

/// A saved EQ configuration
///
/// A preset is a deep, independent copy of a band set at save time; later
/// mutation of the live band set never affects a saved preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqPreset {
    /// Unique preset identifier
    pub id: String,

    /// User-facing preset name
    pub name: String,

    /// Snapshot of the band set
    pub bands: Vec<Band>,

    /// Master gain in dB at save time
    pub master_gain: f32,
}

impl EqPreset {
    /// Create a preset from a band-set snapshot with a fresh id
    pub fn new(name: impl Into<String>, bands: Vec<Band>, master_gain: f32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            bands,
            master_gain: clamp_gain(master_gain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::band::default_bands;

    #[test]
    fn preset_ids_are_unique() {
        let a = EqPreset::new("A", default_bands(), 0.0);
        let b = EqPreset::new("B", default_bands(), 0.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn preset_clamps_master_gain() {
        let preset = EqPreset::new("Hot", default_bands(), 64.0);
        assert_eq!(preset.master_gain, 30.0);
    }

    #[test]
    fn preset_is_independent_snapshot() {
        let mut bands = default_bands();
        let preset = EqPreset::new("Snapshot", bands.clone(), 0.0);

        bands[0].gain = 12.0;
        assert_eq!(preset.bands[0].gain, 0.0);
    }

    #[test]
    fn preset_serde_roundtrip() {
        let preset = EqPreset::new("Warm", default_bands(), -1.5);
        let json = serde_json::to_string(&preset).unwrap();
        let back: EqPreset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preset);
    }
}
