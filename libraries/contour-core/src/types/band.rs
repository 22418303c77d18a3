//! Band model for the parametric EQ
//!
//! A band is pure data: frequency, gain, Q, filter type, and display/state
//! flags. All numeric fields live in fixed domains and every external write
//! path (constructors, patch application, session setters) clamps into them.
//! Out-of-range input is clamped, never rejected.

use serde::{Deserialize, Serialize};

/// Lowest representable band frequency in Hz
pub const MIN_FREQUENCY: f32 = 20.0;

/// Highest representable band frequency in Hz
pub const MAX_FREQUENCY: f32 = 20000.0;

/// Lower bound of the gain domain in dB
pub const MIN_GAIN: f32 = -30.0;

/// Upper bound of the gain domain in dB
pub const MAX_GAIN: f32 = 30.0;

/// Lower bound of the Q domain (also the practical floor used in formulas)
pub const MIN_Q: f32 = 0.1;

/// Upper bound of the Q domain
pub const MAX_Q: f32 = 10.0;

/// Dynamic range cap in dB applied when a band doesn't specify one
pub const DEFAULT_DYNAMIC_RANGE: f32 = 6.0;

/// Number of bands in the fixed default configuration
pub const NUM_BANDS: usize = 7;

/// Clamp a frequency into the representable domain
#[inline]
pub fn clamp_frequency(frequency: f32) -> f32 {
    frequency.clamp(MIN_FREQUENCY, MAX_FREQUENCY)
}

/// Clamp a gain into the representable domain
#[inline]
pub fn clamp_gain(gain: f32) -> f32 {
    gain.clamp(MIN_GAIN, MAX_GAIN)
}

/// Clamp a Q factor into the representable domain
#[inline]
pub fn clamp_q(q: f32) -> f32 {
    q.clamp(MIN_Q, MAX_Q)
}

/// Filter type for EQ bands
///
/// Determines which shaping formula the curve engine applies. Unknown tags
/// are rejected at deserialization time, never at formula-evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    /// Bell-shaped boost/cut centered on the frequency
    Peak,
    /// Boost/cut that plateaus below the cutoff frequency
    LowShelf,
    /// Boost/cut that plateaus above the cutoff frequency
    HighShelf,
}

impl Default for FilterType {
    fn default() -> Self {
        Self::Peak
    }
}

/// One parametric filter band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Stable identity, unique within a band set, never reused in a session
    pub id: u32,

    /// Center/cutoff frequency in Hz (20-20000)
    pub frequency: f32,

    /// Gain in dB (-30 to +30); zero gain contributes nothing to the curve
    pub gain: f32,

    /// Q factor (0.1-10.0), inverse measure of bandwidth
    pub q: f32,

    /// Shaping formula selector
    #[serde(default)]
    pub filter: FilterType,

    /// Disabled bands contribute zero gain and are excluded from rendering
    pub enabled: bool,

    /// Opaque display identity, not used in computation
    pub color: String,

    /// Enables the dynamics engine's gain adjustment for this band
    #[serde(default)]
    pub dynamic: bool,

    /// Caps how far dynamics may push gain away from the static value (dB)
    #[serde(default = "default_dynamic_range")]
    pub dynamic_range: f32,

    /// Solo flag, consumed only by effective-band resolution
    #[serde(default)]
    pub solo: bool,
}

fn default_dynamic_range() -> f32 {
    DEFAULT_DYNAMIC_RANGE
}

impl Band {
    /// Create a new enabled band, clamping numeric fields into their domains
    pub fn new(id: u32, frequency: f32, gain: f32, q: f32, filter: FilterType) -> Self {
        Self {
            id,
            frequency: clamp_frequency(frequency),
            gain: clamp_gain(gain),
            q: clamp_q(q),
            filter,
            enabled: true,
            color: String::new(),
            dynamic: false,
            dynamic_range: DEFAULT_DYNAMIC_RANGE,
            solo: false,
        }
    }

    /// Set a display color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Partial band update carrying only the fields being changed
///
/// Maps merge-by-presence semantics onto an explicit value type: absent
/// fields leave the band untouched. Values are clamped during the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandPatch {
    /// New center/cutoff frequency in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f32>,

    /// New gain in dB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<f32>,

    /// New Q factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<f32>,

    /// New filter type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterType>,

    /// New enabled state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// New display color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// New dynamic-EQ state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<bool>,

    /// New dynamic range cap in dB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_range: Option<f32>,

    /// New solo state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solo: Option<bool>,
}

impl BandPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch the frequency
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Patch the gain
    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = Some(gain);
        self
    }

    /// Patch the Q factor
    pub fn q(mut self, q: f32) -> Self {
        self.q = Some(q);
        self
    }

    /// Patch the filter type
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Patch the enabled state
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Patch the display color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Patch the dynamic-EQ state
    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = Some(dynamic);
        self
    }

    /// Patch the dynamic range cap
    pub fn dynamic_range(mut self, dynamic_range: f32) -> Self {
        self.dynamic_range = Some(dynamic_range);
        self
    }

    /// Patch the solo state
    pub fn solo(mut self, solo: bool) -> Self {
        self.solo = Some(solo);
        self
    }

    /// Check whether the patch carries no fields
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this patch into a band in place, clamping numeric fields
    ///
    /// The band id is immutable and never part of a patch.
    pub fn apply_to(&self, band: &mut Band) {
        if let Some(frequency) = self.frequency {
            band.frequency = clamp_frequency(frequency);
        }
        if let Some(gain) = self.gain {
            band.gain = clamp_gain(gain);
        }
        if let Some(q) = self.q {
            band.q = clamp_q(q);
        }
        if let Some(filter) = self.filter {
            band.filter = filter;
        }
        if let Some(enabled) = self.enabled {
            band.enabled = enabled;
        }
        if let Some(ref color) = self.color {
            band.color.clone_from(color);
        }
        if let Some(dynamic) = self.dynamic {
            band.dynamic = dynamic;
        }
        if let Some(dynamic_range) = self.dynamic_range {
            band.dynamic_range = dynamic_range.max(0.0);
        }
        if let Some(solo) = self.solo {
            band.solo = solo;
        }
    }
}

/// Apply a patch to the band matching `id`, returning a new band set
///
/// Pure merge: the input is never mutated. An unknown id is a silent no-op
/// (the update raced a band that no longer exists); the returned set is an
/// unchanged copy in that case.
pub fn apply_patch(bands: &[Band], id: u32, patch: &BandPatch) -> Vec<Band> {
    bands
        .iter()
        .map(|band| {
            if band.id == id {
                let mut updated = band.clone();
                patch.apply_to(&mut updated);
                updated
            } else {
                band.clone()
            }
        })
        .collect()
}

/// The fixed default 7-band configuration spanning the audible spectrum
pub fn default_bands() -> Vec<Band> {
    vec![
        Band::new(1, 60.0, 0.0, 0.7, FilterType::LowShelf).with_color("#f87171"),
        Band::new(2, 150.0, 0.0, 1.0, FilterType::Peak).with_color("#fb923c"),
        Band::new(3, 400.0, 0.0, 1.0, FilterType::Peak).with_color("#facc15"),
        Band::new(4, 1000.0, 0.0, 1.0, FilterType::Peak).with_color("#4ade80"),
        Band::new(5, 2400.0, 0.0, 1.0, FilterType::Peak).with_color("#22d3ee"),
        Band::new(6, 6000.0, 0.0, 1.0, FilterType::Peak).with_color("#818cf8"),
        Band::new(7, 12000.0, 0.0, 0.7, FilterType::HighShelf).with_color("#e879f9"),
    ]
}
