//! EQ session: the simulation loop's owner of all mutable state
//!
//! Single-threaded and tick-driven: the host calls [`EqSession::tick`] once
//! per animation frame and mutates state only between ticks through the
//! editing API. The previous spectrum tick is held here explicitly so the
//! simulator itself stays a pure function of `(inputs, previous)`.

use contour_core::{
    apply_patch, clamp_gain, default_bands, Band, BandPatch, EqPreset, FrequencyPoint,
};
use contour_dsp::{
    apply_dynamics, compute_response, next_tick, resolve_effective, MAX_SMOOTHING,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::events::SessionEvent;
use crate::types::{SessionConfig, TickFrame};

/// Interactive EQ session
///
/// Owns the band set, selection, master gain, bypass/solo state, the
/// spectrum smoothing memory, and the RNG driving analyzer jitter. The
/// rendering layer reads the published [`TickFrame`] plus the raw bands and
/// selection, and calls back into the editing methods on user input.
pub struct EqSession {
    config: SessionConfig,
    bands: Vec<Band>,
    selected_band_id: Option<u32>,
    master_gain: f32,
    bypass: bool,
    smoothing: f32,
    previous_spectrum: Option<Vec<FrequencyPoint>>,
    frame: Option<TickFrame>,
    pending_events: Vec<SessionEvent>,
    rng: StdRng,
    active: bool,
}

impl EqSession {
    /// Create a session with the default 7-band configuration
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng_seed(config, rand::random())
    }

    /// Create a session with a fixed RNG seed (reproducible analyzer ticks)
    pub fn with_rng_seed(config: SessionConfig, seed: u64) -> Self {
        let master_gain = clamp_gain(config.master_gain);
        let smoothing = config.smoothing.clamp(0.0, MAX_SMOOTHING);

        Self {
            bands: default_bands(),
            selected_band_id: None,
            master_gain,
            bypass: false,
            smoothing,
            previous_spectrum: None,
            frame: None,
            pending_events: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            active: true,
            config,
        }
    }

    // ========================================================================
    // Tick pipeline
    // ========================================================================

    /// Run one simulation tick and publish its frame
    ///
    /// Pipeline: raw bands → effective bands (bypass/solo) → spectrum tick
    /// (threading the previous tick) → dynamics (derived gains) → display
    /// curve. Returns `None` once the session has been shut down, which is
    /// the host's cue to stop scheduling.
    pub fn tick(&mut self) -> Option<&TickFrame> {
        if !self.active {
            return None;
        }

        let (effective, effective_master) =
            resolve_effective(&self.bands, self.bypass, self.master_gain);

        let spectrum = next_tick(
            &effective,
            effective_master,
            self.config.freq_min,
            self.config.freq_max,
            self.config.spectrum_points,
            self.previous_spectrum.as_deref(),
            self.smoothing,
            &mut self.rng,
        );

        let derived = apply_dynamics(
            &effective,
            &spectrum,
            self.config.freq_min,
            self.config.freq_max,
        );

        let response = compute_response(
            &derived,
            effective_master,
            self.config.freq_min,
            self.config.freq_max,
            self.config.curve_points,
        );

        self.previous_spectrum = Some(spectrum.clone());
        self.frame = Some(TickFrame { response, spectrum });
        self.frame.as_ref()
    }

    /// The most recently published frame, if any tick has run
    pub fn frame(&self) -> Option<&TickFrame> {
        self.frame.as_ref()
    }

    /// Stop scheduling further ticks (host dispose hook)
    ///
    /// A running tick is never interrupted; this only makes subsequent
    /// `tick()` calls return `None`.
    pub fn shutdown(&mut self) {
        if self.active {
            debug!("EQ session shut down");
            self.active = false;
            self.pending_events.push(SessionEvent::Shutdown);
        }
    }

    /// Whether the session is still ticking
    pub fn is_active(&self) -> bool {
        self.active
    }

    // ========================================================================
    // Editing API (rendering-layer callbacks)
    // ========================================================================

    /// Apply a partial update to the band matching `id`
    ///
    /// Values are clamped into their domains; an unknown id is a silent
    /// no-op (treated as a benign race with the UI).
    pub fn update_band(&mut self, id: u32, patch: &BandPatch) {
        if patch.is_empty() || !self.bands.iter().any(|b| b.id == id) {
            return;
        }
        self.bands = apply_patch(&self.bands, id, patch);
        self.pending_events.push(SessionEvent::BandChanged { band_id: id });
    }

    /// Select a band for handle highlighting (None clears the selection)
    pub fn select_band(&mut self, id: Option<u32>) {
        if id.is_some() && !self.bands.iter().any(|b| Some(b.id) == id) {
            return;
        }
        if self.selected_band_id != id {
            self.selected_band_id = id;
            self.pending_events
                .push(SessionEvent::SelectionChanged { band_id: id });
        }
    }

    /// Set the master gain in dB (clamped to the gain domain)
    pub fn set_master_gain(&mut self, gain: f32) {
        let gain = clamp_gain(gain);
        if self.master_gain != gain {
            self.master_gain = gain;
            self.pending_events.push(SessionEvent::MasterGainChanged { gain });
        }
    }

    /// Toggle global bypass
    pub fn set_bypass(&mut self, active: bool) {
        if self.bypass != active {
            self.bypass = active;
            self.pending_events.push(SessionEvent::BypassChanged { active });
        }
    }

    /// Set the spectrum smoothing (clamped to 0.0-0.98)
    pub fn set_smoothing(&mut self, smoothing: f32) {
        let smoothing = smoothing.clamp(0.0, MAX_SMOOTHING);
        if self.smoothing != smoothing {
            self.smoothing = smoothing;
            self.pending_events
                .push(SessionEvent::SmoothingChanged { smoothing });
        }
    }

    /// The raw (user-edited) band set, untouched by bypass/solo resolution
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// The currently selected band id, if any
    pub fn selected_band_id(&self) -> Option<u32> {
        self.selected_band_id
    }

    /// Current master gain in dB
    pub fn master_gain(&self) -> f32 {
        self.master_gain
    }

    /// Whether global bypass is active
    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    /// Current spectrum smoothing setting
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Snapshot the live configuration into a named preset
    ///
    /// The preset is a deep copy; later edits to the session do not leak
    /// into it.
    pub fn snapshot_preset(&self, name: impl Into<String>) -> EqPreset {
        EqPreset::new(name, self.bands.clone(), self.master_gain)
    }

    /// Replace the live band set and master gain with a preset, atomically
    ///
    /// Numeric fields are clamped on the way in as a defense against
    /// hand-edited payloads. Selection is cleared if the selected band id
    /// does not exist in the preset.
    pub fn apply_preset(&mut self, preset: &EqPreset) {
        debug!(preset = %preset.name, "applying preset");

        self.bands = preset
            .bands
            .iter()
            .map(|band| {
                let mut b = Band::new(band.id, band.frequency, band.gain, band.q, band.filter);
                b.enabled = band.enabled;
                b.color.clone_from(&band.color);
                b.dynamic = band.dynamic;
                b.dynamic_range = band.dynamic_range.max(0.0);
                b.solo = band.solo;
                b
            })
            .collect();
        self.master_gain = clamp_gain(preset.master_gain);

        if let Some(id) = self.selected_band_id {
            if !self.bands.iter().any(|b| b.id == id) {
                self.selected_band_id = None;
            }
        }

        self.pending_events.push(SessionEvent::PresetApplied {
            preset_id: preset.id.clone(),
            name: preset.name.clone(),
        });
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

impl Default for EqSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
