//! Effective-band resolution
//!
//! Applies global bypass and solo before any engine runs. The resolved set
//! is what the simulator and dynamics consume that tick; the raw set stays
//! with the editing UI so flags reappear unchanged when solo is released.

use contour_core::Band;

/// Resolve the effective band set and master gain for one tick
///
/// - Bypass silences everything: all bands disabled and master gain forced
///   to 0 (silence semantics, not merely a frozen curve).
/// - Otherwise, any soloed band overrides `enabled` with each band's own
///   solo flag: soloed bands forced on, the rest forced off.
/// - Otherwise the set passes through unchanged.
pub fn resolve_effective(bands: &[Band], bypass: bool, master_gain: f32) -> (Vec<Band>, f32) {
    if bypass {
        let silenced = bands
            .iter()
            .map(|band| {
                let mut b = band.clone();
                b.enabled = false;
                b
            })
            .collect();
        return (silenced, 0.0);
    }

    if bands.iter().any(|band| band.solo) {
        let soloed = bands
            .iter()
            .map(|band| {
                let mut b = band.clone();
                b.enabled = band.solo;
                b
            })
            .collect();
        return (soloed, master_gain);
    }

    (bands.to_vec(), master_gain)
}
