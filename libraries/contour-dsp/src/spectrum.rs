//! Spectrum simulator
//!
//! Produces one tick of synthetic analyzer data: a pink-noise-like floor,
//! per-sample jitter, the current EQ curve as a shaping input, and
//! meter-style attack/decay smoothing against the previous tick. The
//! function holds no state; the caller threads the previous tick back in.

use contour_core::{Band, FrequencyPoint};
use rand::Rng;

use crate::curve::compute_response;

/// Level of the noise floor at the 100 Hz reference, in dB
const FLOOR_REFERENCE_DB: f32 = -12.0;

/// Frequency at which the noise floor sits at [`FLOOR_REFERENCE_DB`]
const FLOOR_REFERENCE_HZ: f32 = 100.0;

/// Downward slope of the noise floor in dB per octave
const FLOOR_SLOPE_DB_PER_OCT: f32 = 1.5;

/// Half-width of the uniform jitter applied per sample per tick, in dB
const JITTER_DB: f32 = 6.0;

/// Ceiling for the smoothing setting; 1.0 would freeze the display
pub const MAX_SMOOTHING: f32 = 0.98;

/// Floor of the displayed spectrum in dB
pub const SPECTRUM_MIN_DB: f32 = -100.0;

/// Ceiling of the displayed spectrum in dB
pub const SPECTRUM_MAX_DB: f32 = 30.0;

/// Blend factor applied when a sample is rising (fast attack)
fn attack_alpha(smoothing: f32) -> f32 {
    let speed = 1.0 - smoothing.clamp(0.0, MAX_SMOOTHING);
    (speed * 0.9).max(0.05)
}

/// Blend factor applied when a sample is falling (slow release)
fn decay_alpha(smoothing: f32) -> f32 {
    let speed = 1.0 - smoothing.clamp(0.0, MAX_SMOOTHING);
    (speed * 0.2).max(0.01)
}

/// Compute one tick of simulated spectrum data
///
/// Uses the same log-frequency grid as the curve engine so per-band level
/// lookups line up index-for-index. `previous` is the caller-retained output
/// of the last tick; pass `None` on the first tick to skip smoothing.
#[allow(clippy::too_many_arguments)]
pub fn next_tick<R: Rng>(
    bands: &[Band],
    master_gain: f32,
    freq_min: f32,
    freq_max: f32,
    num_points: usize,
    previous: Option<&[FrequencyPoint]>,
    smoothing: f32,
    rng: &mut R,
) -> Vec<FrequencyPoint> {
    let shape = compute_response(bands, master_gain, freq_min, freq_max, num_points);
    let attack = attack_alpha(smoothing);
    let decay = decay_alpha(smoothing);

    shape
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let floor = FLOOR_REFERENCE_DB
                - (point.frequency / FLOOR_REFERENCE_HZ).log2() * FLOOR_SLOPE_DB_PER_OCT;
            let jitter = rng.gen_range(-JITTER_DB..=JITTER_DB);
            let target = floor + jitter + point.gain;

            let level = match previous.and_then(|prev| prev.get(i)) {
                Some(prev) => {
                    let alpha = if target > prev.gain { attack } else { decay };
                    prev.gain + (target - prev.gain) * alpha
                }
                None => target,
            };

            FrequencyPoint::new(point.frequency, level.clamp(SPECTRUM_MIN_DB, SPECTRUM_MAX_DB))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_core::{default_bands, MAX_FREQUENCY, MIN_FREQUENCY, SPECTRUM_POINTS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tick(previous: Option<&[FrequencyPoint]>, smoothing: f32, seed: u64) -> Vec<FrequencyPoint> {
        let mut rng = StdRng::seed_from_u64(seed);
        next_tick(
            &default_bands(),
            0.0,
            MIN_FREQUENCY,
            MAX_FREQUENCY,
            SPECTRUM_POINTS,
            previous,
            smoothing,
            &mut rng,
        )
    }

    #[test]
    fn tick_has_agreed_shape() {
        let spectrum = tick(None, 0.8, 7);
        assert_eq!(spectrum.len(), SPECTRUM_POINTS);
        assert!(spectrum.windows(2).all(|w| w[0].frequency < w[1].frequency));
    }

    #[test]
    fn levels_stay_in_display_range() {
        let mut previous: Option<Vec<FrequencyPoint>> = None;
        for seed in 0..50 {
            let spectrum = tick(previous.as_deref(), 0.8, seed);
            assert!(spectrum
                .iter()
                .all(|p| p.gain >= SPECTRUM_MIN_DB && p.gain <= SPECTRUM_MAX_DB));
            previous = Some(spectrum);
        }
    }

    #[test]
    fn seeded_ticks_are_reproducible() {
        assert_eq!(tick(None, 0.8, 42), tick(None, 0.8, 42));
    }

    #[test]
    fn smoothing_never_overshoots_target() {
        let previous = tick(None, 0.8, 1);
        let mut shape_rng = StdRng::seed_from_u64(2);
        let mut next_rng = StdRng::seed_from_u64(2);

        // Reconstruct the targets with the same seed, then verify the
        // published levels land between previous and target.
        let unsmoothed = next_tick(
            &default_bands(),
            0.0,
            MIN_FREQUENCY,
            MAX_FREQUENCY,
            SPECTRUM_POINTS,
            None,
            0.8,
            &mut shape_rng,
        );
        let smoothed = next_tick(
            &default_bands(),
            0.0,
            MIN_FREQUENCY,
            MAX_FREQUENCY,
            SPECTRUM_POINTS,
            Some(&previous),
            0.8,
            &mut next_rng,
        );

        for ((prev, target), new) in previous.iter().zip(&unsmoothed).zip(&smoothed) {
            let step = (new.gain - prev.gain).abs();
            let full = (target.gain - prev.gain).abs();
            assert!(step <= full + 1e-4);
        }
    }

    #[test]
    fn attack_is_faster_than_decay() {
        for smoothing in [0.0, 0.5, 0.8, MAX_SMOOTHING, 2.0] {
            assert!(attack_alpha(smoothing) > decay_alpha(smoothing));
        }
    }

    #[test]
    fn alpha_floors_at_max_smoothing() {
        assert!((attack_alpha(MAX_SMOOTHING) - 0.05).abs() < 1e-6);
        assert!((decay_alpha(MAX_SMOOTHING) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn boosted_band_lifts_spectrum_region() {
        let mut bands = default_bands();
        if let Some(band) = bands.iter_mut().find(|b| b.id == 4) {
            band.gain = 24.0;
        }

        // Average many ticks so jitter cancels out
        let mut rng = StdRng::seed_from_u64(9);
        let mut boosted_sum = 0.0;
        let mut edge_sum = 0.0;
        for _ in 0..200 {
            let spectrum = next_tick(
                &bands,
                0.0,
                MIN_FREQUENCY,
                MAX_FREQUENCY,
                SPECTRUM_POINTS,
                None,
                0.0,
                &mut rng,
            );
            // 1 kHz lands at fraction log10(1000/20)/log10(20000/20) = ~0.566
            boosted_sum += spectrum[56].gain;
            edge_sum += spectrum[5].gain;
        }

        assert!(boosted_sum / 200.0 > edge_sum / 200.0 + 10.0);
    }
}
