//! Dynamics engine
//!
//! Per tick, adjusts the effective gain of dynamic-enabled bands from the
//! simulated level at the band's frequency: loud input compresses a boost
//! toward zero and deepens a cut. The result is a derived band set fed to
//! the final curve pass; the stored bands are never mutated.

use contour_core::{Band, FrequencyPoint};

/// Level below which a band sees no dynamic adjustment, in dB
const INTENSITY_FLOOR_DB: f32 = -50.0;

/// Level at which the adjustment reaches the full dynamic range, in dB
const INTENSITY_RANGE_DB: f32 = 50.0;

/// Level assumed when the spectrum has no sample for a band, in dB
const ABSENT_LEVEL_DB: f32 = -100.0;

/// Map a band frequency to the nearest spectrum sample index
///
/// Uses the same log-frequency mapping as the samplers so lookups line up
/// with the grid the spectrum was generated on.
pub fn spectrum_index(frequency: f32, freq_min: f32, freq_max: f32, num_points: usize) -> usize {
    if num_points == 0 {
        return 0;
    }
    let fraction =
        (frequency.log10() - freq_min.log10()) / (freq_max.log10() - freq_min.log10());
    let index = (fraction * num_points as f32).floor();
    (index.max(0.0) as usize).min(num_points - 1)
}

/// Normalized drive of the dynamics loop: 0 below -50 dB, 1 at 0 dB
fn intensity(level_db: f32) -> f32 {
    ((level_db + INTENSITY_RANGE_DB) / INTENSITY_RANGE_DB).max(0.0)
}

/// Compute the derived band set for the current tick
///
/// Bands that are disabled, non-dynamic, or sitting at zero static gain pass
/// through unchanged. Boosts compress toward (never below) zero; cuts deepen
/// without a lower clamp — the derived gain only feeds the display curve, so
/// it is allowed to leave the stored gain domain.
pub fn apply_dynamics(
    bands: &[Band],
    spectrum: &[FrequencyPoint],
    freq_min: f32,
    freq_max: f32,
) -> Vec<Band> {
    bands
        .iter()
        .map(|band| {
            if !band.enabled || !band.dynamic || band.gain == 0.0 {
                return band.clone();
            }

            let index = spectrum_index(band.frequency, freq_min, freq_max, spectrum.len());
            let level = spectrum.get(index).map_or(ABSENT_LEVEL_DB, |p| p.gain);
            let offset = intensity(level) * band.dynamic_range;

            let mut adjusted = band.clone();
            adjusted.gain = if band.gain > 0.0 {
                (band.gain - offset).max(0.0)
            } else {
                band.gain - offset
            };
            adjusted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_core::{FilterType, MAX_FREQUENCY, MIN_FREQUENCY, SPECTRUM_POINTS};

    use crate::curve::sample_frequencies;

    fn dynamic_band(id: u32, frequency: f32, gain: f32) -> Band {
        let mut band = Band::new(id, frequency, gain, 1.0, FilterType::Peak);
        band.dynamic = true;
        band
    }

    fn flat_spectrum(level: f32) -> Vec<FrequencyPoint> {
        sample_frequencies(MIN_FREQUENCY, MAX_FREQUENCY, SPECTRUM_POINTS)
            .into_iter()
            .map(|f| FrequencyPoint::new(f, level))
            .collect()
    }

    #[test]
    fn index_mapping_spans_grid() {
        assert_eq!(
            spectrum_index(MIN_FREQUENCY, MIN_FREQUENCY, MAX_FREQUENCY, SPECTRUM_POINTS),
            0
        );
        assert_eq!(
            spectrum_index(MAX_FREQUENCY, MIN_FREQUENCY, MAX_FREQUENCY, SPECTRUM_POINTS),
            SPECTRUM_POINTS - 1
        );
        // Sqrt of the range sits at the middle of the log mapping
        let mid = spectrum_index(632.45, MIN_FREQUENCY, MAX_FREQUENCY, SPECTRUM_POINTS);
        assert!((49..=50).contains(&mid));
    }

    #[test]
    fn quiet_input_leaves_gain_alone() {
        let bands = vec![dynamic_band(1, 1000.0, 9.0)];
        let adjusted = apply_dynamics(&bands, &flat_spectrum(-80.0), MIN_FREQUENCY, MAX_FREQUENCY);
        assert_eq!(adjusted[0].gain, 9.0);
    }

    #[test]
    fn loud_input_compresses_boost_toward_zero() {
        let bands = vec![dynamic_band(1, 1000.0, 9.0)];
        // 0 dB input: full dynamic range (6 dB default) comes off the boost
        let adjusted = apply_dynamics(&bands, &flat_spectrum(0.0), MIN_FREQUENCY, MAX_FREQUENCY);
        assert!((adjusted[0].gain - 3.0).abs() < 1e-5);
    }

    #[test]
    fn boost_never_goes_negative() {
        let mut band = dynamic_band(1, 1000.0, 2.0);
        band.dynamic_range = 12.0;
        let adjusted =
            apply_dynamics(&[band], &flat_spectrum(0.0), MIN_FREQUENCY, MAX_FREQUENCY);
        assert_eq!(adjusted[0].gain, 0.0);
    }

    #[test]
    fn loud_input_deepens_cut_without_floor() {
        let mut band = dynamic_band(1, 1000.0, -28.0);
        band.dynamic_range = 10.0;
        let adjusted =
            apply_dynamics(&[band], &flat_spectrum(0.0), MIN_FREQUENCY, MAX_FREQUENCY);
        // Derived (display-only) gain is allowed below the stored domain
        assert!((adjusted[0].gain - -38.0).abs() < 1e-5);
    }

    #[test]
    fn zero_gain_and_static_bands_unchanged() {
        let zero = dynamic_band(1, 1000.0, 0.0);
        let mut non_dynamic = Band::new(2, 500.0, 6.0, 1.0, FilterType::Peak);
        non_dynamic.dynamic = false;
        let mut disabled = dynamic_band(3, 2000.0, 6.0);
        disabled.enabled = false;

        let bands = vec![zero, non_dynamic, disabled];
        let adjusted = apply_dynamics(&bands, &flat_spectrum(0.0), MIN_FREQUENCY, MAX_FREQUENCY);
        assert_eq!(adjusted, bands);
    }

    #[test]
    fn intermediate_level_scales_linearly() {
        let bands = vec![dynamic_band(1, 1000.0, 10.0)];
        // -25 dB: intensity 0.5, offset 3 of the 6 dB default range
        let adjusted = apply_dynamics(&bands, &flat_spectrum(-25.0), MIN_FREQUENCY, MAX_FREQUENCY);
        assert!((adjusted[0].gain - 7.0).abs() < 1e-5);
    }

    #[test]
    fn empty_spectrum_reads_as_silence() {
        let bands = vec![dynamic_band(1, 1000.0, 9.0)];
        let adjusted = apply_dynamics(&bands, &[], MIN_FREQUENCY, MAX_FREQUENCY);
        assert_eq!(adjusted[0].gain, 9.0);
    }
}
