//! Curve engine
//!
//! Pure functions mapping a band set and master gain to a frequency-response
//! approximation sampled at log-spaced frequencies. This is a display model,
//! not a biquad transfer function: peaks fall off with the square of octave
//! distance and shelves follow a logistic ramp, which is cheap to evaluate
//! per animation tick and close enough for an editor curve.

use contour_core::{Band, FilterType, FrequencyPoint, MIN_Q};

/// Peak bands narrower than this Q contribute nothing (degenerate-bandwidth
/// guard; the formula would otherwise collapse to a spike between samples)
const PEAK_MIN_Q: f32 = 0.2;

/// Transition width of a shelf in octaves at Q = 1
const SHELF_WIDTH_OCTAVES: f32 = 1.5;

/// Steepness of the logistic shelf ramp
const SHELF_STEEPNESS: f32 = 3.0;

/// Sample `num_points` frequencies log-uniformly between `freq_min` and
/// `freq_max`, inclusive of both endpoints
pub fn sample_frequencies(freq_min: f32, freq_max: f32, num_points: usize) -> Vec<f32> {
    if num_points == 0 {
        return Vec::new();
    }
    if num_points == 1 {
        return vec![freq_min];
    }

    let log_min = freq_min.log10();
    let log_max = freq_max.log10();
    let step = (log_max - log_min) / (num_points - 1) as f32;

    (0..num_points)
        .map(|i| 10.0_f32.powf(log_min + step * i as f32))
        .collect()
}

/// Gain contribution of one band at one frequency, in dB
///
/// Zero-gain bands contribute exactly zero regardless of type; the caller is
/// responsible for skipping disabled bands.
pub fn band_contribution(band: &Band, frequency: f32) -> f32 {
    if band.gain == 0.0 {
        return 0.0;
    }

    match band.filter {
        FilterType::Peak => {
            if band.q < PEAK_MIN_Q {
                return 0.0;
            }
            let octave_distance = (frequency.log2() - band.frequency.log2()).abs();
            let bandwidth = 1.0 / band.q.max(MIN_Q);
            let attenuation = (octave_distance / (bandwidth * 2.0)).powi(2);
            band.gain / (1.0 + attenuation)
        }
        FilterType::LowShelf | FilterType::HighShelf => {
            let width = SHELF_WIDTH_OCTAVES / band.q.max(MIN_Q);
            let mut position = (frequency.log2() - band.frequency.log2()) / width;
            if band.filter == FilterType::LowShelf {
                position = -position;
            }
            let factor = 1.0 / (1.0 + (-SHELF_STEEPNESS * position).exp());
            band.gain * factor
        }
    }
}

/// Compute the frequency-response curve for a band set
///
/// Each sample starts at `master_gain` and accumulates every enabled band's
/// contribution. The sum is deliberately not clamped to the gain domain:
/// overlapping bands may push the curve past the nominal bounds.
pub fn compute_response(
    bands: &[Band],
    master_gain: f32,
    freq_min: f32,
    freq_max: f32,
    num_points: usize,
) -> Vec<FrequencyPoint> {
    sample_frequencies(freq_min, freq_max, num_points)
        .into_iter()
        .map(|frequency| {
            let gain = master_gain
                + bands
                    .iter()
                    .filter(|band| band.enabled)
                    .map(|band| band_contribution(band, frequency))
                    .sum::<f32>();
            FrequencyPoint::new(frequency, gain)
        })
        .collect()
}
