use std::f64::consts::PI;
use ndarray::Array1;
use crate::drivers::SignalError;
use crate::types::{DutyRatio, SpectrumSeries};
/// Digits kept on harmonic magnitudes so the on-plot labels do not jitter.
pub const MAGNITUDE_DIGITS: i32 = 3;
/// Magnitude spectrum of a rectangular pulse train, from its Fourier series.
///
/// Index 0 is the DC term and equals the duty ratio exactly. Harmonic `n >= 1` has
/// magnitude `|2 sin(pi d n) / (pi n)|`, rounded to [`MAGNITUDE_DIGITS`].
pub fn generate_spectrum(
    duty_ratio: f64,
    num_harmonics: usize,
) -> Result<SpectrumSeries, SignalError> {
    let duty = DutyRatio::new(duty_ratio)?;
    if num_harmonics == 0 {
        return Err(SignalError::InvalidHarmonics);
    }
    let d = duty.value();
    let x = Array1::range(0.0, (num_harmonics + 1) as f64, 1.0);
    let mut y: Array1<f64> = Array1::zeros(num_harmonics + 1);
    y[0] = d;
    if duty.is_degenerate() {
        return Ok(SpectrumSeries { x, y });
    }
    for n in 1..=num_harmonics {
        let harmonic = n as f64;
        let magnitude = (2.0 * (PI * d * harmonic).sin() / (PI * harmonic)).abs();
        y[n] = round_to(magnitude, MAGNITUDE_DIGITS);
    }
    Ok(SpectrumSeries { x, y })
}
/// Rounds half away from zero to `digits` decimals.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    #[test]
    fn dc_term_is_duty_ratio() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let d: f64 = rng.gen_range(0.0..=1.0);
            let spectrum = generate_spectrum(d, 20).unwrap();
            assert_eq!(spectrum.y[0], d);
            assert_eq!(spectrum.len(), 21);
            assert!(spectrum.y.iter().all(|&m| m >= 0.0));
        }
    }
    #[test]
    fn degenerate_ratios_have_no_harmonics() {
        for d in [0.0, 1.0] {
            let spectrum = generate_spectrum(d, 20).unwrap();
            assert_eq!(spectrum.y[0], d);
            assert!(spectrum.y.iter().skip(1).all(|&m| m == 0.0));
        }
    }
    #[test]
    fn half_duty_known_values() {
        let spectrum = generate_spectrum(0.5, 20).unwrap();
        assert_eq!(spectrum.y[1], round_to(2.0 / PI, 3));
        assert_eq!(spectrum.y[1], 0.637);
        assert!(spectrum.y[2].abs() < 1e-12);
        assert_eq!(spectrum.y[3], 0.212);
        assert_eq!(spectrum.x.to_vec(), (0..=20).map(|n| n as f64).collect::<Vec<_>>());
    }
    #[test]
    fn harmonics_are_rounded_to_three_digits() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let d = (rng.gen_range(1..100) as f64) / 100.0;
            let spectrum = generate_spectrum(d, 20).unwrap();
            for &m in spectrum.y.iter().skip(1) {
                assert!(((m * 1000.0).round() - m * 1000.0).abs() < 1e-6);
                assert_eq!(format!("{m:.3}").parse::<f64>().unwrap(), m);
            }
        }
    }
    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            generate_spectrum(-0.1, 20),
            Err(SignalError::InvalidDutyRatio(_))
        ));
        assert!(matches!(
            generate_spectrum(0.5, 0),
            Err(SignalError::InvalidHarmonics)
        ));
    }
    #[test]
    fn repeated_calls_are_bit_identical() {
        assert_eq!(
            generate_spectrum(0.23, 20).unwrap(),
            generate_spectrum(0.23, 20).unwrap()
        );
    }
}
