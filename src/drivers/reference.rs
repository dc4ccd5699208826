//! Brute-force references for the closed-form generators.
//!
//! The spectrum is checked against an FFT of one sampled period. The tests below also
//! check the vertex polyline, which relies on a fixed low/high/high/low level pattern,
//! against dense sampling of the wave.
use ndarray::Array1;
use rustfft::{num_complex::Complex64, FftPlanner};
use crate::drivers::time_signal::square_wave_level;
use crate::drivers::SignalError;
use crate::types::{DutyRatio, SpectrumSeries};
/// Magnitude spectrum estimated from an FFT of one sampled period, scaled like the
/// Fourier series: DC is the mean, harmonic `n` is `2 |X_n| / N`.
pub fn numeric_spectrum(
    duty_ratio: f64,
    num_harmonics: usize,
    samples_per_period: usize,
) -> Result<SpectrumSeries, SignalError> {
    let duty = DutyRatio::new(duty_ratio)?;
    if num_harmonics == 0 {
        return Err(SignalError::InvalidHarmonics);
    }
    if samples_per_period <= 2 * num_harmonics {
        return Err(SignalError::InvalidResolution);
    }
    let step = 1.0 / samples_per_period as f64;
    let mut buffer: Vec<Complex64> = (0..samples_per_period)
        .map(|i| Complex64::new(square_wave_level(duty.value(), i as f64 * step), 0.0))
        .collect();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(samples_per_period);
    fft.process(&mut buffer);
    let scale = samples_per_period as f64;
    let x = Array1::range(0.0, (num_harmonics + 1) as f64, 1.0);
    let y = Array1::from_iter(buffer.iter().take(num_harmonics + 1).enumerate().map(
        |(n, c)| {
            if n == 0 {
                c.norm() / scale
            } else {
                2.0 * c.norm() / scale
            }
        },
    ));
    Ok(SpectrumSeries { x, y })
}
/// Largest absolute magnitude difference over the shared harmonics.
pub fn max_spectrum_deviation(a: &SpectrumSeries, b: &SpectrumSeries) -> f64 {
    a.y.iter()
        .zip(b.y.iter())
        .map(|(p, q)| (p - q).abs())
        .fold(0.0, f64::max)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{generate_spectrum, generate_time_series};
    use crate::types::TimeSeries;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    /// Samples the wave at `samples_per_period` evenly spaced points per period over
    /// `[-cycles, cycles)`.
    fn sample_square_wave(
        duty_ratio: f64,
        cycles: usize,
        samples_per_period: usize,
    ) -> Result<TimeSeries, SignalError> {
        let duty = DutyRatio::new(duty_ratio)?;
        if cycles == 0 {
            return Err(SignalError::InvalidCycles);
        }
        if samples_per_period == 0 {
            return Err(SignalError::InvalidResolution);
        }
        let total = 2 * cycles * samples_per_period;
        let start = -(cycles as f64);
        let step = 1.0 / samples_per_period as f64;
        let x = Array1::from_iter((0..total).map(|i| start + i as f64 * step));
        let y = x.mapv(|t| square_wave_level(duty.value(), t));
        Ok(TimeSeries { x, y })
    }
    /// Level of a vertex polyline at `t`, or `None` when `t` sits on a vertical edge or
    /// outside the trace.
    fn polyline_level(series: &TimeSeries, t: f64) -> Option<f64> {
        (0..series.len().saturating_sub(1)).find_map(|i| {
            let (x0, x1) = (series.x[i], series.x[i + 1]);
            let flat = series.y[i] == series.y[i + 1];
            (flat && x0 < x1 && x0 <= t && t <= x1).then_some(series.y[i])
        })
    }
    fn midpoint_times(cycles: usize, per_period: usize) -> impl Iterator<Item = f64> {
        let start = -(cycles as f64);
        (0..2 * cycles * per_period).map(move |i| start + (i as f64 + 0.5) / per_period as f64)
    }
    #[test]
    fn polyline_matches_dense_evaluation() {
        let mut duties = vec![0.0, 0.01, 0.25, 0.5, 0.99, 1.0];
        let mut rng = StdRng::seed_from_u64(42);
        duties.extend((0..20).map(|_| rng.gen_range(1..100) as f64 / 100.0));
        for d in duties {
            let series = generate_time_series(d, 3).unwrap();
            for t in midpoint_times(3, 1000) {
                let expected = square_wave_level(d, t);
                match polyline_level(&series, t) {
                    Some(level) => assert_eq!(level, expected, "duty {d} at t={t}"),
                    None => panic!("t={t} fell on an edge for duty {d}"),
                }
            }
        }
    }
    #[test]
    fn dense_samples_have_expected_mean() {
        let sampled = sample_square_wave(0.3, 2, 1000).unwrap();
        assert_eq!(sampled.len(), 4000);
        let mean = sampled.y.mean().unwrap();
        assert!((mean - 0.3).abs() < 2e-3);
    }
    #[test]
    fn analytic_spectrum_agrees_with_fft() {
        for d in [0.1, 0.25, 0.37, 0.5, 0.8] {
            let analytic = generate_spectrum(d, 20).unwrap();
            let numeric = numeric_spectrum(d, 20, 4096).unwrap();
            let deviation = max_spectrum_deviation(&analytic, &numeric);
            assert!(deviation < 3e-3, "duty {d}: deviation {deviation}");
        }
    }
    #[test]
    fn rejects_coarse_resolution() {
        assert!(matches!(
            numeric_spectrum(0.5, 20, 40),
            Err(SignalError::InvalidResolution)
        ));
        assert!(matches!(
            sample_square_wave(0.5, 1, 0),
            Err(SignalError::InvalidResolution)
        ));
    }
}
