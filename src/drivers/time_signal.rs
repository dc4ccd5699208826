use ndarray::Array1;
use crate::drivers::SignalError;
use crate::types::{DutyRatio, TimeSeries};
/// Vertex levels of one period: low, jump up, hold high, jump down.
const PERIOD_LEVELS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];
/// Builds the vertices of a rectangular pulse train over `[-cycles, cycles]` periods.
///
/// The wave is high on `[k, k + duty_ratio)` for every integer `k`. Each edge position
/// appears twice so that consecutive vertices sharing an `x` draw the vertical jump.
/// For `0 < d < 1` the per-period edge order `k, k, k + d, k + d` is already ascending,
/// so no sort is needed. The trailing vertex closes the trace low at `+cycles`.
pub fn generate_time_series(duty_ratio: f64, cycles: usize) -> Result<TimeSeries, SignalError> {
    let duty = DutyRatio::new(duty_ratio)?;
    if cycles == 0 {
        return Err(SignalError::InvalidCycles);
    }
    let half_span = cycles as f64;
    if duty.is_degenerate() {
        let level = duty.value();
        return Ok(TimeSeries {
            x: Array1::from(vec![-half_span, half_span]),
            y: Array1::from(vec![level, level]),
        });
    }
    let d = duty.value();
    let vertex_count = 8 * cycles + 1;
    let mut x = Vec::with_capacity(vertex_count);
    let mut y = Vec::with_capacity(vertex_count);
    for k in -(cycles as i64)..(cycles as i64) {
        let start = k as f64;
        let edges = [start, start, start + d, start + d];
        x.extend_from_slice(&edges);
        y.extend_from_slice(&PERIOD_LEVELS);
    }
    x.push(half_span);
    y.push(0.0);
    Ok(TimeSeries {
        x: Array1::from(x),
        y: Array1::from(y),
    })
}
/// Exact level of the wave at time `t` (in periods).
pub fn square_wave_level(duty_ratio: f64, t: f64) -> f64 {
    let phase = t - t.floor();
    if phase < duty_ratio {
        1.0
    } else {
        0.0
    }
}
