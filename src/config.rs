use crate::drivers::SignalError;
use crate::types::DutyRatio;
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub x: (f64, f64),
    pub y: (f64, f64),
}
impl AxisRange {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }
    pub fn min(&self) -> [f64; 2] {
        [self.x.0, self.y.0]
    }
    pub fn max(&self) -> [f64; 2] {
        [self.x.1, self.y.1]
    }
}
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Periods drawn on each side of t = 0.
    pub time_cycles: usize,
    /// Highest harmonic index shown in the frequency pane.
    pub num_harmonics: usize,
    pub default_duty: DutyRatio,
    pub duty_step: f64,
    pub time_axis: AxisRange,
    pub freq_axis: AxisRange,
    /// Spacing of the frequency-pane x grid, in harmonics.
    pub freq_tick_step: f64,
    /// Height of a magnitude label above its stem tip.
    pub label_offset: f64,
    pub window_title: String,
    pub caption: String,
    pub window_size: [f32; 2],
}
impl SessionConfig {
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.time_cycles == 0 {
            return Err(SignalError::InvalidCycles);
        }
        if self.num_harmonics == 0 {
            return Err(SignalError::InvalidHarmonics);
        }
        Ok(())
    }
}
impl Default for SessionConfig {
    fn default() -> Self {
        let num_harmonics = 20;
        Self {
            time_cycles: 10,
            num_harmonics,
            default_duty: DutyRatio::DEFAULT,
            duty_step: DutyRatio::STEP,
            // 只显示中间一个多周期
            time_axis: AxisRange::new((-1.1, 1.1), (-0.05, 1.05)),
            freq_axis: AxisRange::new((-0.5, num_harmonics as f64 + 0.5), (-0.05, 1.05)),
            freq_tick_step: 2.0,
            label_offset: 0.025,
            window_title: "Magnitude Spectrum of Rectangular Waves with Adjustable Duty Ratio"
                .to_owned(),
            caption: "© Lando Chan".to_owned(),
            window_size: [1100.0, 660.0],
        }
    }
}
