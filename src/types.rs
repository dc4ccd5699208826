// src/types.rs
use ndarray::Array1;

use crate::drivers::SignalError;

// 占空比：一个周期内高电平所占的比例，取值 [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DutyRatio(f64);

impl DutyRatio {
    pub const DEFAULT: DutyRatio = DutyRatio(0.5);
    pub const STEP: f64 = 0.01;

    pub fn new(value: f64) -> Result<Self, SignalError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(SignalError::InvalidDutyRatio(value));
        }
        Ok(Self(value))
    }

    /// Snaps to the slider granularity and clamps into `[0, 1]`.
    pub fn quantized(value: f64) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        // 除以步数而不是乘以步长，避免 0.07 变成 0.07000000000000001
        let steps_per_unit = (1.0 / Self::STEP).round();
        Self((value.clamp(0.0, 1.0) * steps_per_unit).round() / steps_per_unit)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_degenerate(self) -> bool {
        self.0 == 0.0 || self.0 == 1.0
    }
}

impl Default for DutyRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// 时域折线：方波的顶点序列（含竖直跳变沿）
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    pub x: Array1<f64>, // 单位：周期 T
    pub y: Array1<f64>, // 单位：Vmax
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| [x, y]).collect()
    }
}

// 频域：谐波序号 -> 幅值
#[derive(Clone, Debug, PartialEq)]
pub struct SpectrumSeries {
    pub x: Array1<f64>, // 谐波序号 0..=N
    pub y: Array1<f64>, // 幅值 (Vmax)
}

impl SpectrumSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| [x, y]).collect()
    }

    /// One label per harmonic, always three decimal digits.
    pub fn labels(&self) -> Vec<String> {
        self.y.iter().map(|v| format!("{v:.3}")).collect()
    }
}
