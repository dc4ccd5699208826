use thiserror::Error;
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("duty ratio must lie in [0, 1], got {0}")]
    InvalidDutyRatio(f64),
    #[error("cycle count must be greater than zero")]
    InvalidCycles,
    #[error("harmonic count must be greater than zero")]
    InvalidHarmonics,
    #[error("samples per period must be greater than zero")]
    InvalidResolution,
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for SignalError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        SignalError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for SignalError {
    fn from(value: image::ImageError) -> Self {
        SignalError::Plot(value.to_string())
    }
}
