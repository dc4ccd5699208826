use eframe::egui::IconData;
use image::{DynamicImage, ImageBuffer, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::config::AxisRange;
use crate::drivers::error::SignalError;
use crate::types::TimeSeries;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background: RGBColor,
    pub trace: RGBColor,
    pub stroke_width: u32,
}
impl PlotStyle {
    /// Square, borderless style for the window icon.
    pub fn icon(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            margin: size / 8,
            background: RGBColor(135, 206, 250),
            trace: RGBColor(10, 10, 60),
            stroke_width: (size / 16).max(1),
        }
    }
}
fn draw_time_rgb(
    series: &TimeSeries,
    axes: &AxisRange,
    style: &PlotStyle,
) -> Result<Vec<u8>, SignalError> {
    if series.is_empty() {
        return Err(SignalError::Plot("time series has no vertices".into()));
    }
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(style.margin)
            .build_cartesian_2d(axes.x.0..axes.x.1, axes.y.0..axes.y.1)?;
        let trace = style.trace.stroke_width(style.stroke_width);
        chart.draw_series(LineSeries::new(
            series.x.iter().copied().zip(series.y.iter().copied()),
            trace,
        ))?;
        root.present()?;
    }
    Ok(buffer)
}
/// Renders the time trace into an RGBA window icon.
pub fn render_icon(
    series: &TimeSeries,
    axes: &AxisRange,
    size: u32,
) -> Result<IconData, SignalError> {
    let style = PlotStyle::icon(size);
    let buffer = draw_time_rgb(series, axes, &style)?;
    let rgba = to_image(buffer, size, size)?.to_rgba8();
    Ok(IconData {
        rgba: rgba.into_raw(),
        width: size,
        height: size,
    })
}
fn to_image(buffer: Vec<u8>, width: u32, height: u32) -> Result<DynamicImage, SignalError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer)
        .ok_or_else(|| SignalError::Plot("failed to allocate image buffer".into()))?;
    Ok(DynamicImage::ImageRgb8(image))
}
