// src/visualizer.rs
use eframe::egui;
use egui::{Align2, Color32, RichText};
use egui_plot::{uniform_grid_spacer, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};

use crate::config::{AxisRange, SessionConfig};
use crate::types::{SpectrumSeries, TimeSeries};

pub const TIME_REGION: &str = "Time Region";
pub const FREQUENCY_REGION: &str = "Frequency Region";

const TRACE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const BASELINE_COLOR: Color32 = Color32::from_rgb(214, 39, 40);

/// A plot area that redraws whatever series it was last handed.
pub trait PlotPane {
    type Series;
    fn render(&mut self, series: &Self::Series);
}

// 固定坐标轴，禁止拖拽和缩放
fn fixed_plot(id: &str, x_label: &str, axes: &AxisRange) -> Plot {
    Plot::new(id)
        .x_axis_label(x_label)
        .y_axis_label("Voltage (Vmax)")
        .include_x(axes.x.0)
        .include_x(axes.x.1)
        .include_y(axes.y.0)
        .include_y(axes.y.1)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .view_aspect(1.2)
}

pub struct TimePane {
    axes: AxisRange,
    points: Vec<[f64; 2]>,
}

impl TimePane {
    pub fn new(axes: AxisRange) -> Self {
        Self {
            axes,
            points: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new(TIME_REGION).strong());
        let axes = self.axes;
        fixed_plot("time_region", "Time (T)", &axes).show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(axes.min(), axes.max()));
            plot_ui.line(
                Line::new(PlotPoints::new(self.points.clone()))
                    .color(TRACE_COLOR)
                    .width(1.25_f32),
            );
        });
    }
}

impl PlotPane for TimePane {
    type Series = TimeSeries;

    fn render(&mut self, series: &TimeSeries) {
        self.points = series.points();
    }
}

/// Magnitude label drawn just above a stem tip.
#[derive(Clone, Debug, PartialEq)]
pub struct StemLabel {
    pub anchor: [f64; 2],
    pub text: String,
}

pub struct FrequencyPane {
    axes: AxisRange,
    tick_step: f64,
    label_offset: f64,
    stems: Vec<[f64; 2]>,
    labels: Vec<StemLabel>,
    labels_visible: bool,
}

impl FrequencyPane {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            axes: config.freq_axis,
            tick_step: config.freq_tick_step,
            label_offset: config.label_offset,
            stems: Vec::new(),
            labels: Vec::new(),
            labels_visible: false,
        }
    }

    #[cfg(test)]
    pub fn stems(&self) -> &[[f64; 2]] {
        &self.stems
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[StemLabel] {
        &self.labels
    }

    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    pub fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new(FREQUENCY_REGION).strong());
        let axes = self.axes;
        let step = self.tick_step;
        fixed_plot("frequency_region", "Frequency (1/T)", &axes)
            .x_grid_spacer(uniform_grid_spacer(move |_| [step, step * 5.0, step * 10.0]))
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(axes.min(), axes.max()));
                plot_ui.line(
                    Line::new(PlotPoints::new(vec![[axes.x.0, 0.0], [axes.x.1, 0.0]]))
                        .color(BASELINE_COLOR)
                        .width(0.75_f32),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(self.stems.clone()))
                        .stems(0.0_f32)
                        .radius(2.0_f32)
                        .color(TRACE_COLOR),
                );
                if self.labels_visible {
                    for label in &self.labels {
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(label.anchor[0], label.anchor[1]),
                                RichText::new(&label.text).size(9.0),
                            )
                            .anchor(Align2::CENTER_BOTTOM),
                        );
                    }
                }
            });
    }
}

impl PlotPane for FrequencyPane {
    type Series = SpectrumSeries;

    fn render(&mut self, series: &SpectrumSeries) {
        self.stems = series.points();
        self.labels = self
            .stems
            .iter()
            .zip(series.labels())
            .map(|(&[x, y], text)| StemLabel {
                anchor: [x, y + self.label_offset],
                text,
            })
            .collect();
    }
}
