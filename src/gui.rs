// src/gui.rs
use eframe::egui;
use egui::{Color32, RichText};

use crate::config::SessionConfig;
use crate::drivers::{
    generate_spectrum, generate_time_series, max_spectrum_deviation, numeric_spectrum, SignalError,
};
use crate::types::DutyRatio;
use crate::visualizer::{FrequencyPane, PlotPane, TimePane};

const PANEL_FILL: Color32 = Color32::from_rgb(135, 206, 250); // lightskyblue
const SHOW_DETAILS: &str = "Show details";
const HIDE_DETAILS: &str = "Hide details";
// FFT 自检时每个周期的采样点数
const SELF_CHECK_SAMPLES: usize = 4096;

pub struct DisplaySession {
    config: SessionConfig,
    // 滑块当前值，只有会话自己修改
    duty_ratio: DutyRatio,
    time_pane: TimePane,
    freq_pane: FrequencyPane,
}

impl DisplaySession {
    pub fn new(config: SessionConfig) -> Result<Self, SignalError> {
        config.validate()?;
        let mut session = Self {
            time_pane: TimePane::new(config.time_axis),
            freq_pane: FrequencyPane::new(&config),
            duty_ratio: config.default_duty,
            config,
        };
        session.refresh()?;
        session.self_check();
        Ok(session)
    }

    pub fn duty_ratio(&self) -> DutyRatio {
        self.duty_ratio
    }

    #[cfg(test)]
    pub fn time_pane(&self) -> &TimePane {
        &self.time_pane
    }

    #[cfg(test)]
    pub fn freq_pane(&self) -> &FrequencyPane {
        &self.freq_pane
    }

    /// Slider callback: snaps the value and redraws both panes.
    pub fn set_duty_ratio(&mut self, value: f64) -> Result<(), SignalError> {
        self.duty_ratio = DutyRatio::quantized(value);
        self.refresh()
    }

    pub fn reset(&mut self) -> Result<(), SignalError> {
        log::info!("reset duty ratio to {}", self.config.default_duty.value());
        self.duty_ratio = self.config.default_duty;
        self.refresh()
    }

    pub fn toggle_details(&mut self) {
        let visible = !self.freq_pane.labels_visible();
        self.freq_pane.set_labels_visible(visible);
        log::info!("magnitude labels {}", if visible { "shown" } else { "hidden" });
    }

    pub fn details_button_label(&self) -> &'static str {
        if self.freq_pane.labels_visible() {
            HIDE_DETAILS
        } else {
            SHOW_DETAILS
        }
    }

    // 每次都从头重新计算两个序列，再交给绘图区
    fn refresh(&mut self) -> Result<(), SignalError> {
        let d = self.duty_ratio.value();
        let time = generate_time_series(d, self.config.time_cycles)?;
        let spectrum = generate_spectrum(d, self.config.num_harmonics)?;
        log::debug!(
            "duty ratio {d:.2}: {} time vertices, {} harmonics",
            time.len(),
            spectrum.len()
        );
        self.time_pane.render(&time);
        self.freq_pane.render(&spectrum);
        Ok(())
    }

    fn self_check(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let d = self.duty_ratio.value();
        let analytic = generate_spectrum(d, self.config.num_harmonics);
        let numeric = numeric_spectrum(d, self.config.num_harmonics, SELF_CHECK_SAMPLES);
        match (analytic, numeric) {
            (Ok(a), Ok(n)) => log::debug!(
                "spectrum self-check at duty {d:.2}: max deviation from FFT {:.4}",
                max_spectrum_deviation(&a, &n)
            ),
            (Err(e), _) | (_, Err(e)) => log::warn!("spectrum self-check skipped: {e}"),
        }
    }

    fn report(result: Result<(), SignalError>) {
        if let Err(e) = result {
            log::error!("failed to refresh plots: {e}");
        }
    }
}

impl eframe::App for DisplaySession {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = PANEL_FILL;
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::bottom("caption").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&self.config.caption).small());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.time_pane.show(&mut cols[0]);
                self.freq_pane.show(&mut cols[1]);
            });
            ui.add_space(10.0);

            ui.columns(2, |cols| {
                // 左侧：占空比滑块与重置按钮
                let mut value = self.duty_ratio.value();
                let slider = egui::Slider::new(&mut value, 0.0..=1.0)
                    .step_by(self.config.duty_step)
                    .text("Duty ratio");
                if cols[0].add(slider).changed() {
                    Self::report(self.set_duty_ratio(value));
                }
                if cols[0].button("Reset").clicked() {
                    Self::report(self.reset());
                }

                // 右侧：显示/隐藏幅值标签
                if cols[1].button(self.details_button_label()).clicked() {
                    self.toggle_details();
                }
            });
        });
    }
}
