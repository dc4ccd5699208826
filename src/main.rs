// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod drivers;
mod gui;
mod types;
mod visualizer;
use anyhow::anyhow;
use eframe::egui;
use egui::IconData;

use crate::config::SessionConfig;
use crate::drivers::{generate_time_series, render_icon};

const ICON_SIZE: u32 = 64;

// 窗口图标：用默认占空比的方波现场画一个
fn load_app_icon(config: &SessionConfig) -> Option<IconData> {
    let series = generate_time_series(config.default_duty.value(), config.time_cycles).ok()?;
    match render_icon(&series, &config.time_axis, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("window icon unavailable: {e}");
            None
        }
    }
}

// 入口函数
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = SessionConfig::default();
    let session = gui::DisplaySession::new(config.clone())?;
    log::info!(
        "starting with duty ratio {}, {} cycles, {} harmonics",
        session.duty_ratio().value(),
        config.time_cycles,
        config.num_harmonics
    );
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(config.window_size)
        .with_min_inner_size([800.0, 500.0])
        .with_title(config.window_title.clone());
    let viewport = if let Some(icon) = load_app_icon(&config) {
        viewport.with_icon(icon)
    } else {
        viewport
    };
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Box::new(session)),
    )
    .map_err(|e| anyhow!("event loop exited with an error: {e}"))
}
