// src/drivers/mod.rs
// 信号生成与离屏绘图
pub mod error;
pub mod plot;
pub mod reference;
pub mod spectrum;
pub mod time_signal;
// 公开导出，方便 GUI 直接调用
pub use error::SignalError;
pub use plot::render_icon;
pub use reference::{max_spectrum_deviation, numeric_spectrum};
pub use spectrum::generate_spectrum;
pub use time_signal::generate_time_series;
