//! Application configuration and presentation layout constants.

mod app_config;
mod layout;

pub use app_config::AppConfig;
pub use layout::{DeviceClass, LayoutSpec};
