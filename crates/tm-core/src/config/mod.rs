//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//! No validation and no default-value policy lives here.

mod app_config;

pub use app_config::AppConfig;
