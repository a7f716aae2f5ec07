//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML config file into the `AppConfig` DTO, then applies
//! environment overrides and path defaults for this machine.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tm_core::config::AppConfig;

/// Env var naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "TIMEMACHINE_CONFIG";
/// Env var overriding `[backend] url`.
pub const BACKEND_URL_ENV: &str = "TIMEMACHINE_BACKEND_URL";

const APP_DIR_NAME: &str = "timemachine";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Pure data loading: whatever is in the file is accepted as-is.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Default config location: `<config dir>/timemachine/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
}

/// Default location file: `<local data dir>/timemachine/location`.
pub fn default_location_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("location"))
}

/// Resolve the effective configuration.
///
/// 1. `.env` is loaded if present
/// 2. the file named by `TIMEMACHINE_CONFIG` (or the default path) is read if it exists
/// 3. `TIMEMACHINE_BACKEND_URL` overrides the backend url
/// 4. an empty location path falls back to the per-user data dir
pub fn resolve_config() -> anyhow::Result<AppConfig> {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let config_path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(default_config_path);

    let config = match config_path {
        Some(path) if path.exists() => load_config(path)?,
        Some(path) if std::env::var_os(CONFIG_PATH_ENV).is_some() => {
            anyhow::bail!("Config file does not exist: {}", path.display())
        }
        _ => AppConfig::empty(),
    };

    Ok(apply_overrides(
        config,
        std::env::var(BACKEND_URL_ENV).ok(),
        default_location_path().as_deref(),
    ))
}

/// Apply the environment override and location default to a loaded config.
pub fn apply_overrides(
    mut config: AppConfig,
    backend_url: Option<String>,
    default_location: Option<&Path>,
) -> AppConfig {
    if let Some(url) = backend_url.filter(|url| !url.trim().is_empty()) {
        config.backend_url = url;
    }
    if config.location_path.as_os_str().is_empty() {
        if let Some(path) = default_location {
            config.location_path = path.to_path_buf();
        }
    }
    config
}
