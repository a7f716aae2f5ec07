use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base url of the snapshot backend, e.g. `https://example.com/api/v1/`
    /// (may be empty - this is a fact, not an error)
    pub backend_url: String,

    /// Per-request transport timeout in seconds. `0` means no timeout.
    pub request_timeout_secs: u64,

    /// File the viewer persists its address-bar state to
    pub location_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys map to empty values; nothing is validated here.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            backend_url: toml_value
                .get("backend")
                .and_then(|b| b.get("url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: toml_value
                .get("backend")
                .and_then(|b| b.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            location_path: PathBuf::from(
                toml_value
                    .get("viewer")
                    .and_then(|v| v.get("location_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            backend_url: String::new(),
            request_timeout_secs: 0,
            location_path: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_maps_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [backend]
            url = "https://fog.example/api/v1/"
            request_timeout_secs = 30

            [viewer]
            location_path = "/tmp/location"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.backend_url, "https://fog.example/api/v1/");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.location_path, PathBuf::from("/tmp/location"));
    }

    #[test]
    fn test_from_toml_missing_values_are_empty() {
        let value: toml::Value = toml::from_str("[backend]\n").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }

    #[test]
    fn test_negative_timeout_is_clamped() {
        let value: toml::Value =
            toml::from_str("[backend]\nrequest_timeout_secs = -5\n").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap().request_timeout_secs, 0);
    }
}
