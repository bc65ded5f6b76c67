//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 重复告警处理方式（`IOT_ALERT_DUPLICATES`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertDuplicates {
    #[default]
    Repeat,
    Suppress,
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub alert_duplicates: AlertDuplicates,
    pub seed_demo: bool,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_addr = read_optional(&lookup, "IOT_HTTP_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let alert_duplicates = read_alert_duplicates(&lookup, "IOT_ALERT_DUPLICATES")?;
        let seed_demo = read_bool_with_default(&lookup, "IOT_SEED_DEMO", true);

        Ok(Self {
            http_addr,
            alert_duplicates,
            seed_demo,
        })
    }
}

fn read_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

fn read_alert_duplicates<F>(lookup: &F, key: &str) -> Result<AlertDuplicates, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = read_optional(lookup, key) else {
        return Ok(AlertDuplicates::default());
    };
    match value.to_ascii_lowercase().as_str() {
        "repeat" => Ok(AlertDuplicates::Repeat),
        "suppress" => Ok(AlertDuplicates::Suppress),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}

fn read_bool_with_default<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match read_optional(lookup, key) {
        Some(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        None => default,
    }
}
