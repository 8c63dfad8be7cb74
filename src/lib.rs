use config::{Config, ConfigError};
use serde::Deserialize;

pub mod domain;
pub mod infrastructure;

/// アプリケーション設定
#[derive(Clone, Debug, Deserialize)]
pub struct YoyakuConfig {
    #[serde(default)]
    pub logger: Logger,
}

impl YoyakuConfig {
    /// 設定ファイルと環境変数から設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("yoyaku.toml").required(false))
            .add_source(config::Environment::with_prefix("YOYAKU").separator("_"))
            .build()?
            .try_deserialize::<YoyakuConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    #[serde(default)]
    pub level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            level: Level::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(tracing::Level::from(&Level::DEBUG), tracing::Level::DEBUG);
        assert_eq!(
            tracing::Level::from(&Level::default()),
            tracing::Level::INFO
        );
    }
}
