use std::fs;
use std::path::Path;
use std::time::Duration;

use notifier_engine::{EngineConfig, GatewaySettings, RosterSettings};
use notifier_logging::notifier_warn;
use serde::Deserialize;

pub(crate) const CONFIG_FILENAME: &str = "notifier.ron";

/// Operator-editable settings, read once at startup from `notifier.ron`
/// in the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub push_endpoint: String,
    pub roster_endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gateway = GatewaySettings::default();
        let roster = RosterSettings::default();
        Self {
            push_endpoint: gateway.endpoint,
            roster_endpoint: roster.endpoint,
            connect_timeout_secs: gateway.connect_timeout.as_secs(),
            request_timeout_secs: gateway.request_timeout.as_secs(),
        }
    }
}

impl AppConfig {
    pub(crate) fn engine_config(&self) -> EngineConfig {
        let connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        let request_timeout = Duration::from_secs(self.request_timeout_secs);
        EngineConfig {
            gateway: GatewaySettings {
                endpoint: self.push_endpoint.clone(),
                connect_timeout,
                request_timeout,
            },
            roster: RosterSettings {
                endpoint: self.roster_endpoint.clone(),
                connect_timeout,
                request_timeout,
            },
        }
    }
}

/// Loads configuration from `path`. A missing file is normal; anything
/// unreadable or unparseable falls back to defaults with a warning.
pub(crate) fn load(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            notifier_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            notifier_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("absent.ron"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "(push_endpoint: \"http://push.internal/api/send-push\")",
        )
        .unwrap();

        let config = load(&path);
        assert_eq!(config.push_endpoint, "http://push.internal/api/send-push");
        assert_eq!(config.roster_endpoint, AppConfig::default().roster_endpoint);
        assert_eq!(
            config.request_timeout_secs,
            AppConfig::default().request_timeout_secs
        );
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "not ron at all").unwrap();

        assert_eq!(load(&path), AppConfig::default());
    }

    #[test]
    fn timeouts_flow_into_the_engine_config() {
        let config = AppConfig {
            connect_timeout_secs: 3,
            request_timeout_secs: 7,
            ..AppConfig::default()
        };
        let engine = config.engine_config();
        assert_eq!(engine.gateway.connect_timeout, Duration::from_secs(3));
        assert_eq!(engine.gateway.request_timeout, Duration::from_secs(7));
        assert_eq!(engine.roster.request_timeout, Duration::from_secs(7));
    }
}
