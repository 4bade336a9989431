//! Process configuration.
//!
//! Read from environment variables at start-up:
//!
//! - `TRIP_BIND_ADDR`: listen address, default `127.0.0.1:3000`
//! - `TRIP_CATALOG_PATH`: catalog JSON file, default `data/catalog.json`
//! - `TRIP_PLANNER_CONFIG`: optional planner configuration JSON file

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use crate::planner::{InvalidConfig, PlannerConfig};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// Error loading process configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TRIP_BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to read planner config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid planner config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid planner config {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidConfig,
    },
}

/// Configuration of the server process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("TRIP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: bind.clone(),
                source,
            })?;

        let catalog_path = lookup("TRIP_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let planner = match lookup("TRIP_PLANNER_CONFIG") {
            Some(path) => load_planner_config(PathBuf::from(path))?,
            None => PlannerConfig::default(),
        };

        Ok(Self {
            bind_addr,
            catalog_path,
            planner,
        })
    }
}

fn load_planner_config(path: PathBuf) -> Result<PlannerConfig, ConfigError> {
    let json = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = PlannerConfig::from_json_str(&json).map_err(|source| ConfigError::Json {
        path: path.clone(),
        source,
    })?;
    config.validate().map_err(|source| ConfigError::Invalid {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "loaded planner config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.planner, PlannerConfig::default());
    }

    #[test]
    fn overrides_from_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TRIP_BIND_ADDR", "0.0.0.0:8080"),
            ("TRIP_CATALOG_PATH", "/srv/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let err = AppConfig::from_lookup(lookup(&[("TRIP_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::BindAddr { .. }));
    }

    #[test]
    fn planner_config_file_overrides_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"travelHoursPerDay": 10, "nearbyHotelLimit": 5}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config =
            AppConfig::from_lookup(lookup(&[("TRIP_PLANNER_CONFIG", path.as_str())])).unwrap();
        assert_eq!(config.planner.travel_hours_per_day, 10.0);
        assert_eq!(config.planner.nearby_hotel_limit, 5);
        assert_eq!(config.planner.entry_fee_fallback, 500.0);
    }

    #[test]
    fn missing_planner_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = AppConfig::from_lookup(lookup(&[(
            "TRIP_PLANNER_CONFIG",
            path.to_str().unwrap(),
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_planner_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err =
            AppConfig::from_lookup(lookup(&[("TRIP_PLANNER_CONFIG", path.as_str())])).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn out_of_range_planner_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"travelHoursPerDay": 0}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err =
            AppConfig::from_lookup(lookup(&[("TRIP_PLANNER_CONFIG", path.as_str())])).unwrap_err();
        match err {
            ConfigError::Invalid { source, .. } => assert_eq!(source.field, "travelHoursPerDay"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
