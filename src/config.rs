//! Service Configuration
//!
//! Read from the process environment (after `.env` has been loaded by `main`).

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PASSPHRASE: &str = "dummy";

/// Where the initial employee set comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The dataset compiled into the binary
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
    /// Start with no records
    Empty,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Interface to bind
    pub bind_address: String,
    /// Listening port (`PORT`)
    pub port: u16,
    /// Value the `authorization` header must carry on deletes
    pub passphrase: String,
    pub dataset: DatasetSource,
    /// Served for any path no route matches
    pub static_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            passphrase: DEFAULT_PASSPHRASE.to_string(),
            dataset: DatasetSource::Bundled,
            static_dir: PathBuf::from("public"),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT must be a port number, got '{}'", port)))?;
        }
        if let Some(addr) = lookup("BIND_ADDRESS") {
            config.bind_address = addr;
        }
        if let Some(passphrase) = lookup("EMPLOYEE_PASSPHRASE") {
            config.passphrase = passphrase;
        }
        if let Some(path) = lookup("EMPLOYEE_DATASET") {
            config.dataset = if path.trim().is_empty() {
                DatasetSource::Empty
            } else {
                DatasetSource::File(PathBuf::from(path))
            };
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.passphrase, "dummy");
        assert_eq!(config.dataset, DatasetSource::Bundled);
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("EMPLOYEE_PASSPHRASE", "open sesame"),
            ("EMPLOYEE_DATASET", "/tmp/seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.passphrase, "open sesame");
        assert_eq!(config.dataset, DatasetSource::File(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn test_empty_dataset_path_means_no_seed() {
        let config = ServiceConfig::from_lookup(lookup(&[("EMPLOYEE_DATASET", "")])).unwrap();
        assert_eq!(config.dataset, DatasetSource::Empty);
    }

    #[test]
    fn test_bad_port() {
        let result = ServiceConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
