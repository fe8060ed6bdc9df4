//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Where collections are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process memory, optionally capped. Nothing survives the run.
    Memory { quota_bytes: Option<usize> },
    /// One JSON file per collection under `dir`.
    File { dir: PathBuf },
    /// Redis, configured through `REDIS_*` variables.
    Redis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Monotonic,
    Timestamp,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub id_strategy: IdStrategy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "file".to_string());
        let store = match backend.to_lowercase().as_str() {
            "memory" => StoreBackend::Memory {
                quota_bytes: lookup("STORE_QUOTA_BYTES").and_then(|s| s.parse().ok()),
            },
            "redis" => StoreBackend::Redis,
            other => {
                if other != "file" {
                    tracing::warn!(backend = %other, "Unknown STORE_BACKEND, using file store");
                }
                StoreBackend::File {
                    dir: lookup("STORE_DIR")
                        .map(PathBuf::from)
                        .unwrap_or_else(|| PathBuf::from(".pressdesk")),
                }
            }
        };

        let id_strategy = match lookup("ID_STRATEGY").as_deref() {
            Some("timestamp") => IdStrategy::Timestamp,
            _ => IdStrategy::Monotonic,
        };

        Self { store, id_strategy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(
            config.store,
            StoreBackend::File {
                dir: PathBuf::from(".pressdesk")
            }
        );
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
    }

    #[test]
    fn test_memory_with_quota() {
        let config = config(&[("STORE_BACKEND", "memory"), ("STORE_QUOTA_BYTES", "5242880")]);
        assert_eq!(
            config.store,
            StoreBackend::Memory {
                quota_bytes: Some(5_242_880)
            }
        );
    }

    #[test]
    fn test_file_dir_and_timestamp_ids() {
        let config = config(&[
            ("STORE_BACKEND", "FILE"),
            ("STORE_DIR", "/tmp/desk"),
            ("ID_STRATEGY", "timestamp"),
        ]);
        assert_eq!(
            config.store,
            StoreBackend::File {
                dir: PathBuf::from("/tmp/desk")
            }
        );
        assert_eq!(config.id_strategy, IdStrategy::Timestamp);
    }
}
