//! PublisherConfig - settings for the in-memory publisher.
//!
//! # Sources
//! - defaults (`PublisherConfig::default()`, also used for missing JSON fields)
//! - a JSON document (`from_json`)
//! - `RELAY_DEFAULT_QUEUE` / `RELAY_MAX_QUEUE_LEN` overrides (`from_env`)

use serde::{Deserialize, Serialize};

use crate::domain::RelayError;

pub const DEFAULT_QUEUE: &str = "celery";

pub const ENV_DEFAULT_QUEUE: &str = "RELAY_DEFAULT_QUEUE";
pub const ENV_MAX_QUEUE_LEN: &str = "RELAY_MAX_QUEUE_LEN";

/// Settings for the in-memory publisher.
///
/// Every field has a default, so `{}` is a valid config document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Queue used when a dispatch does not name one.
    pub default_queue: String,

    /// Per-queue capacity. `None` means unbounded.
    pub max_queue_len: Option<usize>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            default_queue: DEFAULT_QUEUE.to_string(),
            max_queue_len: None,
        }
    }
}

impl PublisherConfig {
    pub fn from_json(s: &str) -> Result<Self, RelayError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Defaults overridden by `RELAY_DEFAULT_QUEUE` / `RELAY_MAX_QUEUE_LEN`.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source (environment, CLI flags, tests).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(queue) = lookup(ENV_DEFAULT_QUEUE) {
            if queue.trim().is_empty() {
                return Err(RelayError::config(format!("{ENV_DEFAULT_QUEUE} is empty")));
            }
            self.default_queue = queue;
        }
        if let Some(raw) = lookup(ENV_MAX_QUEUE_LEN) {
            let len = raw.trim().parse::<usize>().map_err(|e| {
                RelayError::config(format!("{ENV_MAX_QUEUE_LEN}={raw:?}: {e}"))
            })?;
            self.max_queue_len = Some(len);
        }
        Ok(self)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = PublisherConfig::from_json("{}").unwrap();
        assert_eq!(config, PublisherConfig::default());
        assert_eq!(config.default_queue, "celery");
        assert_eq!(config.max_queue_len, None);
    }

    #[test]
    fn json_fields_override_defaults() {
        let config = PublisherConfig::from_json(r#"{"default_queue": "bulk", "max_queue_len": 3}"#)
            .unwrap();
        assert_eq!(config.default_queue, "bulk");
        assert_eq!(config.max_queue_len, Some(3));
    }

    #[test]
    fn overrides_apply_on_top() {
        let config = PublisherConfig::default()
            .with_overrides(lookup(&[
                (ENV_DEFAULT_QUEUE, "fast"),
                (ENV_MAX_QUEUE_LEN, " 10 "),
            ]))
            .unwrap();
        assert_eq!(config.default_queue, "fast");
        assert_eq!(config.max_queue_len, Some(10));
    }

    #[test]
    fn bad_override_is_a_config_error() {
        let err = PublisherConfig::default()
            .with_overrides(lookup(&[(ENV_MAX_QUEUE_LEN, "lots")]))
            .unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));

        let err = PublisherConfig::default()
            .with_overrides(lookup(&[(ENV_DEFAULT_QUEUE, "  ")]))
            .unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }
}
