// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! YAML configuration, modeled on the `Config`/`ExecutorOptions` pattern used
//! elsewhere in this codebase: a plain `#[derive(Deserialize)]` struct with
//! `#[serde(default)]` fields and a `load_and_validate` free function.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::descriptors::TypeTag;
use crate::graph::{AttributeCatalogue, AttributeEntry};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpResolverConfig,
    pub config_file_root: String,
    pub attributes: HashMap<String, AttributeConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpResolverConfig::default(),
            config_file_root: ".".to_string(),
            attributes: HashMap::new(),
        }
    }
}

impl Config {
    /// Project the declarative `attributes` section into the runtime
    /// catalogue the graph builder and attribute filler consume.
    pub fn attribute_catalogue(&self) -> AttributeCatalogue {
        self.attributes
            .iter()
            .map(|(name, attr)| {
                (
                    name.clone(),
                    AttributeEntry::new(attr.value.clone(), attr.type_tag()),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpResolverConfig {
    pub max_attempts: u32,
    pub retry_interval_ms: u64,
}

impl Default for HttpResolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_interval_ms: 200,
        }
    }
}

impl HttpResolverConfig {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeConfig {
    /// `"Any"` or a concrete type name.
    pub type_name: String,
    pub value: Value,
}

impl AttributeConfig {
    pub fn type_tag(&self) -> TypeTag {
        if self.type_name.eq_ignore_ascii_case("any") {
            TypeTag::Any
        } else {
            TypeTag::named(self.type_name.clone())
        }
    }
}

/// Load and sanity-check a YAML configuration file.
pub fn load_and_validate(path: &Path) -> anyhow::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config {}: {e}", path.display()))?;
    let config: Config = serde_yaml::from_str(&text)
        .map_err(|e| anyhow::anyhow!("failed to parse config {}: {e}", path.display()))?;

    if config.http.max_attempts == 0 {
        anyhow::bail!("http.max_attempts must be >= 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.http.max_attempts, 3);
        assert_eq!(config.http.retry_interval(), Duration::from_millis(200));
    }

    #[test]
    fn parses_yaml_document() {
        let yaml = r#"
config_file_root: /tmp/reports
http:
  max_attempts: 5
  retry_interval_ms: 50
attributes:
  template:
    type_name: Any
    value: "layout.html"
  pageCount:
    type_name: Int
    value: 3
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.http.max_attempts, 5);
        assert_eq!(config.config_file_root, "/tmp/reports");

        let catalogue = config.attribute_catalogue();
        assert_eq!(catalogue["template"].type_tag, TypeTag::Any);
        assert_eq!(catalogue["pageCount"].type_tag, TypeTag::named("Int"));
    }

    #[test]
    fn rejects_zero_max_attempts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "http:\n  max_attempts: 0\n").unwrap();

        let err = load_and_validate(&path).unwrap_err();
        assert!(err.to_string().contains("max_attempts"));
    }
}
