use camino::Utf8Path;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Quiet window for coalescing attribute reports, in milliseconds
    pub debounce_ms: u64,
    /// Model identifiers that are never treated as lights
    pub exclude_models: Vec<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            exclude_models: vec![],
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateMode {
    /// Whole light state as payload
    #[default]
    Full,
    /// `{val, hue_state}` payload
    Compact,
    None,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    Ignore,
    #[default]
    Log,
    Emit,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    pub topic: String,
    pub attributes: bool,
    pub aggregate: AggregateMode,
    pub dispatch_failures: FailurePolicy,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            topic: "zigbee/${name}".to_string(),
            attributes: false,
            aggregate: AggregateMode::default(),
            dispatch_failures: FailurePolicy::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bridge: BridgeConfig,
    pub publish: PublishConfig,
}

impl AppConfig {
    pub fn from_yaml(text: &str) -> ApiResult<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Yaml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Load configuration from `filename`. A missing file yields the defaults.
pub fn parse(filename: &Utf8Path) -> ApiResult<AppConfig> {
    let settings = Config::builder()
        .add_source(File::new(filename.as_str(), FileFormat::Yaml).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use crate::config::{AggregateMode, AppConfig, FailurePolicy, parse};

    #[test]
    fn defaults() {
        let conf = AppConfig::default();
        assert_eq!(conf.bridge.debounce_ms, 20);
        assert!(conf.bridge.exclude_models.is_empty());
        assert_eq!(conf.publish.topic, "zigbee/${name}");
        assert!(!conf.publish.attributes);
        assert_eq!(conf.publish.aggregate, AggregateMode::Full);
        assert_eq!(conf.publish.dispatch_failures, FailurePolicy::Log);
    }

    #[test]
    fn partial_yaml() {
        let conf = AppConfig::from_yaml(
            "
bridge:
  exclude_models: [\"TRADFRI signal repeater\"]
publish:
  aggregate: compact
  dispatch_failures: emit
",
        )
        .unwrap();

        assert_eq!(conf.bridge.debounce_ms, 20);
        assert_eq!(conf.bridge.exclude_models, vec!["TRADFRI signal repeater"]);
        assert_eq!(conf.publish.topic, "zigbee/${name}");
        assert_eq!(conf.publish.aggregate, AggregateMode::Compact);
        assert_eq!(conf.publish.dispatch_failures, FailurePolicy::Emit);
    }

    #[test]
    fn invalid_yaml_value() {
        assert!(AppConfig::from_yaml("publish:\n  aggregate: sometimes\n").is_err());
    }

    #[test]
    fn missing_file() {
        let conf = parse(Utf8Path::new("/nonexistent/zhue/config.yaml")).unwrap();
        assert_eq!(conf, AppConfig::default());
    }
}
