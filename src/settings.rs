//! Configuration sources for the road status API.
//!
//! Settings are looked up by key name. The CLI layers the process environment
//! over a flat JSON file (`appSettings.json` by default), so any value from the
//! file can be overridden by exporting a variable with the same name.

use crate::error::{ConfigError, LookupError, LookupResult};
use serde_json::Value;
use std::{collections::HashMap, env, fmt, fs, io, path::Path};

/// Default configuration file, resolved against the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "appSettings.json";

/// A key/value source of configuration.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// The settings the lookup needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    RoadApiUrl,
    AppId,
    AppKey,
}

impl ConfigKey {
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::RoadApiUrl => "RoadApiUrl",
            ConfigKey::AppId => "AppId",
            ConfigKey::AppKey => "AppKey",
        }
    }

    /// Reads this key from `source`. Absent and blank values are both missing.
    pub fn resolve(self, source: &dyn ConfigSource) -> LookupResult<String> {
        source
            .get(self.name())
            .filter(|value| !value.trim().is_empty())
            .ok_or(LookupError::ConfigMissing(self))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings read from a flat JSON object.
///
/// String values are taken as-is; numbers and booleans are kept in their JSON
/// text form. Nested objects, arrays and `null` are ignored.
#[derive(Debug, Default, Clone)]
pub struct JsonFileSource {
    values: HashMap<String, String>,
}

impl JsonFileSource {
    /// Loads `path`. A file that does not exist is an empty source.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Config file '{}' not found, relying on environment variables",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let Value::Object(map) =
            serde_json::from_str::<Value>(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        else {
            return Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let values = map
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key, value))
            })
            .collect();

        Ok(Self { values })
    }
}

impl ConfigSource for JsonFileSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Settings read from process environment variables of the same name.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Consults each source in order and returns the first value found.
pub struct LayeredSource {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredSource {
    pub fn new(layers: Vec<Box<dyn ConfigSource>>) -> Self {
        Self { layers }
    }

    /// Environment variables take precedence over the JSON file at `path`.
    pub fn from_env_and_file(path: &Path) -> Result<Self, ConfigError> {
        let file = JsonFileSource::load(path)?;
        tracing::debug!("Loaded configuration from '{}'", path.display());
        Ok(Self::new(vec![
            Box::new(EnvSource) as Box<dyn ConfigSource>,
            Box::new(file),
        ]))
    }
}

impl ConfigSource for LayeredSource {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolve_rejects_absent_and_blank_values() {
        let config = source(&[("AppId", "  "), ("AppKey", "key")]);

        assert!(matches!(
            ConfigKey::RoadApiUrl.resolve(&config),
            Err(LookupError::ConfigMissing(ConfigKey::RoadApiUrl))
        ));
        assert!(matches!(
            ConfigKey::AppId.resolve(&config),
            Err(LookupError::ConfigMissing(ConfigKey::AppId))
        ));
        assert_eq!(ConfigKey::AppKey.resolve(&config).unwrap(), "key");
    }

    #[test]
    fn json_file_is_read_as_flat_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"RoadApiUrl":"https://api.tfl.gov.uk/Road","AppId":"id","Port":8080,"Logging":{{"Level":"Debug"}}}}"#
        )
        .unwrap();

        let config = JsonFileSource::load(file.path()).unwrap();

        assert_eq!(
            config.get("RoadApiUrl").as_deref(),
            Some("https://api.tfl.gov.uk/Road")
        );
        assert_eq!(config.get("AppId").as_deref(), Some("id"));
        assert_eq!(config.get("Port").as_deref(), Some("8080"));
        assert_eq!(config.get("Logging"), None);
        assert_eq!(config.get("AppKey"), None);
    }

    #[test]
    fn missing_json_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = JsonFileSource::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config.get("RoadApiUrl"), None);
    }

    #[test]
    fn malformed_json_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "RoadApiUrl=https://api.tfl.gov.uk/Road").unwrap();
        assert!(matches!(
            JsonFileSource::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["RoadApiUrl"]"#).unwrap();
        assert!(matches!(
            JsonFileSource::load(file.path()),
            Err(ConfigError::NotAnObject { .. })
        ));
    }

    #[test]
    fn earlier_layers_win() {
        let layered = LayeredSource::new(vec![
            Box::new(source(&[("AppKey", "override")])) as Box<dyn ConfigSource>,
            Box::new(source(&[("AppKey", "from-file"), ("AppId", "id")])),
        ]);

        assert_eq!(layered.get("AppKey").as_deref(), Some("override"));
        assert_eq!(layered.get("AppId").as_deref(), Some("id"));
        assert_eq!(layered.get("RoadApiUrl"), None);
    }
}
