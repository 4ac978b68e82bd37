use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub content: PathBuf,
    pub static_dir: PathBuf,
    pub public: PathBuf,
    pub template: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("./content"),
            static_dir: PathBuf::from("./static"),
            public: PathBuf::from("./public"),
            template: PathBuf::from("./template.html"),
        }
    }
}

/// Placeholders substituted in the page template.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateConfig {
    pub title_placeholder: String,
    pub content_placeholder: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            title_placeholder: "{{ Title }}".to_string(),
            content_placeholder: "{{ Content }}".to_string(),
        }
    }
}

impl Config {
    /// The config bundled with the binary.
    pub fn compiled_default() -> Self {
        // build.rs rejects a default that does not parse.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::compiled_default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn compiled_default_matches_struct_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::compiled_default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "[paths]\npublic = \"out\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.paths.public, PathBuf::from("out"));
        assert_eq!(config.paths.content, PathBuf::from("./content"));
        assert_eq!(config.template, TemplateConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "[paths\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("mdsite.toml"));
    }
}
