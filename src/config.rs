use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Input configuration - how to scan directory inputs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Directories or files to exclude when the input is a directory
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Output configuration - where to write generated files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for generated TypeScript model files
    pub model_dir: PathBuf,
    /// Directory for generated C# service files
    pub service_dir: PathBuf,
    /// Directory for generated C# service interface files
    pub interface_dir: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration, creating output directories as needed
    fn validate(&self) -> Result<()> {
        for dir in [
            &self.output.model_dir,
            &self.output.service_dir,
            &self.output.interface_dir,
        ] {
            if !dir.exists() && !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create output directory: {}", dir.display())
                })?;
            }
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            input: InputConfig {
                exclude: vec!["bin".to_string(), "obj".to_string()],
            },
            output: OutputConfig {
                model_dir: PathBuf::from("src/models"),
                service_dir: PathBuf::from("Services"),
                interface_dir: PathBuf::from("Services/Interfaces"),
            },
        }
    }

    /// Write a default configuration file, refusing to overwrite an
    /// existing one unless `force` is set.
    pub fn init(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "Configuration file already exists: {}. Use --force to overwrite.",
                path.display()
            );
        }

        Config::default_config().save(path)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
