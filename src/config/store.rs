use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

use super::settings::{ConfigUpdate, SidekickConfig};
use crate::utils::get_config_path;

/// Storage backend for [`SidekickConfig`]
pub trait ConfigStore {
    fn load(&self) -> Result<SidekickConfig>;

    fn save(&self, config: &SidekickConfig) -> Result<()>;

    /// Load, merge `update`, save, and return the stored settings
    fn update(&self, update: ConfigUpdate) -> Result<SidekickConfig> {
        let mut config = self.load()?;
        config.apply(update);
        self.save(&config)?;
        Ok(config)
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (see [`get_config_path`])
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(get_config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing file means defaults; a corrupt file is an error
    fn load(&self) -> Result<SidekickConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(SidekickConfig::default());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file: {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", self.path.display()))
    }

    fn save(&self, config: &SidekickConfig) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        // Write atomically (temp file + rename)
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| anyhow!("Config path has no file name: {}", self.path.display()))?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&temp_path, json).context("Failed to write config temp file")?;
        fs::rename(&temp_path, &self.path).context("Failed to rename config temp file")?;

        tracing::debug!(path = %self.path.display(), "Saved config");
        Ok(())
    }
}

/// In-process store, nothing touches disk
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: Mutex<SidekickConfig>,
}

impl MemoryConfigStore {
    pub fn new(config: SidekickConfig) -> Self {
        Self { config: Mutex::new(config) }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<SidekickConfig> {
        let config = self.config.lock().map_err(|_| anyhow!("Config lock poisoned"))?;
        Ok(config.clone())
    }

    fn save(&self, config: &SidekickConfig) -> Result<()> {
        let mut stored = self.config.lock().map_err(|_| anyhow!("Config lock poisoned"))?;
        *stored = config.clone();
        Ok(())
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn load(&self) -> Result<SidekickConfig> {
        (**self).load()
    }

    fn save(&self, config: &SidekickConfig) -> Result<()> {
        (**self).save(config)
    }
}
