use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_HISTORY_FILE: &str = "history.csv";
const DEFAULT_PROMPT: &str = ">>> ";

/// Configuration for opcalc, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalcConfig {
    /// History file; relative paths resolve against the data directory
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// Prompt shown by the interactive loop
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_history_file() -> String {
    DEFAULT_HISTORY_FILE.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            prompt: default_prompt(),
        }
    }
}

impl CalcConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CalcError::Io)?;
        let config: CalcConfig =
            serde_json::from_str(&content).map_err(CalcError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CalcError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CalcError::Serialization)?;
        fs::write(config_path, content).map_err(CalcError::Io)?;
        Ok(())
    }

    pub fn history_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.history_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    /// Reads a setting by its CLI key (`history-file`, `prompt`).
    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "history-file" => Ok(&self.history_file),
            "prompt" => Ok(&self.prompt),
            other => Err(CalcError::Input(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "history-file" => {
                if value.trim().is_empty() {
                    return Err(CalcError::Input("history-file cannot be empty".into()));
                }
                self.history_file = value.to_string();
            }
            "prompt" => self.prompt = value.to_string(),
            other => return Err(CalcError::Input(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["history-file", "prompt"]
    }
}
