use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "Enter user name and phone number or 'help' for help: ";

/// Configuration for the bot's shell, stored as JSON. Contact data is
/// never written anywhere; only presentation settings live here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Text printed before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Colorize output by message level
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            color: default_color(),
        }
    }
}

impl RolodexConfig {
    /// Load config from `config.json` in the given directory, or return
    /// defaults if the file is not there.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file path; a missing file means
    /// defaults, a malformed one is an error.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: RolodexConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
