use crate::basics::GreetingHours;
use crate::error::{Result, ScratchpadError};
use crate::lessons::Lesson;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "scratchpad.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScratchpadConfig {
    pub color: bool,
    /// Lessons for `run` when none are named; empty means all of them.
    pub lessons: Vec<String>,
    pub greeting: GreetingHours,
}

impl Default for ScratchpadConfig {
    fn default() -> Self {
        Self {
            color: true,
            lessons: Vec::new(),
            greeting: GreetingHours::default(),
        }
    }
}

impl ScratchpadConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScratchpadConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScratchpadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// An explicit path must exist; the default file in the working
    /// directory is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_in(path, Path::new("."))
    }

    /// Like `load`, with `DEFAULT_CONFIG_FILE` looked up under `base_dir`.
    pub fn load_in(path: Option<&Path>, base_dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = base_dir.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)
                } else {
                    debug!(dir = %base_dir.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let GreetingHours {
            morning_until,
            afternoon_until,
        } = self.greeting;

        if morning_until > 24 {
            return Err(ScratchpadError::invalid_config(
                "greeting.morning_until",
                format!("{morning_until} is not an hour between 0 and 24"),
            ));
        }
        if afternoon_until > 24 {
            return Err(ScratchpadError::invalid_config(
                "greeting.afternoon_until",
                format!("{afternoon_until} is not an hour between 0 and 24"),
            ));
        }
        if afternoon_until < morning_until {
            return Err(ScratchpadError::invalid_config(
                "greeting.afternoon_until",
                format!("{afternoon_until} comes before morning_until ({morning_until})"),
            ));
        }
        Ok(())
    }

    pub fn selected_lessons(&self) -> Result<Vec<Lesson>> {
        if self.lessons.is_empty() {
            return Ok(Lesson::ALL.to_vec());
        }
        self.lessons.iter().map(|name| name.parse()).collect()
    }
}
