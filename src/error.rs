use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScratchpadError {
    #[error("failed to write lesson output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("unknown lesson '{name}'{}", suggestion_hint(.suggestion))]
    UnknownLesson {
        name: String,
        suggestion: Option<String>,
    },
}

impl ScratchpadError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_lesson(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownLesson {
            name: name.into(),
            suggestion,
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ScratchpadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_lesson_with_suggestion() {
        let err = ScratchpadError::unknown_lesson("revrse", Some("reverse".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown lesson 'revrse' (did you mean 'reverse'?)"
        );
    }

    #[test]
    fn test_unknown_lesson_without_suggestion() {
        let err = ScratchpadError::unknown_lesson("quantum", None);
        assert_eq!(err.to_string(), "unknown lesson 'quantum'");
    }

    #[test]
    fn test_io_conversion() {
        let err: ScratchpadError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ScratchpadError::Io(_)));
    }
}
