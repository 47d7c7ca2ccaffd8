use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("{0}")]
    IncompleteInput(String),

    #[error("Unknown language: {input}{}", suggestion_suffix(.suggestion))]
    UnknownLanguage {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Unknown gender: {input}{}", suggestion_suffix(.suggestion))]
    UnknownGender {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Unknown activity level: {input}{}", suggestion_suffix(.suggestion))]
    UnknownActivityLevel {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Unknown theme: {input}{}", suggestion_suffix(.suggestion))]
    UnknownTheme {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Invalid color: {0} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_messages() {
        let err = CalcError::UnknownLanguage {
            input: "jp".to_string(),
            suggestion: Some("ja".to_string()),
        };
        assert_eq!(err.to_string(), "Unknown language: jp (did you mean 'ja'?)");

        let err = CalcError::UnknownGender {
            input: "x".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown gender: x");
    }
}
