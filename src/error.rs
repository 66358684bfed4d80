use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("invalid colour: {value}")]
    #[diagnostic(code(swatch::colour))]
    InvalidColour {
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("invalid colour count: {count}")]
    #[diagnostic(code(swatch::count))]
    InvalidCount {
        count: usize,
        #[help]
        help: Option<String>,
    },

    #[error("unknown palette scheme: {name}")]
    #[diagnostic(code(swatch::scheme))]
    UnknownScheme {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("validation error: {message}")]
    #[diagnostic(code(swatch::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(swatch::json))]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    #[diagnostic(code(swatch::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SwatchError>;
