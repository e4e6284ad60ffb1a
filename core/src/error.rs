//! Error types and handling for the Nexa site core

use thiserror::Error;

/// Result type alias for site core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the site core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Demo controller and selector errors
    #[error("Demo error: {0}")]
    Demo(#[from] DemoError),

    /// Pillar table errors
    #[error("Pillar error: {0}")]
    Pillar(#[from] PillarError),

    /// Contact form validation errors
    #[error("Form error: {0}")]
    Form(#[from] FormError),

}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Unknown demo in configuration: {demo}")]
    UnknownDemo { demo: String },

    #[error("Demo '{demo}' has {expected} transitions but {actual} delays were configured")]
    DelayCountMismatch {
        demo: String,
        expected: usize,
        actual: usize,
    },
}

/// Demo controller errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("Step {step} is outside 1..={total}")]
    StepOutOfRange { step: usize, total: usize },

    #[error("Demo not found: {id}")]
    UnknownDemo { id: String },

    #[error("Demo '{id}' must have at least two steps")]
    TooFewSteps { id: String },
}

/// Pillar table errors
#[derive(Error, Debug)]
pub enum PillarError {
    #[error("Duplicate pillar id in table: {id}")]
    DuplicateId { id: String },

    #[error("Invalid pillar table: {0}")]
    InvalidTable(#[from] serde_json::Error),
}

/// Contact form validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingRequired { fields: Vec<&'static str> },

    #[error("Please enter a valid email address")]
    InvalidEmail { email: String },
}
