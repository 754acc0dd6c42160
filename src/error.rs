use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("{field} range is empty: {min}..{max}")]
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} is not a #rgb or #rrggbb color: {value:?}")]
    BadColor { field: &'static str, value: String },

    #[error("glyph alphabet is empty")]
    EmptyAlphabet,

    #[error("particle repel distance {repel} exceeds link distance {link}")]
    RepelBeyondLink { repel: f64, link: f64 },
}
