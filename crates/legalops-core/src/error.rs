use thiserror::Error;

/// Structural problems with a single input record.
///
/// Business-rule outcomes (validation failures, rejected invoices, unassigned
/// matters) are returned as data and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid {field} `{value}`")]
    InvalidValue { field: &'static str, value: String },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: String },

    #[error("duplicate {field} `{value}`")]
    Duplicate { field: &'static str, value: String },

    #[error("{field} is outside the representable decimal range")]
    Overflow { field: &'static str },

    #[error("record failed validation: {}", .0.join("; "))]
    Rejected(Vec<String>),
}
