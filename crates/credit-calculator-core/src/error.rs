use thiserror::Error;

/// One violated constraint on a single criteria field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum CreditError {
    #[error("Invalid criteria: {}", join_messages(.0))]
    Validation(Vec<Violation>),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
