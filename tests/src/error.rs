//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A savepoint label was used before it was marked.
    #[error("savepoint '{label}' was never marked in scenario '{scenario}'")]
    UnknownSavepoint { scenario: String, label: String },

    /// Expectation failed.
    #[error("expectation failed for step {step} of scenario '{scenario}': {message}")]
    ExpectationFailed {
        scenario: String,
        step: usize,
        message: String,
    },

    /// The scenario thread panicked.
    #[error("scenario '{scenario}' panicked")]
    Panicked { scenario: String },
}

impl ScenarioError {
    pub fn unknown_savepoint(scenario: impl Into<String>, label: impl Into<String>) -> Self {
        Self::UnknownSavepoint {
            scenario: scenario.into(),
            label: label.into(),
        }
    }

    pub fn expectation_failed(
        scenario: impl Into<String>,
        step: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::ExpectationFailed {
            scenario: scenario.into(),
            step,
            message: message.into(),
        }
    }

    pub fn panicked(scenario: impl Into<String>) -> Self {
        Self::Panicked {
            scenario: scenario.into(),
        }
    }
}
