//! SLA engine error types

use thiserror::Error;

/// Errors that can occur during SLA computation
#[derive(Error, Debug)]
pub enum SlaError {
    /// Threshold table violates its ordering invariant
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
