//! Analytics engine error types

use thiserror::Error;

/// Errors that can occur during aggregation
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Window parameters violate their ordering invariants
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A record in the input batch violates a stated invariant
    ///
    /// The entire batch is rejected; nothing is partially computed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
