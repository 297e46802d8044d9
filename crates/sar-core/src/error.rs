/// Alias for `Result<T, SarError>`.
pub type SarResult<T> = Result<T, SarError>;

/// Errors that can occur when manipulating a world state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SarError {
    /// No vessel with the given name is part of the fleet.
    #[error("vessel not found: \"{0}\"")]
    VesselNotFound(String),

    /// A command could not be parsed.
    #[error("unknown command: \"{0}\"")]
    UnknownCommand(String),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
