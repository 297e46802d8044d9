use sar_core::SarError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised when building or driving a simulation from the outside.
///
/// The tick itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A configuration value is out of range.
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    /// An error from the world model.
    #[error(transparent)]
    Core(#[from] SarError),
}
