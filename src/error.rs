use thiserror::Error;

/// Failures an audit caller may want to tell apart from I/O noise.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The module owning the audit is not registered with the host.
    #[error("The attached module could not be found: {0}")]
    ModuleNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
