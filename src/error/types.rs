use thiserror::Error;

/// Unified result type for the dynamic grid crate.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors surfaced while building or reconfiguring a device profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile `{name}` has {count} hotseat spaces; an odd count is required to place all apps")]
    EvenHotseatCount { name: String, count: i32 },
    #[error("profile `{name}` has a fractional hotseat count {count}")]
    FractionalHotseatCount { name: String, count: f32 },
    #[error("reference profile table is empty")]
    EmptyReferenceTable,
    #[error("observers queued more than {limit} chained reconfigurations")]
    ReconfigurationCascade { limit: usize },
    #[error("failed to encode profile fingerprint: {0}")]
    Fingerprint(#[source] serde_json::Error),
    #[error("invalid grid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
