use thiserror::Error;

/// Error kinds returned by roster operations
///
/// All of these are expected, caller-correctable conditions. The boundary
/// layer decides how each kind is presented to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No activity with the given name exists in the registry
    #[error("Activity not found: {0}")]
    NotFound(String),

    /// The email is already on the activity's roster
    #[error("{email} is already signed up for {activity}")]
    AlreadyEnrolled {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// The email is not on the activity's roster
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// The activity already has `max_participants` participants
    #[error("{activity} is full ({max_participants} participants)")]
    AtCapacity {
        /// Activity name
        activity: String,
        /// Configured capacity
        max_participants: u32,
    },

    /// The seed catalog violates a registry invariant
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Input could not be interpreted
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

impl From<serde_yaml::Error> for RosterError {
    fn from(err: serde_yaml::Error) -> Self {
        RosterError::InvalidCatalog(format!("YAML error: {}", err))
    }
}
