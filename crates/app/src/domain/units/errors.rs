//! Units Errors

use thiserror::Error;

/// Errors raised by unit storage.
#[derive(Debug, Error)]
pub enum UnitsRepositoryError {
    /// No live unit has that id
    #[error("unit not found")]
    NotFound,

    /// A unit with that id is already stored
    #[error("unit already exists")]
    AlreadyExists,

    /// Any other database failure
    #[error("storage error: {0}")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for UnitsRepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(ref database_error) if database_error.is_unique_violation() => {
                Self::AlreadyExists
            }
            other => Self::Sql(other),
        }
    }
}

/// Broad classification of a service error, used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something the domain rejects
    InvalidArgument,

    /// The referenced unit does not exist
    NotFound,

    /// Anything else
    Internal,
}

/// Errors raised by the units service.
#[derive(Debug, Error)]
pub enum UnitsServiceError {
    /// Status string is not one of the known statuses
    #[error(
        "invalid unit status, must be one of 'Available', 'Occupied', 'Cleaning In Progress', 'Maintenance Needed'"
    )]
    InvalidStatus,

    /// Type string is not one of the known types
    #[error("invalid unit type, must be 'cabin' or 'capsule'")]
    InvalidType,

    /// Occupied units cannot be made available in one step
    #[error("unit cannot go directly from occupied to available")]
    ForbiddenTransition,

    /// No live unit has that id
    #[error("unit with that id was not found")]
    NotFound,

    /// Storage failed
    #[error(transparent)]
    Storage(UnitsRepositoryError),
}

impl UnitsServiceError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStatus | Self::InvalidType | Self::ForbiddenTransition => {
                ErrorKind::InvalidArgument
            }
            Self::NotFound => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Internal,
        }
    }
}
