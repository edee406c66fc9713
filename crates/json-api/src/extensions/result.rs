//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::envelope::ApiError;

pub(crate) trait ResultExt<T> {
    /// Map any error to a bad request carrying `message`.
    fn or_400(self, message: impl Into<String>) -> Result<T, ApiError>;

    /// Map any error to a logged internal error carrying the error's own message.
    fn or_500(self, context: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, message: impl Into<String>) -> Result<T, ApiError> {
        self.map_err(|_ignored| ApiError::bad_request(message))
    }

    fn or_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            ApiError::internal(error.to_string())
        })
    }
}
