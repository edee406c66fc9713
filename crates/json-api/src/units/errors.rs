//! Unit Errors

use tracing::error;

use units_app::domain::units::{ErrorKind, UnitsServiceError, records::UnitUuid};

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: UnitsServiceError) -> ApiError {
    match error.kind() {
        ErrorKind::InvalidArgument => ApiError::bad_request(error.to_string()),
        ErrorKind::NotFound => ApiError::not_found(error.to_string()),
        ErrorKind::Internal => {
            error!("unit operation failed: {error}");

            ApiError::internal(error.to_string())
        }
    }
}

/// Text that is not a UUID cannot name a live unit, so it is reported as not found.
pub(crate) fn parse_unit_uuid(raw: &str) -> Result<UnitUuid, ApiError> {
    raw.parse()
        .ok()
        .ok_or_else(|| into_api_error(UnitsServiceError::NotFound))
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use units_app::domain::units::UnitsRepositoryError;

    use super::*;

    #[test]
    fn kinds_map_to_statuses() {
        let cases = [
            (UnitsServiceError::InvalidStatus, StatusCode::BAD_REQUEST),
            (UnitsServiceError::ForbiddenTransition, StatusCode::BAD_REQUEST),
            (UnitsServiceError::NotFound, StatusCode::NOT_FOUND),
            (
                UnitsServiceError::Storage(UnitsRepositoryError::AlreadyExists),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(into_api_error(error).status(), status);
        }
    }

    #[test]
    fn message_is_the_service_message() {
        let error = into_api_error(UnitsServiceError::ForbiddenTransition);

        assert_eq!(
            error.message(),
            "unit cannot go directly from occupied to available"
        );
    }

    #[test]
    fn malformed_uuid_is_not_found() {
        let error = parse_unit_uuid("not-a-uuid").err();

        assert_eq!(
            error.as_ref().map(ApiError::status),
            Some(StatusCode::NOT_FOUND)
        );
        assert_eq!(
            error.as_ref().map(ApiError::message),
            Some("unit with that id was not found")
        );
    }
}
