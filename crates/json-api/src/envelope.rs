//! Response envelope shared by every route.

use salvo::{
    Response,
    http::StatusCode,
    oapi::{Components, EndpointOutRegister, Operation},
    writing::{Json, Scribe},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `{success, message, data}` wrapper written around every payload.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// `OK` on success, otherwise a human-readable reason
    pub message: String,

    /// Payload, `null` on failure
    pub data: Option<T>,
}

/// Successful response: the payload wrapped in an envelope with a status code.
#[derive(Debug)]
pub(crate) struct ApiResponse<T> {
    status: StatusCode,
    data: T,
}

impl<T> ApiResponse<T> {
    /// 200 OK
    pub(crate) fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    /// 201 Created
    pub(crate) fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T> Scribe for ApiResponse<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope {
            success: true,
            message: "OK".to_string(),
            data: Some(self.data),
        }));
    }
}

impl<T> EndpointOutRegister for ApiResponse<T> {
    fn register(_components: &mut Components, _operation: &mut Operation) {}
}

/// Failed response: a status code and message rendered as an envelope with `data: null`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 Not Found
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 Internal Server Error
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope::<()> {
            success: false,
            message: self.message,
            data: None,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, _operation: &mut Operation) {}
}
