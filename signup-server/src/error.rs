use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// An error from the API, rendered as `{"error": message}`.
#[derive(Debug, PartialEq)]
pub struct Error {
    /// What to respond with
    status: StatusCode,

    /// Why, for the client
    message: String,
}

/// Return an error from a handler.
#[macro_export]
macro_rules! bail {
    ($message:expr) => {
        return Err($crate::error::Error::custom($message))
    };
    ($message:expr, $status:expr) => {
        return Err($crate::error::Error::custom_with_status($message, $status))
    };
}

impl Error {
    /// Construct a custom error
    pub fn custom(message: &str) -> Self {
        Self::custom_with_status(message, StatusCode::BAD_REQUEST)
    }

    /// Construct a custom error with a specific status code
    pub fn custom_with_status(message: &str, status: StatusCode) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Take the error apart for assertions
    #[cfg(test)]
    pub fn into_parts(self) -> (StatusCode, String) {
        (self.status, self.message)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}
