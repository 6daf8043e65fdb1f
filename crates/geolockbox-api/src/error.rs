use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geolockbox_core::GeolockError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<GeolockError> for ApiError {
    fn from(err: GeolockError) -> Self {
        match &err {
            GeolockError::InsufficientData { .. } => {
                Self::bad_request("Insufficient telemetry to generate tracking")
                    .with_details(err.to_string())
            }
            GeolockError::DeviceNotFound { .. } => {
                Self::not_found("Device not found").with_details(err.to_string())
            }
            GeolockError::DeliveryNotFound { .. } => {
                Self::not_found("Delivery not found").with_details(err.to_string())
            }
            GeolockError::DeliveryUnassigned { .. } => {
                Self::bad_request("This delivery has no assigned device")
                    .with_details(err.to_string())
            }
            _ => {
                tracing::error!(error = %err, "Request failed");
                Self::internal("Internal error").with_details(err.to_string())
            }
        }
    }
}
