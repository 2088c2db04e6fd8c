use ascii_art::AsciiArtError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image file uploaded")]
    MissingImage,

    #[error("Invalid multipart request: {0}")]
    Multipart(String),

    #[error("Cannot decode image: {0}")]
    Decode(String),

    #[error("Conversion error: {0}")]
    Convert(#[from] AsciiArtError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingImage | ApiError::Multipart(_) | ApiError::Decode(_) => {
                StatusCode::BAD_REQUEST
            }
            // Input-shaped core failures are the client's fault;
            // misconfigured ramp/palette constants are ours
            ApiError::Convert(e) if e.is_invalid_input() => StatusCode::BAD_REQUEST,
            ApiError::Convert(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
