use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;

use super::models::ErrorResponse;
use crate::errors::EngineError;

/// Engine failure rendered as a JSON error body
pub struct ApiError(pub EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            EngineError::UnknownCategory(_)
            | EngineError::InvalidThreshold(_)
            | EngineError::InvalidWindow(_)
            | EngineError::SelfMatchup { .. } => StatusCode::BAD_REQUEST,
            EngineError::PlayerNotFound(_)
            | EngineError::TeamNotFound(_)
            | EngineError::InsufficientData(_) => StatusCode::NOT_FOUND,
            EngineError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
            kind: self.0.kind(),
        };
        (status, Json(body)).into_response()
    }
}
