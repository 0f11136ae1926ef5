use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::{catalog::error::CatalogError, quiz::error::QuizError};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{1}")]
    Api(StatusCode, String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Quiz(#[from] QuizError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Api(status, message) => (*status, message.clone()),
            ServerError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            ServerError::Quiz(e) => (quiz_status(e), e.to_string()),
            ServerError::Catalog(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        error!("Request failed: {}", message);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn quiz_status(error: &QuizError) -> StatusCode {
    match error {
        QuizError::InsufficientCatalog { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        QuizError::InvalidState(_) => StatusCode::CONFLICT,
        QuizError::AlreadyAnswered => StatusCode::CONFLICT,
        QuizError::UnknownSelection(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
