use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Category reported to API callers alongside the message
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Upstream,
    Persistence,
    Unauthorized,
}

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("{0}")]
    Upstream(String),

    #[error("{context}: {source}")]
    Persistence {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl AppError {
    pub fn persistence(context: impl Into<String>) -> impl FnOnce(sqlx::Error) -> Self {
        let context = context.into();
        move |source| AppError::Persistence { context, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Upstream(_) => ErrorKind::Upstream,
            AppError::Persistence { .. } => ErrorKind::Persistence,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Unauthorized(_) => ErrorKind::Unauthorized,
        }
    }

    /// Message safe to hand back to callers. Backend error text stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Persistence { context, .. } => context.clone(),
            other => other.to_string(),
        }
    }
}

/// JSON body returned by every endpoint on failure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    pub success: bool,
    pub kind: ErrorKind,
    pub message: String,
    pub error: String,
}

impl ErrorBody {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            success: false,
            kind,
            message: msg.clone(),
            error: msg,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Upstream(_) | AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.kind(), self.public_message()))
    }
}
