use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::utils::validate::ValidationError;

pub(crate) const INTERNAL_MESSAGE: &str = "Erro interno";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Internal server error")]
    Internal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    Auth,
    Validation,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ErrorKind::Auth => "AuthError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Internal => "InternalError",
        }
    }

    pub(crate) fn code(self) -> u16 {
        self.status().as_u16()
    }

    pub(crate) fn status(self) -> StatusCode {
        match self {
            ErrorKind::Auth => StatusCode::UNAUTHORIZED,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Error {
    pub(crate) fn auth(message: impl Into<String>) -> Self {
        Error::Auth(message.into())
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }

    pub(crate) fn kind(&self) -> ErrorKind {
        match self {
            Error::Auth(_) => ErrorKind::Auth,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Sql(_) | Error::Jwt(_) | Error::Bcrypt(_) | Error::Internal => {
                ErrorKind::Internal
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let kind = self.kind();

        match kind {
            ErrorKind::Internal => tracing::error!("{:?}", self),
            _ => tracing::warn!(kind = kind.name(), code = kind.code(), "{}", self),
        }

        let body = match self {
            Error::Auth(message) | Error::NotFound(message) => json!({ "message": message }),
            Error::Validation(err) => json!({
                "message": kind.name(),
                "errors": err.issues,
            }),
            Error::Sql(_) | Error::Jwt(_) | Error::Bcrypt(_) | Error::Internal => {
                json!({ "error": INTERNAL_MESSAGE })
            }
        };

        (kind.status(), Json(body)).into_response()
    }
}

pub(crate) fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_MESSAGE })),
    )
        .into_response()
}

pub(crate) fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };

    tracing::error!("Handler panicked: {}", detail);

    internal_error_response()
}
