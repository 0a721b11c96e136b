//! Application Error Types
//!
//! Every storage failure is classified into exactly one of three kinds:
//! `NotFound`, `AlreadyExists` or `Unexpected`. Each carries the chain of
//! operation names it travelled through (`"SpaceService:JoinSpace: SpaceRepo:FindByName"`).
//! Command validation failures use a fourth variant that never originates
//! in a repository.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{op}: not found: {what}")]
    NotFound { op: String, what: String },

    #[error("{op}: already exists: {what}")]
    AlreadyExists { op: String, what: String },

    #[error("{op}: unexpected: {source}")]
    Unexpected {
        op: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Flat classification used by callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    Unexpected,
    Validation,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(op: &str, what: impl Into<String>) -> Self {
        Self::NotFound {
            op: op.to_string(),
            what: what.into(),
        }
    }

    pub fn already_exists(op: &str, what: impl Into<String>) -> Self {
        Self::AlreadyExists {
            op: op.to_string(),
            what: what.into(),
        }
    }

    pub fn unexpected(op: &str, source: sqlx::Error) -> Self {
        Self::Unexpected {
            op: op.to_string(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            AppError::Unexpected { .. } => ErrorKind::Unexpected,
            AppError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Prefix the operation chain with an outer operation name.
    /// The kind never changes.
    pub fn within(self, outer: &str) -> Self {
        match self {
            AppError::NotFound { op, what } => AppError::NotFound {
                op: format!("{outer}: {op}"),
                what,
            },
            AppError::AlreadyExists { op, what } => AppError::AlreadyExists {
                op: format!("{outer}: {op}"),
                what,
            },
            AppError::Unexpected { op, source } => AppError::Unexpected {
                op: format!("{outer}: {op}"),
                source,
            },
            AppError::Validation(msg) => AppError::Validation(msg),
        }
    }

    /// Operation chain, if the error came out of the repository layer.
    pub fn op(&self) -> Option<&str> {
        match self {
            AppError::NotFound { op, .. }
            | AppError::AlreadyExists { op, .. }
            | AppError::Unexpected { op, .. } => Some(op),
            AppError::Validation(_) => None,
        }
    }
}

/// Classify a storage failure.
///
/// - no rows → `NotFound`
/// - unique violation → `AlreadyExists`
/// - foreign-key violation → `NotFound` (the referenced row is missing)
/// - anything else → `Unexpected`
pub fn classify(op: &str, what: impl Into<String>, err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found(op, what),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::already_exists(op, constraint_or(db_err.constraint(), what))
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::not_found(op, constraint_or(db_err.constraint(), what))
        }
        _ => AppError::unexpected(op, err),
    }
}

fn constraint_or(constraint: Option<&str>, what: impl Into<String>) -> String {
    let what = what.into();
    match constraint {
        Some(name) => format!("{what} ({name})"),
        None => what,
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            AppError::Unexpected { .. } => {
                tracing::error!(error = %self, "Unexpected storage error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
