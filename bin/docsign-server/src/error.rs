use std::borrow::Cow;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use secspace_docsign_engine::{LedgerEngineError, request::RequestError};
use secspace_docsign_ledger::LedgerError;

use crate::payload::response::ErrorResponsePayload;

#[derive(Debug, thiserror::Error)]
pub(crate) enum AppError {
    #[error("ledger engine error: {0}")]
    LedgerEngine(Box<LedgerEngineError>),

    #[error("invalid document kind: {0}")]
    InvalidDocumentKind(Cow<'static, str>),

    #[error("invalid file kind: {0}")]
    InvalidFileKind(Cow<'static, str>),

    #[error("invalid status filter: {0}")]
    InvalidStatusFilter(Cow<'static, str>),

    #[error("document not found error")]
    DocumentNotFound,

    #[error("request error: {0}")]
    RequestError(#[from] RequestError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidDocumentKind(_)
            | AppError::InvalidFileKind(_)
            | AppError::InvalidStatusFilter(_)
            | AppError::RequestError(_) => StatusCode::BAD_REQUEST,
            AppError::DocumentNotFound => StatusCode::NOT_FOUND,
            AppError::LedgerEngine(err) => match err.as_ledger_error() {
                Some(LedgerError::NotFound(_) | LedgerError::SignatoryNotFound { .. }) => {
                    StatusCode::NOT_FOUND
                },
                Some(
                    LedgerError::InvalidTransition { .. } | LedgerError::DuplicateDocument(_),
                ) => StatusCode::CONFLICT,
                Some(LedgerError::UnknownAction(_) | LedgerError::Document(_)) => {
                    StatusCode::BAD_REQUEST
                },
                None => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<LedgerEngineError> for AppError {
    fn from(err: LedgerEngineError) -> Self {
        Self::LedgerEngine(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status_code();

        if code.is_server_error() {
            tracing::error!("server error: {self}");
        } else if code == StatusCode::NOT_FOUND {
            tracing::info!("not found: {self}");
        } else {
            tracing::warn!("client error: {self}");
        }

        let body = ErrorResponsePayload::builder().error(self.to_string()).build();

        (code, Json(body)).into_response()
    }
}
