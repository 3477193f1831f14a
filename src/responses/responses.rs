use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use queries::{BookingError, Notice};
use serde::Serialize;

#[derive(Serialize, Clone)]
pub struct ErrorResponse {
    pub(crate) status: String,
    pub(crate) message: String,
}

impl ErrorResponse {
    pub fn from_message(message: String) -> Self {
        Self {
            status: "failed".to_string(),
            message,
        }
    }
}

/// Outcome of a form submission plus where the browser should go next.
#[derive(Serialize, Clone)]
pub struct NoticeResponse {
    #[serde(flatten)]
    pub(crate) notice: Notice,
    pub(crate) redirect_to: String,
}

pub fn status_for(err: &BookingError) -> StatusCode {
    match err {
        BookingError::NotFound { .. } => StatusCode::NOT_FOUND,
        BookingError::ReferentialInvalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Response for a failed read.
pub fn error_response(err: BookingError) -> Response {
    let status = status_for(&err);
    match &err {
        BookingError::Persistence(db_err) => error!("Error retrieving data from db: {}", db_err),
        _ => warn!("{}", err),
    }
    (status, Json(ErrorResponse::from_message(err.to_string()))).into_response()
}

pub fn notice_response(status: StatusCode, notice: Notice, redirect_to: String) -> Response {
    (
        status,
        Json(NoticeResponse {
            notice,
            redirect_to,
        }),
    )
        .into_response()
}
