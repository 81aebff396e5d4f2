use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub const COFFEE_NOT_FOUND: &str = "Item not found, please choose a number between 1 and 4";
pub const ORDER_NOT_FOUND: &str = "Order not found";
pub const NOT_PAID: &str = "You have not payed for your coffee";
pub const DELETE_FORBIDDEN: &str = "You do not have permission to delete orders";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payment required: {0}")]
    PaymentRequired(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status();
        let msg = match self {
            AppError::BadRequest(m)
            | AppError::NotFound(m)
            | AppError::PaymentRequired(m)
            | AppError::Forbidden(m) => m,
            AppError::Internal(e) => {
                tracing::error!(error = %e, "request failed");
                "internal error".into()
            }
        };

        let body = serde_json::to_string(&ErrorBody { detail: msg })
            .unwrap_or_else(|_| "{\"detail\":\"internal serialization\"}".into());
        (code, [("content-type", "application/json")], body).into_response()
    }
}
