use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

/// Failure of a page handler, rendered as a small error page.
#[derive(Debug)]
pub enum AppError {
    /// The request itself was malformed.
    Input(&'static str),
    /// Something on our side failed; details are logged, not shown.
    Internal(&'static str),
    NotFound,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::Input(_) => "INPUT_ERROR",
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
            AppError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(context) => tracing::error!("internal error: {context}"),
            AppError::Input(context) => tracing::debug!("input error: {context}"),
            AppError::NotFound => {}
        }
        (self.status(), error_page(self.message())).into_response()
    }
}

/// Maps any error into an [`AppError`], logging the source.
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, AppError>;
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal(context)
        })
    }

    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::debug!("{context}: {e}");
            AppError::Input(context)
        })
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
        },
    )
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_maps_to_internal() {
        let result: Result<(), &str> = Err("boom");
        let err = result.reject("could not do the thing").unwrap_err();
        assert!(matches!(err, AppError::Internal("could not do the thing")));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn reject_input_maps_to_bad_request() {
        let result: Result<(), &str> = Err("nope");
        let err = result.reject_input("bad form").unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
