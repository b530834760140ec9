rust_i18n::i18n!("locales", fallback = "en");

pub mod catalog;
pub mod clients;
pub mod codec;
pub mod content;
pub mod countdown;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod utils;
pub mod views;

use axum::{middleware, Router};

use crate::services::{intake::IntakeService, newsletter::NewsletterService};

#[derive(Clone)]
pub struct AppState {
    pub intake: IntakeService,
    pub newsletter: NewsletterService,
    pub secure_cookies: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::quiz::routes())
        .merge(handlers::results::routes())
        .layer(middleware::from_fn(csrf_check))
        .merge(handlers::api::routes())
        .nest("/static", statics::routes())
        .fallback(rejections::not_found)
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
