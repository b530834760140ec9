//! JSON endpoints mirroring the outbound collaborators for client-side callers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    names,
    quiz::Lead,
    services::{
        intake::IntakeOutcome,
        newsletter::{SubscribeOutcome, SubscribeRequest},
    },
    AppState,
};

const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
const CONFIGURATION_ERROR: &str = "Server configuration error";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::API_INTAKE_URL, post(intake))
        .route(names::API_SUBSCRIBE_URL, post(subscribe))
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[derive(Deserialize)]
struct IntakePost {
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    answer: String,
}

async fn intake(State(state): State<AppState>, Json(body): Json<IntakePost>) -> Response {
    let lead = Lead {
        email: body.email,
        name: body.name,
        answer: body.answer,
    };

    match state.intake.forward(&lead).await {
        Ok(IntakeOutcome::Accepted) => Json(json!({ "success": true })).into_response(),
        Ok(IntakeOutcome::MissingFields) => error(
            StatusCode::BAD_REQUEST,
            "email, name, and answer are required",
        ),
        Ok(IntakeOutcome::Disabled) => {
            tracing::error!("intake webhook is not configured");
            error(StatusCode::INTERNAL_SERVER_ERROR, CONFIGURATION_ERROR)
        }
        Ok(IntakeOutcome::Rejected) => error(StatusCode::BAD_GATEWAY, "Intake request failed"),
        Err(e) => {
            tracing::error!("intake error: {e}");
            error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
        }
    }
}

async fn subscribe(
    State(state): State<AppState>,
    Json(body): Json<SubscribeRequest>,
) -> Response {
    match state.newsletter.subscribe(&body).await {
        Ok(SubscribeOutcome::Subscribed) => Json(json!({ "success": true })).into_response(),
        Ok(SubscribeOutcome::AlreadySubscribed) => {
            Json(json!({ "success": true, "message": "Already subscribed" })).into_response()
        }
        Ok(SubscribeOutcome::MissingFields) => error(
            StatusCode::BAD_REQUEST,
            "Email and first name are required",
        ),
        Ok(SubscribeOutcome::InvalidEmail) => {
            error(StatusCode::BAD_REQUEST, "Invalid email format")
        }
        Ok(SubscribeOutcome::NotConfigured) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, CONFIGURATION_ERROR)
        }
        Ok(SubscribeOutcome::Failed) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to subscribe. Please try again.",
        ),
        Err(e) => {
            tracing::error!("subscribe error: {e}");
            error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
        }
    }
}
