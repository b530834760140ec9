use axum::{
    extract::{Form, Query, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    codec::{decode_quiz_data, QuizData},
    content::path_result,
    countdown::Countdown,
    extractors::IsHtmx,
    names,
    rejections::{AppError, ResultExt},
    services::newsletter::{SubscribeOutcome, SubscribeRequest},
    utils,
    views::{self, results::CaptureState},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::RESULTS_URL, get(results_page))
        .route(names::RESULTS_SUBSCRIBE_URL, post(subscribe))
        .route(names::RESULTS_NEWSLETTER_URL, post(newsletter_only))
        .route(names::LEARNING_PATH_URL, get(learning_path_page))
}

#[derive(Deserialize)]
struct TokenQuery {
    #[serde(default)]
    id: String,
}

async fn results_page(IsHtmx(is_htmx): IsHtmx, Query(query): Query<TokenQuery>) -> Markup {
    let data = decode_quiz_data(&query.id);
    views::render(
        is_htmx,
        &t!("results.title"),
        views::results::results(&query.id, &data, CaptureState::NoError),
    )
}

#[derive(Deserialize)]
struct CapturePost {
    #[serde(default)]
    id: String,
    #[serde(default)]
    email: String,
}

fn subscribe_request(data: &QuizData, email: &str) -> SubscribeRequest {
    let result = path_result(data.path);
    SubscribeRequest {
        email: email.to_string(),
        first_name: data.name.clone(),
        path: data.path.as_str().to_string(),
        result: result.subtitle.to_string(),
        bottleneck_title: Some(result.title.to_string()),
        answers: Some(data.answers.clone()),
    }
}

fn hx_redirect(target: &str) -> Result<Response, AppError> {
    let mut headers = HeaderMap::new();
    let target = HeaderValue::from_str(target).reject("could not build redirect header")?;
    headers.insert("HX-Redirect", target);
    Ok((headers, "").into_response())
}

/// Email typed on the results page, or the one carried by the token.
fn capture_email<'a>(typed: &'a str, data: &'a QuizData) -> &'a str {
    match typed.trim() {
        "" => data.email.as_str(),
        typed => typed,
    }
}

/// Subscribes the visitor; `None` on success, otherwise the error to show.
async fn try_subscribe(state: &AppState, data: &QuizData, email: &str) -> Option<CaptureState> {
    match state.newsletter.subscribe(&subscribe_request(data, email)).await {
        Ok(outcome) if outcome.is_success() => None,
        Ok(SubscribeOutcome::MissingFields | SubscribeOutcome::InvalidEmail) => {
            Some(CaptureState::InvalidEmail)
        }
        Ok(_) => Some(CaptureState::Failed),
        Err(e) => {
            tracing::error!("could not subscribe {email}: {e}");
            Some(CaptureState::Failed)
        }
    }
}

fn capture_page(token: &str, data: QuizData, email: &str, capture_state: CaptureState) -> Response {
    let data = QuizData {
        email: email.to_string(),
        ..data
    };
    views::titled(
        &t!("results.title"),
        views::results::results(token, &data, capture_state),
    )
    .into_response()
}

/// Subscribes when an email is known, then hands off to the learning path.
async fn subscribe(
    State(state): State<AppState>,
    Form(body): Form<CapturePost>,
) -> Result<Response, AppError> {
    let data = decode_quiz_data(&body.id);
    let email = capture_email(&body.email, &data);

    if email.is_empty() {
        tracing::debug!("no email for results {}, skipping subscription", body.id);
    } else if let Some(capture_state) = try_subscribe(&state, &data, email).await {
        let email = email.to_string();
        return Ok(capture_page(&body.id, data, &email, capture_state));
    }

    hx_redirect(&names::learning_path_url(&body.id))
}

/// Subscribes and sends the visitor to the newsletter welcome page.
async fn newsletter_only(
    State(state): State<AppState>,
    Form(body): Form<CapturePost>,
) -> Result<Response, AppError> {
    let data = decode_quiz_data(&body.id);
    let email = capture_email(&body.email, &data).to_string();

    if email.is_empty() {
        return Ok(capture_page(&body.id, data, "", CaptureState::MissingEmail));
    }
    if let Some(capture_state) = try_subscribe(&state, &data, &email).await {
        return Ok(capture_page(&body.id, data, &email, capture_state));
    }

    hx_redirect(names::WELCOME_URL)
}

async fn learning_path_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    jar: CookieJar,
    Query(query): Query<TokenQuery>,
) -> Result<Response, AppError> {
    let data = decode_quiz_data(&query.id);

    let now = utils::now_ms();
    let (countdown, created) = Countdown::from_stored(
        jar.get(names::COUNTDOWN_START_COOKIE_NAME).map(|c| c.value()),
        jar.get(names::COUNTDOWN_DURATION_COOKIE_NAME).map(|c| c.value()),
        now,
    );
    let (countdown, _, restarted) = countdown.tick(now);

    let mut headers = HeaderMap::new();
    if created || restarted {
        let started = utils::session_cookie(
            names::COUNTDOWN_START_COOKIE_NAME,
            &countdown.started_at_ms.to_string(),
            state.secure_cookies,
        )
        .reject("could not build countdown cookie")?;
        let duration = utils::session_cookie(
            names::COUNTDOWN_DURATION_COOKIE_NAME,
            &countdown.duration_secs.to_string(),
            state.secure_cookies,
        )
        .reject("could not build countdown cookie")?;
        headers.append(SET_COOKIE, started);
        headers.append(SET_COOKIE, duration);
    }

    let body = views::render(
        is_htmx,
        &t!("learning_path.title"),
        views::learning_path::learning_path(&query.id, &data, countdown, now),
    );
    Ok((headers, body).into_response())
}
