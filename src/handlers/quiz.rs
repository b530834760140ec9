use axum::{
    extract::{Form, Query, State},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    catalog::Path,
    extractors::IsHtmx,
    names,
    quiz::{QuizSession, SessionSnapshot, Transition},
    views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_page))
        .route(names::SUBMIT_NAME_URL, post(submit_name))
        .route(names::SELECT_PATH_URL, post(select_path))
        .route(names::SUBMIT_ANSWER_URL, post(submit_answer))
}

#[derive(Deserialize)]
struct EntryQuery {
    email: Option<String>,
    #[serde(rename = "ref")]
    referral: Option<String>,
}

async fn quiz_page(IsHtmx(is_htmx): IsHtmx, Query(query): Query<EntryQuery>) -> Markup {
    let session = QuizSession::new(query.email, query.referral);
    views::render(is_htmx, &t!("app.name"), views::quiz::step(&session, false))
}

fn quiz_fragment(session: &QuizSession, rejected: bool) -> Markup {
    views::titled(&t!("app.name"), views::quiz::step(session, rejected))
}

/// The name step posts its visible inputs under the snapshot's own field names.
async fn submit_name(Form(snapshot): Form<SessionSnapshot>) -> Markup {
    let (name, email) = (snapshot.first_name.clone(), snapshot.email.clone());
    let mut session = QuizSession::restore(snapshot);

    let transition = session.submit_name(&name, &email);
    if transition == Transition::Ignored {
        tracing::debug!("name step rejected on step '{}'", session.step().as_str());
    }

    quiz_fragment(&session, transition == Transition::Ignored)
}

#[derive(Deserialize)]
struct SegmentPost {
    #[serde(flatten)]
    session: SessionSnapshot,
    #[serde(default)]
    choice: String,
}

async fn select_path(State(state): State<AppState>, Form(body): Form<SegmentPost>) -> Markup {
    let mut session = QuizSession::restore(body.session);

    let transition = match body.choice.parse::<Path>() {
        Ok(path) => session.select_path(path),
        Err(e) => {
            tracing::debug!("segment choice rejected: {e}");
            Transition::Ignored
        }
    };

    if let Transition::Segmented { lead: Some(lead) } = transition {
        // detached: the visitor never waits on the intake webhook
        let _ = state.intake.notify_detached(lead);
    }

    quiz_fragment(&session, false)
}

#[derive(Deserialize)]
struct AnswerPost {
    #[serde(flatten)]
    session: SessionSnapshot,
    #[serde(default)]
    question: String,
    #[serde(default)]
    value: String,
}

async fn submit_answer(Form(body): Form<AnswerPost>) -> Markup {
    let mut session = QuizSession::restore(body.session);

    match session.answer(&body.question, &body.value) {
        Transition::Completed { results_id } => {
            tracing::info!("quiz completed, results id {results_id}");
        }
        Transition::Ignored => {
            tracing::debug!("answer '{}' to '{}' ignored", body.value, body.question);
        }
        Transition::Advanced | Transition::Segmented { .. } => {}
    }

    quiz_fragment(&session, false)
}
