use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    catalog::{Question, SEGMENT_QUESTION},
    names,
    quiz::{QuizSession, QuizStep, SessionSnapshot},
    views::components::{nav_link, progress_bar},
};

/// Hidden inputs carrying the session to the next step.
fn session_fields(snapshot: &SessionSnapshot) -> Markup {
    html! {
        input type="hidden" name="step" value=(snapshot.step.as_str());
        input type="hidden" name="first_name" value=(snapshot.first_name);
        input type="hidden" name="email" value=(snapshot.email);
        input type="hidden" name="referral" value=(snapshot.referral);
        @if let Some(path) = snapshot.path {
            input type="hidden" name="path" value=(path.as_str());
        }
        input type="hidden" name="index" value=(snapshot.index);
        input type="hidden" name="answers" value=(snapshot.answers);
    }
}

/// Markup for whatever step the session is on.
pub fn step(session: &QuizSession, rejected: bool) -> Markup {
    match session.step() {
        QuizStep::Name => name_step(session, rejected),
        QuizStep::Segment => segment_step(session),
        QuizStep::Questions => match session.current_question() {
            Some(question) => question_step(session, question),
            None => segment_step(session),
        },
        QuizStep::Loading => loading(session),
    }
}

pub fn name_step(session: &QuizSession, rejected: bool) -> Markup {
    html! {
        article {
            h2 { (t!("quiz.name_title")) }
            p { (t!("quiz.name_intro")) }

            @if rejected {
                p."error-text" { (t!("quiz.name_required")) }
            }

            form hx-post=(names::SUBMIT_NAME_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                input type="hidden" name="step" value=(QuizStep::Name.as_str());
                input type="hidden" name="referral" value=(session.referral());
                label {
                    (t!("quiz.first_name"))
                    input type="text"
                          name="first_name"
                          autocomplete="given-name"
                          placeholder=(t!("quiz.first_name_placeholder"))
                          value=(session.first_name())
                          required;
                }
                label {
                    (t!("quiz.email"))
                    input type="email"
                          name="email"
                          autocomplete="email"
                          placeholder=(t!("quiz.email_placeholder"))
                          value=(session.email())
                          required;
                }
                input type="submit" value=(t!("quiz.continue"));
            }
        }
    }
}

pub fn segment_step(session: &QuizSession) -> Markup {
    let snapshot = session.snapshot();
    html! {
        (progress_bar(session.progress()))
        article {
            h2 { (SEGMENT_QUESTION.prompt.replace("{name}", session.first_name())) }

            form hx-post=(names::SELECT_PATH_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                (session_fields(&snapshot))
                div."option-list" {
                    @for option in SEGMENT_QUESTION.options {
                        button type="submit" name="choice" value=(option.value) class="outline" {
                            (option.label)
                        }
                    }
                }
            }
        }
    }
}

pub fn question_step(session: &QuizSession, question: &Question) -> Markup {
    let snapshot = session.snapshot();
    html! {
        (progress_bar(session.progress()))
        article {
            p style="color: #666; font-size: 0.9rem;" {
                (t!("quiz.question_prefix"))
                strong { (session.current_question_index() + 1) }
                (t!("quiz.question_of"))
                (question_count(session))
            }
            h3 { (question.prompt) }
            p { small { (t!("quiz.select_option")) } }

            form hx-post=(names::SUBMIT_ANSWER_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                (session_fields(&snapshot))
                input type="hidden" name="question" value=(question.id);
                div."option-list" {
                    @for option in question.options {
                        button type="submit" name="value" value=(option.value) class="outline" {
                            (option.label)
                        }
                    }
                }
            }
        }
    }
}

fn question_count(session: &QuizSession) -> usize {
    session
        .selected_path()
        .map(|path| path.questions().len())
        .unwrap_or_default()
}

/// Waits [`names::LOADING_DELAY`] and then swaps in the results page.
pub fn loading(session: &QuizSession) -> Markup {
    let results_url = names::results_url(session.results_id().unwrap_or_default());
    let trigger = format!("load delay:{}s", names::LOADING_DELAY.as_secs());
    html! {
        article style="text-align: center;" {
            h2 { (t!("quiz.loading_title")) }
            div."spinner" {}
            p { (t!("quiz.loading_body", name = session.first_name())) }
            div hx-get=(results_url)
                hx-trigger=(trigger)
                hx-target="main"
                hx-swap="innerHTML"
                hx-push-url="true" {}
            p {
                small { (nav_link(&results_url, html! { (t!("quiz.loading_fallback")) })) }
            }
        }
    }
}
