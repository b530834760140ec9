use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    codec::QuizData,
    content::{capability_profile, path_result, personalized_insights},
    names,
};

pub enum CaptureState {
    NoError,
    /// Newsletter-only signup without any email.
    MissingEmail,
    InvalidEmail,
    Failed,
}

impl CaptureState {
    /// Whether the visitor has to (re)type an email.
    fn asks_for_email(&self) -> bool {
        matches!(self, CaptureState::MissingEmail | CaptureState::InvalidEmail)
    }
}

pub fn results(token: &str, data: &QuizData, state: CaptureState) -> Markup {
    let result = path_result(data.path);
    let insights = personalized_insights(data.path, &data.answers);
    let profile = capability_profile(data.path, &data.answers);

    html! {
        hgroup {
            p { (t!("results.hello", name = data.name)) }
            h1 { (result.title) }
            p { (result.subtitle) }
        }

        article {
            header { strong { (t!("results.bottleneck")) } }
            p { (result.description) }
            ul."tags" {
                @for tag in result.tags {
                    li { (tag) }
                }
            }
        }

        article {
            header { strong { (t!("results.insights")) } }
            ul {
                @for insight in &insights {
                    li { (insight) }
                }
            }
        }

        article {
            header { strong { (t!("results.profile")) } }
            @for capability in &profile {
                div."capability" {
                    span { (capability.subject) }
                    meter min="0" max="100" value=(capability.value) {}
                    small { (capability.value) }
                }
            }
        }

        article id="capture" {
            h3 { (t!("results.capture_title")) }
            p { (t!("results.capture_body")) }

            @match state {
                CaptureState::NoError => {}
                CaptureState::MissingEmail => {
                    p."error-text" { (t!("results.enter_email")) }
                }
                CaptureState::InvalidEmail => {
                    p."error-text" { (t!("results.invalid_email")) }
                }
                CaptureState::Failed => {
                    p."error-text" { (t!("results.capture_failed")) }
                }
            }

            form hx-post=(names::RESULTS_SUBSCRIBE_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                input type="hidden" name=(names::ID_PARAM) value=(token);
                @if data.email.is_empty() || state.asks_for_email() {
                    label {
                        (t!("quiz.email"))
                        input type="email"
                              name="email"
                              autocomplete="email"
                              placeholder=(t!("quiz.email_placeholder"))
                              value=(data.email);
                    }
                } @else {
                    input type="hidden" name="email" value=(data.email);
                }
                input type="submit" value=(t!("results.capture_button"));
                button type="button"
                       class="secondary outline"
                       hx-post=(names::RESULTS_NEWSLETTER_URL)
                       hx-target="main"
                       hx-swap="innerHTML" {
                    (t!("results.newsletter_button"))
                }
            }
        }
    }
}
