use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    codec::QuizData,
    content::learning_path as learning_path_content,
    countdown::{format_remaining, Countdown},
    names,
    views::components::nav_link,
};

/// `now_ms` lets the ticker correct for the browser clock drifting from ours.
pub fn learning_path(token: &str, data: &QuizData, countdown: Countdown, now_ms: i64) -> Markup {
    let content = learning_path_content(data.path);
    let remaining_secs = countdown.remaining(now_ms);

    html! {
        hgroup {
            h1 { (content.headline) }
            p { (content.description_for(&data.name)) }
        }

        div."grid" {
            article {
                header { strong { (t!("learning_path.focus")) } }
                p { (content.focus) }
            }
            article {
                header { strong { (t!("learning_path.goal")) } }
                p { (content.goal) }
            }
        }

        article style="text-align: center;" {
            p { (t!("learning_path.offer_expires")) }
            p id="countdown"
              class="countdown"
              data-started-at=(countdown.started_at_ms)
              data-duration=(countdown.duration_secs)
              data-server-now=(now_ms)
              data-cookie=(names::COUNTDOWN_START_COOKIE_NAME) {
                (format_remaining(remaining_secs))
            }
            a role="button" href=(content.course_url) target="_blank" rel="noopener" {
                (t!("learning_path.cta"))
            }
        }

        p {
            small { (nav_link(&names::results_url(token), html! { (t!("learning_path.back_to_results")) })) }
        }

        script src="/static/countdown.js" {}
    }
}
