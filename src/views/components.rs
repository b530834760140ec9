use maud::{html, Markup};
use rust_i18n::t;

use crate::quiz::Progress;

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn progress_bar(progress: Progress) -> Markup {
    let percent = progress.percent();
    html! {
        div role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=(percent) {
            small {
                (t!("quiz.progress", current = progress.current, total = progress.total))
            }
            div."progress-track" {
                div."progress-fill" style=(format!("width: {percent}%;")) {}
            }
        }
    }
}
