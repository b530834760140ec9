use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";
const PICO_HREF: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href=(PICO_HREF);
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_SRC) {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::QUIZ_URL) {
                            strong { (t!("app.name")) }
                        }
                    }
                }
                ul {
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";
            meta name="description" content=(t!("app.tagline"));

            (css())
            (js())
            (icon())

            title { (title) " - " (t!("app.name")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - " (t!("app.name")) }
        (body)
    }
}
