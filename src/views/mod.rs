pub mod components;
pub mod layout;
pub mod learning_path;
pub mod quiz;
pub mod results;

pub use layout::{page, titled};

use maud::Markup;

/// Full page for a plain navigation, fragment for an htmx swap into `main`.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
