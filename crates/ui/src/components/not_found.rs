//! Explicit fallback view for unmatched paths

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::routes::Route;

/// Rendered by the catch-all route; `segments` holds the unmatched path
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    info!(%path, "navigation hit the fallback route");

    rsx! {
        div { class: "not-found",
            h1 { class: "header-title", "Page not found" }
            p { class: "not-found-path", "No route matches {path}" }
            Link { to: Route::Main {}, class: "btn btn-primary", "Back to main" }
        }
    }
}
