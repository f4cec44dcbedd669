//! UI library for ProcView
//! Contains the route table and Dioxus components with custom CSS (offline)

mod components;
mod routes;
mod state;
mod styles;

pub use components::App;
pub use routes::{Route, RouteDef, ROUTES};
pub use styles::CUSTOM_STYLES;
