//! UI Components

mod app;
mod main_view;
mod not_found;
mod process_row;
mod processes_view;

pub use app::{App, Layout};
pub use main_view::Main;
pub use not_found::NotFound;
pub use process_row::ProcessRow;
pub use processes_view::Processes;
