//! ProcView: cross-platform process viewer
//! Desktop application built with Dioxus

use dioxus::desktop::{LogicalSize, WindowBuilder};
use dioxus::logger::tracing::info;
use ui::App;

fn main() {
    dioxus::logger::initialize_default();
    info!(routes = ui::ROUTES.len(), "starting procview");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_disable_context_menu(true)
                .with_window(
                    WindowBuilder::new()
                        .with_title("ProcView")
                        .with_decorations(false)
                        .with_inner_size(LogicalSize::new(1000.0, 680.0))
                        .with_resizable(true),
                ),
        )
        .launch(App);
}
