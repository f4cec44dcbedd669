//! Root application component and shared layout

use dioxus::prelude::*;
use process::{format_uptime, get_system_stats};

use crate::routes::Route;
use crate::styles::CUSTOM_STYLES;

/// Root component. Hands the route table to the router; the launcher in the
/// binary crate is the only consumer.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all routes
#[component]
pub fn Layout() -> Element {
    let mut system_stats = use_signal(|| get_system_stats());

    // Refresh the stats bar every 3 seconds
    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            system_stats.set(get_system_stats());
        }
    });

    let stats = system_stats.read().clone();
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");

    rsx! {
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            // Custom title bar
            div { class: "title-bar",
                div {
                    class: "title-bar-drag",
                    onmousedown: move |_| {
                        let window = dioxus::desktop::window();
                        let _ = window.drag_window();
                    },
                    span { class: "title-text", "ProcView | Process Viewer v{version}" }
                }
                div { class: "title-bar-buttons",
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_minimized(true);
                        },
                        "─"
                    }
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_maximized(!window.is_maximized());
                        },
                        "□"
                    }
                    button {
                        class: "title-btn title-btn-close",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.close();
                        },
                        "✕"
                    }
                }
            }

            // System stats bar
            div { class: "stats-bar",
                div { class: "stat-item",
                    span { class: "stat-label", "CPU" }
                    div { class: "stat-bar",
                        div {
                            class: "stat-bar-fill stat-bar-cpu",
                            style: "width: {stats.cpu_usage}%",
                        }
                    }
                    span { class: "stat-value stat-value-cyan", "{stats.cpu_usage:.1}%" }
                }

                div { class: "stat-item",
                    span { class: "stat-label", "RAM" }
                    div { class: "stat-bar",
                        div {
                            class: "stat-bar-fill stat-bar-ram",
                            style: "width: {stats.memory_percent}%",
                        }
                    }
                    span { class: "stat-value stat-value-purple", "{stats.used_memory_gb:.1}/{stats.total_memory_gb:.1} GB" }
                }

                div { class: "stat-item",
                    span { class: "stat-label", "Uptime" }
                    span { class: "stat-value stat-value-green", "{format_uptime(stats.uptime_seconds)}" }
                }

                div { class: "stat-item stat-item-right",
                    span { class: "stat-label", "Processes" }
                    span { class: "stat-value stat-value-yellow", "{stats.process_count}" }
                }
            }

            // Routed content
            div { class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}
