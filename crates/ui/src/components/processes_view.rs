//! Detail view for a single process

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use process::{format_uptime, get_process_detail, kill_process};

use crate::routes::Route;

/// Process detail component. `id` is the raw path segment captured by the
/// `/processes/:id` route.
#[component]
pub fn Processes(id: String) -> Element {
    let mut refresh_tick = use_signal(|| 0u64);
    let mut status_message = use_signal(|| String::new());

    // Re-run the lookup every 3 seconds so the numbers stay live
    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            refresh_tick += 1;
        }
    });
    // Reading the tick subscribes this component to the refresh loop
    let _generation = *refresh_tick.read();

    match get_process_detail(&id) {
        Ok(detail) => {
            let pid = detail.info.pid;
            let cmdline = detail.cmd.join(" ");
            let parent_cell = match detail.parent_pid {
                Some(ppid) => rsx! {
                    Link {
                        to: Route::Processes { id: ppid.to_string() },
                        class: "process-link",
                        "PID {ppid}"
                    }
                },
                None => rsx! {
                    span { class: "detail-value", "—" }
                },
            };

            rsx! {
                div { class: "process-detail",
                    div { class: "header-box",
                        h1 { class: "header-title", "{detail.info.name}" }
                        div { class: "header-stats",
                            span { "PID {detail.info.pid}" }
                            span { "{detail.status}" }
                        }
                        if !status_message.read().is_empty() {
                            div { class: "status-message", "{status_message}" }
                        }
                    }

                    div { class: "detail-grid",
                        div { class: "detail-item",
                            span { class: "detail-label", "CPU" }
                            span { class: "detail-value", "{detail.info.cpu_usage:.1}%" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Memory" }
                            span { class: "detail-value", "{detail.info.memory_mb:.1} MB" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Running for" }
                            span { class: "detail-value", "{format_uptime(detail.run_time_secs)}" }
                        }
                        div { class: "detail-item",
                            span { class: "detail-label", "Parent" }
                            {parent_cell}
                        }
                        div { class: "detail-item detail-item-wide",
                            span { class: "detail-label", "Executable" }
                            span { class: "detail-value detail-value-path", "{detail.info.exe_path}" }
                        }
                        div { class: "detail-item detail-item-wide",
                            span { class: "detail-label", "Working dir" }
                            span { class: "detail-value detail-value-path", "{detail.cwd}" }
                        }
                        div { class: "detail-item detail-item-wide",
                            span { class: "detail-label", "Command line" }
                            span { class: "detail-value detail-value-path", "{cmdline}" }
                        }
                    }

                    div { class: "controls",
                        Link { to: Route::Main {}, class: "btn btn-primary", "Back to list" }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| {
                                if kill_process(pid) {
                                    status_message.set(format!("Process {} terminated", pid));
                                } else {
                                    status_message.set(format!("Failed to terminate process {}", pid));
                                }
                            },
                            "Kill process"
                        }
                    }
                }
            }
        }
        Err(err) => {
            warn!(%id, "process detail unavailable: {err}");
            rsx! {
                div { class: "process-detail",
                    div { class: "header-box",
                        h1 { class: "header-title", "Process unavailable" }
                        div { class: "header-stats",
                            span { "{err}" }
                        }
                    }
                    div { class: "controls",
                        Link { to: Route::Main {}, class: "btn btn-primary", "Back to list" }
                    }
                }
            }
        }
    }
}
