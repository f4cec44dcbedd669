//! Process row component

use dioxus::prelude::*;
use process::ProcessInfo;

use crate::routes::Route;

/// One row of the process table. The name cell links to the detail route;
/// the pid travels as the `:id` segment.
#[component]
pub fn ProcessRow(process: ProcessInfo, max_memory: f64) -> Element {
    let memory_percent = if max_memory > 0.0 {
        process.memory_mb / max_memory * 100.0
    } else {
        0.0
    };
    let exe_path = process.exe_path.clone();
    let exe_filename = std::path::Path::new(&process.exe_path)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| process.exe_path.clone());

    // CPU usage color based on value
    let cpu_class = if process.cpu_usage > 50.0 {
        "cpu-high"
    } else if process.cpu_usage > 25.0 {
        "cpu-medium"
    } else {
        "cpu-low"
    };

    rsx! {
        tr {
            class: "process-row",
            td { class: "cell cell-pid", "{process.pid}" }
            td { class: "cell cell-name",
                Link {
                    to: Route::Processes { id: process.pid.to_string() },
                    class: "process-link",
                    "{process.name}"
                }
            }
            td { class: "cell cell-cpu {cpu_class}", "{process.cpu_usage:.1}%" }
            td { class: "cell cell-memory",
                div { class: "memory-bar-container",
                    div { class: "memory-bar-bg",
                        div {
                            class: "memory-bar-fill",
                            style: "width: {memory_percent}%",
                        }
                    }
                    span { class: "memory-text", "{process.memory_mb:.1} MB" }
                }
            }
            td { class: "cell cell-path", title: "{exe_path}", "{exe_filename}" }
        }
    }
}
