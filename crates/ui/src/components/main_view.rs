//! Landing view: the searchable process list

use dioxus::prelude::*;
use process::{get_processes, ProcessInfo};

use super::ProcessRow;
use crate::state::{SortColumn, SortOrder};

/// Main view component
#[component]
pub fn Main() -> Element {
    let mut processes = use_signal(|| get_processes());
    let mut search_query = use_signal(|| String::new());
    let mut sort_column = use_signal(|| SortColumn::Memory);
    let mut sort_order = use_signal(|| SortOrder::Descending);
    let mut auto_refresh = use_signal(|| true);

    // Auto-refresh every 3 seconds
    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            if *auto_refresh.read() {
                processes.set(get_processes());
            }
        }
    });

    let max_memory = processes
        .read()
        .iter()
        .map(|p| p.memory_mb)
        .fold(0.0_f64, |a, b| a.max(b));

    let mut filtered_processes: Vec<ProcessInfo> = processes
        .read()
        .iter()
        .filter(|p| {
            let query = search_query.read().to_lowercase();
            if query.is_empty() {
                true
            } else {
                p.name.to_lowercase().contains(&query)
                    || p.pid.to_string().contains(&query)
                    || p.exe_path.to_lowercase().contains(&query)
            }
        })
        .cloned()
        .collect();

    filtered_processes.sort_by(|a, b| {
        let cmp = match *sort_column.read() {
            SortColumn::Pid => a.pid.cmp(&b.pid),
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Memory => a
                .memory_mb
                .partial_cmp(&b.memory_mb)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortColumn::Cpu => a
                .cpu_usage
                .partial_cmp(&b.cpu_usage)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        match *sort_order.read() {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });

    let process_count = filtered_processes.len();
    let total_memory: f64 = filtered_processes.iter().map(|p| p.memory_mb).sum();

    let current_sort_col = *sort_column.read();
    let current_sort_ord = *sort_order.read();

    let sort_indicator = |column: SortColumn| -> &'static str {
        if current_sort_col == column {
            match current_sort_ord {
                SortOrder::Ascending => " ▲",
                SortOrder::Descending => " ▼",
            }
        } else {
            ""
        }
    };
    let pid_indicator = sort_indicator(SortColumn::Pid);
    let name_indicator = sort_indicator(SortColumn::Name);
    let cpu_indicator = sort_indicator(SortColumn::Cpu);
    let memory_indicator = sort_indicator(SortColumn::Memory);

    let mut toggle_sort = move |column: SortColumn| {
        if *sort_column.read() == column {
            let flipped = match *sort_order.read() {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
            sort_order.set(flipped);
        } else {
            sort_column.set(column);
            sort_order.set(SortOrder::Descending);
        }
    };

    rsx! {
        div {
            class: "process-list",

            // Header
            div { class: "header-box",
                h1 { class: "header-title", "Running Processes" }
                div { class: "header-stats",
                    span { "Showing: {process_count} processes" }
                    span { "Memory: {total_memory:.1} MB" }
                    span { class: "header-hint", "Click a row for details" }
                }
            }

            // Controls
            div { class: "controls",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search by name, PID, or path...",
                    value: "{search_query}",
                    oninput: move |e| search_query.set(e.value().clone()),
                }

                label { class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: *auto_refresh.read(),
                        onchange: move |e| auto_refresh.set(e.checked()),
                    }
                    span { "Auto-refresh" }
                }

                button {
                    class: "btn btn-primary",
                    onclick: move |_| processes.set(get_processes()),
                    "Refresh"
                }
            }

            // Process table
            div { class: "table-container",
                table { class: "process-table",
                    thead {
                        tr {
                            th {
                                class: "table-header",
                                onclick: move |_| toggle_sort(SortColumn::Pid),
                                "PID{pid_indicator}"
                            }
                            th {
                                class: "table-header",
                                onclick: move |_| toggle_sort(SortColumn::Name),
                                "Name{name_indicator}"
                            }
                            th {
                                class: "table-header",
                                onclick: move |_| toggle_sort(SortColumn::Cpu),
                                "CPU{cpu_indicator}"
                            }
                            th {
                                class: "table-header",
                                onclick: move |_| toggle_sort(SortColumn::Memory),
                                "Memory{memory_indicator}"
                            }
                            th { class: "table-header", "Path" }
                        }
                    }
                    tbody {
                        for process in filtered_processes {
                            ProcessRow {
                                key: "{process.pid}",
                                process: process.clone(),
                                max_memory,
                            }
                        }
                    }
                }
            }
        }
    }
}
