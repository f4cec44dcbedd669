//! Cross-platform process enumeration and inspection
//! Backed entirely by sysinfo so the same code runs on Windows, Linux and macOS

use std::sync::Mutex;

use sysinfo::{
    CpuRefreshKind, MemoryRefreshKind, Pid, ProcessRefreshKind, ProcessesToUpdate, RefreshKind,
    System, UpdateKind,
};
use thiserror::Error;
use tracing::warn;

/// Global system info (CPU usage needs sampling state that persists between calls)
static SYSTEM_INFO: Mutex<Option<System>> = Mutex::new(None);

/// One row of the process list
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_usage: f32,
    pub memory_mb: f64,
    pub exe_path: String,
}

/// Everything the detail view shows for a single process
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessDetail {
    pub info: ProcessInfo,
    pub parent_pid: Option<u32>,
    pub status: String,
    pub run_time_secs: u64,
    pub cmd: Vec<String>,
    pub cwd: String,
}

/// System statistics
#[derive(Clone, Debug, Default)]
pub struct SystemStats {
    pub total_memory_gb: f64,
    pub used_memory_gb: f64,
    pub memory_percent: f64,
    pub cpu_usage: f32,
    pub process_count: usize,
    pub uptime_seconds: u64,
}

/// Errors from process lookups
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProcessError {
    #[error("'{0}' is not a valid process id")]
    InvalidPid(String),
    #[error("no running process with pid {0}")]
    NotFound(u32),
}

fn process_refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::new()
        .with_cpu()
        .with_memory()
        .with_exe(UpdateKind::OnlyIfNotSet)
        .with_cmd(UpdateKind::OnlyIfNotSet)
        .with_cwd(UpdateKind::OnlyIfNotSet)
}

fn info_from(pid: Pid, process: &sysinfo::Process) -> ProcessInfo {
    ProcessInfo {
        pid: pid.as_u32(),
        name: process.name().to_string_lossy().into_owned(),
        cpu_usage: process.cpu_usage(),
        memory_mb: process.memory() as f64 / (1024.0 * 1024.0),
        exe_path: process
            .exe()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    }
}

/// Get the list of running processes
pub fn get_processes() -> Vec<ProcessInfo> {
    let mut sys_guard = SYSTEM_INFO.lock().unwrap();
    let sys = sys_guard.get_or_insert_with(|| {
        System::new_with_specifics(RefreshKind::new().with_processes(process_refresh_kind()))
    });

    sys.refresh_processes_specifics(ProcessesToUpdate::All, process_refresh_kind());

    sys.processes()
        .iter()
        .map(|(pid, process)| info_from(*pid, process))
        .collect()
}

/// Look up a single process by the raw id segment from the URL.
///
/// The caller hands over the captured path segment as-is; parsing and
/// validation happen here, not in the view.
pub fn get_process_detail(id: &str) -> Result<ProcessDetail, ProcessError> {
    let pid: u32 = id
        .parse()
        .map_err(|_| ProcessError::InvalidPid(id.to_string()))?;

    let mut sys_guard = SYSTEM_INFO.lock().unwrap();
    let sys = sys_guard.get_or_insert_with(|| {
        System::new_with_specifics(RefreshKind::new().with_processes(process_refresh_kind()))
    });

    let sys_pid = Pid::from_u32(pid);
    sys.refresh_processes_specifics(ProcessesToUpdate::Some(&[sys_pid]), process_refresh_kind());

    let process = sys.process(sys_pid).ok_or_else(|| {
        warn!(pid, "process lookup failed");
        ProcessError::NotFound(pid)
    })?;

    Ok(ProcessDetail {
        info: info_from(sys_pid, process),
        parent_pid: process.parent().map(|p| p.as_u32()),
        status: process.status().to_string(),
        run_time_secs: process.run_time(),
        cmd: process
            .cmd()
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect(),
        cwd: process
            .cwd()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    })
}

/// Get system statistics
pub fn get_system_stats() -> SystemStats {
    let mut sys_guard = SYSTEM_INFO.lock().unwrap();
    let sys = sys_guard.get_or_insert_with(|| {
        System::new_with_specifics(
            RefreshKind::new()
                .with_memory(MemoryRefreshKind::new().with_ram())
                .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                .with_processes(process_refresh_kind()),
        )
    });

    sys.refresh_memory();
    sys.refresh_cpu_all();

    let total_memory = sys.total_memory() as f64 / (1024.0 * 1024.0 * 1024.0);
    let used_memory = sys.used_memory() as f64 / (1024.0 * 1024.0 * 1024.0);

    SystemStats {
        total_memory_gb: total_memory,
        used_memory_gb: used_memory,
        memory_percent: if total_memory > 0.0 {
            (used_memory / total_memory) * 100.0
        } else {
            0.0
        },
        cpu_usage: sys.global_cpu_usage(),
        process_count: sys.processes().len(),
        uptime_seconds: System::uptime(),
    }
}

/// Ask the OS to terminate a process by PID.
/// Returns true if the signal was delivered, false otherwise.
pub fn kill_process(pid: u32) -> bool {
    let mut sys_guard = SYSTEM_INFO.lock().unwrap();
    let sys = sys_guard.get_or_insert_with(|| {
        System::new_with_specifics(RefreshKind::new().with_processes(process_refresh_kind()))
    });

    let sys_pid = Pid::from_u32(pid);
    sys.refresh_processes_specifics(ProcessesToUpdate::Some(&[sys_pid]), process_refresh_kind());

    match sys.process(sys_pid) {
        Some(process) => process.kill(),
        None => {
            warn!(pid, "kill requested for a process that is already gone");
            false
        }
    }
}

/// Format uptime in human readable format
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(60), "1m");
        assert_eq!(format_uptime(3_660), "1h 1m");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[test]
    fn process_list_contains_current_process() {
        let own_pid = std::process::id();
        let processes = get_processes();
        assert!(!processes.is_empty());
        assert!(processes.iter().any(|p| p.pid == own_pid));
    }

    #[test]
    fn detail_lookup_for_current_process() {
        let id = std::process::id().to_string();
        let detail = get_process_detail(&id).unwrap();
        assert_eq!(detail.info.pid, std::process::id());
        assert!(!detail.info.name.is_empty());
    }

    #[test]
    fn detail_lookup_rejects_garbage_ids() {
        assert_eq!(
            get_process_detail("forty-two"),
            Err(ProcessError::InvalidPid("forty-two".to_string()))
        );
        assert_eq!(
            get_process_detail(""),
            Err(ProcessError::InvalidPid(String::new()))
        );
    }

    #[test]
    fn detail_lookup_reports_missing_process() {
        // pid 4294967294 is above every real pid range in practice
        assert_eq!(
            get_process_detail("4294967294"),
            Err(ProcessError::NotFound(4_294_967_294))
        );
    }

    #[test]
    fn system_stats_are_sane() {
        let stats = get_system_stats();
        assert!(stats.total_memory_gb > 0.0);
        assert!(stats.process_count > 0);
        assert!(stats.memory_percent >= 0.0 && stats.memory_percent <= 100.0);
    }
}
