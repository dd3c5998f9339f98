//! Shared utilities for commands

use chrono::{DateTime, Local, Utc};
use std::process::{Command, Stdio};

use jetbrains_projects::config;

/// Whether a process whose command line contains `name` is running
///
/// Our own command line (`ls goland ...`) contains the keyword too, so our
/// process and its parent are not counted.
pub fn is_process_running(name: &str) -> bool {
    let output = match Command::new("pgrep")
        .args(["-i", "-f", name])
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("Failed to run pgrep: {}", e);
            return false;
        }
    };

    let own = own_pids();
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.trim().parse::<u32>().ok())
        .any(|pid| !own.contains(&pid))
}

fn own_pids() -> Vec<u32> {
    #[cfg(unix)]
    {
        vec![std::process::id(), std::os::unix::process::parent_id()]
    }

    #[cfg(not(unix))]
    {
        vec![std::process::id()]
    }
}

/// Format a last-opened time in local time, or `-` when unknown
pub fn format_last_opened(last_opened: Option<DateTime<Utc>>) -> String {
    last_opened
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Expand `~` in arguments, since they never pass through a shell
pub fn expand_args(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            if arg == "~" || arg.starts_with("~/") {
                config::expand_tilde(arg).to_string_lossy().into_owned()
            } else {
                arg.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_last_opened_unknown() {
        assert_eq!(format_last_opened(None), "-");
    }

    #[test]
    fn test_format_last_opened_shape() {
        let ts = DateTime::<Utc>::from_timestamp(1_700_000_000, 0);
        let formatted = format_last_opened(ts);
        // Local timezone varies; check the layout only
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
        assert!(formatted.starts_with("2023-11-1"));
    }

    #[test]
    fn test_expand_args() {
        let args = vec!["--line".to_string(), "/abs/path".to_string()];
        assert_eq!(expand_args(&args), args);

        if let Some(home) = dirs::home_dir() {
            let expanded = expand_args(&["~/src/app".to_string()]);
            assert_eq!(expanded, vec![home.join("src/app").to_string_lossy().to_string()]);
        }
    }

    #[test]
    fn test_own_pids_include_current_process() {
        let pids = own_pids();
        assert_eq!(pids[0], std::process::id());
        #[cfg(unix)]
        assert_eq!(pids.len(), 2);
    }

    #[test]
    fn test_unlikely_process_not_running() {
        assert!(!is_process_running("no-such-process-5f1c9e2a"));
    }
}
