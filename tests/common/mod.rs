#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use ode_bridge::config::SolverConfig;

pub use ode_bridge_test_utils::{init_tracing, with_timeout};

/// Path to a shell-script backend under `tests/fixtures`, made executable.
pub fn fixture(name: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("fixture should be chmod-able");
    }

    path
}

/// Solver config pointing straight at a fixture backend.
pub fn fixture_config(name: &str, timeout: Duration) -> SolverConfig {
    SolverConfig {
        executable: Some(fixture(name)),
        search_paths: Vec::new(),
        timeout,
    }
}

/// Whether `pid` is still a live (non-zombie) process.
///
/// Orphans killed with their group are reparented to init, which may reap
/// them late, so a zombie counts as gone.
#[cfg(target_os = "linux")]
pub fn process_alive(pid: u32) -> bool {
    match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
        Ok(stat) => stat
            .rsplit_once(')')
            .and_then(|(_, rest)| rest.split_whitespace().next())
            .is_some_and(|state| state != "Z" && state != "X"),
        Err(_) => false,
    }
}

/// Poll [`process_alive`] until it turns false or `within` elapses.
#[cfg(target_os = "linux")]
pub async fn process_gone_within(pid: u32, within: Duration) -> bool {
    let deadline = std::time::Instant::now() + within;
    loop {
        if !process_alive(pid) {
            return true;
        }
        if std::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
