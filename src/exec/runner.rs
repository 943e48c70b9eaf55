// src/exec/runner.rs

//! One-shot backend process runner.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{BridgeError, Result};

/// Captured result of a backend process that exited with status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the executable with no arguments and capture its output.
///
/// See [`run_command`] for the timeout and exit-code semantics.
pub async fn run(executable: &Path, timeout: Duration) -> Result<RawOutput> {
    run_command(Command::new(executable), timeout).await
}

/// Run a prepared command, waiting at most `timeout` for it to exit and for
/// its stdout/stderr to close.
///
/// - On unix the child leads its own process group. On timeout the whole
///   group is killed, then the child is reaped before `Timeout` is returned,
///   so neither the backend nor anything it forked is left behind.
/// - A non-zero exit (or death by signal, reported as `-1`) becomes
///   `ProcessFailure` carrying the captured stderr.
/// - No retry.
pub async fn run_command(mut cmd: Command, timeout: Duration) -> Result<RawOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    #[cfg(unix)]
    cmd.process_group(0);

    let program = cmd.as_std().get_program().to_string_lossy().into_owned();
    let mut child = cmd.spawn()?;
    let pid = child.id();

    info!(
        program = %program,
        ?pid,
        timeout_secs = timeout.as_secs_f64(),
        "starting backend process"
    );

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let collected = tokio::time::timeout(timeout, async {
        let (status, out, err) =
            tokio::join!(child.wait(), read_stream(stdout), read_stream(stderr));
        Ok::<_, std::io::Error>((status?, out?, err?))
    })
    .await;

    let (status, stdout, stderr) = match collected {
        Ok(res) => res?,
        Err(_elapsed) => {
            warn!(
                program = %program,
                ?pid,
                "backend exceeded timeout; killing process group"
            );
            if let Err(e) = kill_process_group(pid) {
                warn!(
                    program = %program,
                    ?pid,
                    error = %e,
                    "failed to kill backend process group"
                );
            }
            if let Err(e) = child.kill().await {
                warn!(program = %program, ?pid, error = %e, "failed to kill backend process");
            }
            return Err(BridgeError::Timeout { timeout });
        }
    };

    for line in stderr.lines() {
        debug!(program = %program, "stderr: {}", line);
    }

    let exit_code = status.code().unwrap_or(-1);
    info!(
        program = %program,
        exit_code,
        success = status.success(),
        stdout_bytes = stdout.len(),
        "backend process exited"
    );

    if !status.success() {
        return Err(BridgeError::ProcessFailure { exit_code, stderr });
    }

    Ok(RawOutput {
        stdout,
        stderr,
        exit_code,
    })
}

#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) -> std::io::Result<()> {
    let Some(pid) = pid else {
        return Ok(());
    };
    let ret = unsafe { libc::killpg(pid as libc::pid_t, libc::SIGKILL) };
    if ret != 0 {
        let err = std::io::Error::last_os_error();
        // ESRCH: every member already exited.
        if err.raw_os_error() != Some(libc::ESRCH) {
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) -> std::io::Result<()> {
    Ok(())
}

async fn read_stream<R>(stream: Option<R>) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut s) = stream {
        s.read_to_end(&mut buf).await?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut c = Command::new("sh");
        c.arg("-c").arg(script);
        c
    }

    #[tokio::test]
    async fn captures_stdout_and_stderr() {
        let script = "echo 't,y'; echo '0.0,1.0'; echo warn >&2";
        let out = run_command(sh(script), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(out.stdout, "t,y\n0.0,1.0\n");
        assert_eq!(out.stderr, "warn\n");
        assert_eq!(out.exit_code, 0);
    }

    #[tokio::test]
    async fn non_zero_exit_is_process_failure() {
        let err = run_command(sh("echo boom >&2; exit 7"), Duration::from_secs(5))
            .await
            .unwrap_err();
        match err {
            BridgeError::ProcessFailure { exit_code, stderr } => {
                assert_eq!(exit_code, 7);
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("expected ProcessFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn hanging_process_times_out() {
        let started = std::time::Instant::now();
        let err = run_command(sh("exec sleep 30"), Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn timeout_does_not_wait_for_forked_children() {
        let started = std::time::Instant::now();
        let err = run_command(sh("sleep 30 & wait"), Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn missing_program_is_io_error() {
        let err = run(Path::new("/definitely/not/here/ode_solver"), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::IoError(_)));
    }
}
