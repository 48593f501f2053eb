//! External process execution with bounded waits.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result, bail};

/// Result of a completed command execution.
#[derive(Debug)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Outcome of a deadline-bounded command execution.
#[derive(Debug)]
pub enum ExecOutcome {
    /// The process exited (successfully or not) within the budget.
    Completed(ExecResult),
    /// The deadline expired; the process was killed. Output captured up to
    /// that point is preserved for diagnostics.
    TimedOut {
        /// Stdout collected before the kill.
        stdout: String,
        /// Stderr collected before the kill.
        stderr: String,
    },
}

/// Run a command and return its output. Fails if the command exits non-zero.
pub fn run(program: &str, args: &[&str]) -> Result<ExecResult> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to execute: {program}"))?;
    let result = ExecResult::from(output);
    if !result.success {
        bail!(
            "{program} failed (exit {}): {}",
            result.code.unwrap_or(-1),
            result.stderr.trim()
        );
    }
    Ok(result)
}

/// A child output pipe drained on a background thread into a shared buffer.
///
/// Draining on a thread keeps a chatty process from blocking on a full
/// pipe while the caller polls for exit. The buffer is snapshotted without
/// joining on the timeout path: a grandchild holding the pipe open must
/// not stall the caller past its deadline.
#[derive(Debug, Default)]
struct Drain {
    buffer: Arc<Mutex<Vec<u8>>>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl Drain {
    fn spawn<R: Read + Send + 'static>(pipe: Option<R>) -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let handle = pipe.map(|mut pipe| {
            let sink = Arc::clone(&buffer);
            std::thread::spawn(move || {
                let mut chunk = [0u8; 8192];
                while let Ok(n) = pipe.read(&mut chunk) {
                    if n == 0 {
                        break;
                    }
                    if let Ok(mut buf) = sink.lock() {
                        buf.extend_from_slice(&chunk[..n]);
                    }
                }
            })
        });
        Self { buffer, handle }
    }

    /// Current buffer contents, without waiting for the pipe to close.
    fn snapshot(&self) -> String {
        self.buffer
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).to_string())
            .unwrap_or_default()
    }

    /// Wait for the pipe to reach EOF, then return everything read.
    fn finish(mut self) -> String {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.snapshot()
    }
}

/// Run a command in `dir` with a deadline.
///
/// On deadline expiry the child is killed and reaped, and the output
/// captured so far is returned.
///
/// # Errors
///
/// Returns an error only if the process could not be spawned or waited on;
/// a non-zero exit or a timeout is reported through [`ExecOutcome`].
pub fn run_in_with_timeout(
    dir: &Path,
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<ExecOutcome> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to execute: {program} in {}", dir.display()))?;

    let stdout = Drain::spawn(child.stdout.take());
    let stderr = Drain::spawn(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait().context("failed to poll child process")? {
            Some(status) => break Some(status),
            None if Instant::now() >= deadline => break None,
            None => std::thread::sleep(Duration::from_millis(50)),
        }
    };

    let Some(status) = status else {
        kill_and_reap(&mut child);
        return Ok(ExecOutcome::TimedOut {
            stdout: stdout.snapshot(),
            stderr: stderr.snapshot(),
        });
    };

    Ok(ExecOutcome::Completed(ExecResult {
        stdout: stdout.finish(),
        stderr: stderr.finish(),
        success: status.success(),
        code: status.code(),
    }))
}

fn kill_and_reap(child: &mut Child) {
    // kill() fails if the child already exited; wait() then reaps either way.
    let _ = child.kill();
    let _ = child.wait();
}

/// Check if a program is available on PATH.
#[must_use]
pub fn available(program: &str) -> bool {
    which::which(program).is_ok()
}
