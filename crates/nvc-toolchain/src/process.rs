//! Child process execution with combined output capture.

use std::ffi::OsStr;
use std::io::{PipeReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::error::ToolchainError;

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// How long to keep draining the pipe once the child is gone. Grandchildren
/// that inherited the write end can hold it open indefinitely.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

type SharedBuf = Arc<Mutex<Vec<u8>>>;

/// Exit status and interleaved stdout/stderr of a finished process.
#[derive(Debug)]
pub struct Captured {
    pub status: ExitStatus,
    pub output: String,
}

/// Run `program` to completion with stdout and stderr sharing one pipe.
///
/// With a `timeout` the child is killed once it expires and the call fails
/// with [`ToolchainError::Timeout`]. Output still buffered after exit is
/// drained for a short grace period. Without a timeout it blocks until the
/// pipe closes.
pub fn run_captured<I, S>(
    program: &OsStr,
    args: I,
    timeout: Option<Duration>,
) -> Result<Captured, ToolchainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program_name = program.to_string_lossy().into_owned();
    let (mut reader, writer) = std::io::pipe()?;

    // The builder owns the parent's write ends; it is dropped at the end of
    // this statement so the reader sees EOF once the child exits.
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer)
        .spawn()
        .map_err(|source| ToolchainError::Spawn {
            program: program_name.clone(),
            source,
        })?;

    let Some(limit) = timeout else {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let status = child.wait()?;
        return Ok(Captured {
            status,
            output: String::from_utf8_lossy(&buf).into_owned(),
        });
    };

    let buffer = SharedBuf::default();
    let done = spawn_reader(reader, Arc::clone(&buffer));
    let timed_out = wait_with_deadline(&mut child, limit)?;
    let output = String::from_utf8_lossy(&drain(&done, &buffer, DRAIN_GRACE)?).into_owned();

    if timed_out {
        return Err(ToolchainError::Timeout {
            program: program_name,
            after: limit,
            output,
        });
    }
    Ok(Captured {
        status: child.wait()?,
        output,
    })
}

/// Copy the pipe into `buffer` chunk by chunk so a partial capture is
/// readable before EOF. The receiver gets the final read result.
fn spawn_reader(mut reader: PipeReader, buffer: SharedBuf) -> Receiver<std::io::Result<()>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut chunk = [0_u8; 8192];
        let result = loop {
            match reader.read(&mut chunk) {
                Ok(0) => break Ok(()),
                Ok(n) => buffer
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .extend_from_slice(&chunk[..n]),
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => {}
                Err(error) => break Err(error),
            }
        };
        let _ = tx.send(result);
    });
    rx
}

/// Wait up to `grace` for the reader to hit EOF, then take what it captured.
fn drain(
    done: &Receiver<std::io::Result<()>>,
    buffer: &SharedBuf,
    grace: Duration,
) -> Result<Vec<u8>, ToolchainError> {
    match done.recv_timeout(grace) {
        Ok(result) => result?,
        Err(RecvTimeoutError::Timeout) => {
            tracing::warn!(?grace, "output pipe still open after exit; returning partial output");
        }
        Err(RecvTimeoutError::Disconnected) => {
            return Err(ToolchainError::Io(std::io::Error::other(
                "output reader thread panicked",
            )));
        }
    }
    let captured = buffer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    Ok(captured)
}

/// Poll `child` until it exits or `limit` passes. Returns true on timeout.
fn wait_with_deadline(child: &mut Child, limit: Duration) -> Result<bool, ToolchainError> {
    let deadline = Instant::now().checked_add(limit);
    loop {
        if child.try_wait()?.is_some() {
            return Ok(false);
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            let _ = child.kill();
            child.wait()?;
            tracing::warn!(pid = child.id(), ?limit, "killed process after timeout");
            return Ok(true);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
