//! System tool execution with a timeout.

use crate::config::{COMMAND_POLL_MSEC, MAX_COMMAND_OUTPUT};
use crate::error::{LanCalcError, Result};
use colored::Colorize;
use regex::Regex;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command and return its stdout, killing it once `timeout` elapses.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// A non-zero exit status, a timeout, or more than `MAX_COMMAND_OUTPUT`
/// bytes of output is an error.
pub fn run(cmd: &str, timeout: Duration) -> Result<String> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);
    let (program, args) = cmds
        .split_first()
        .filter(|(program, _)| !program.is_empty())
        .ok_or_else(|| LanCalcError::command("empty command"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            log::error!("Command execution failed: {}", e);
            LanCalcError::command(format!("Failed to execute {program}: {e}"))
        })?;

    // pipes are drained while waiting, or a chatty tool blocks on write
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            // already exiting or gone if these fail
            child.kill().ok();
            child.wait().ok();
            log::warn!(
                "{timed_out} after {timeout:?}: {cmd}",
                timed_out = "timed out".on_red(),
                cmd = cmd.on_blue()
            );
            return Err(LanCalcError::command(format!("Timed out: {cmd}")));
        }
        thread::sleep(Duration::from_millis(COMMAND_POLL_MSEC));
    };
    let stdout = join_output(stdout)?;
    let stderr = join_output(stderr)?;

    if status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success stdout.len(): {}", stdout.len());

        if stdout.len() > MAX_COMMAND_OUTPUT {
            return Err(LanCalcError::command(format!(
                "Response too large: over {MAX_COMMAND_OUTPUT} bytes for command: {:?}",
                cmds
            )));
        }
    } else {
        let stderr = String::from_utf8_lossy(&stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = status.code(),
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(LanCalcError::command(format!("ERROR running {cmd}: {stderr}")));
    }

    // ipconfig on non-English Windows locales is not always UTF-8
    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

/// Read a child pipe on its own thread, keeping at most one byte past
/// `MAX_COMMAND_OUTPUT` and discarding the rest.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.by_ref()
                .take(MAX_COMMAND_OUTPUT as u64 + 1)
                .read_to_end(&mut buf)?;
            io::copy(&mut pipe, &mut io::sink())?;
        }
        Ok(buf)
    })
}

fn join_output(reader: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    reader
        .join()
        .map_err(|_| LanCalcError::command("output reader panicked"))?
        .map_err(LanCalcError::from)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
