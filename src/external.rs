use crate::SHELL_NAME;
use crate::command::Status;
use crate::error::ShellError;
use crate::tokenizer::to_os_str;
use std::io::Write;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Runs `tokens[0]` as an external program with `tokens[1..]` as its arguments and
/// blocks until it terminates.
///
/// The program is looked up in `PATH` and inherits the shell's environment, standard
/// streams and working directory. A program that cannot be started is reported on
/// `stderr`. The child's own exit code is never propagated: this always yields
/// [`Status::Continue`] unless writing the diagnostic fails.
pub fn launch(tokens: &[&[u8]], stderr: &mut dyn Write) -> Result<Status, ShellError> {
    let Some((program, args)) = tokens.split_first() else {
        return Ok(Status::Continue);
    };
    match spawn_and_wait(program, args) {
        Ok(status) => debug!(
            program = %String::from_utf8_lossy(program),
            outcome = %describe(status),
            "child finished"
        ),
        Err(e) => writeln!(stderr, "{SHELL_NAME}: {e}")?,
    }
    Ok(Status::Continue)
}

fn spawn_and_wait(program: &[u8], args: &[&[u8]]) -> Result<ExitStatus, ShellError> {
    let mut child = Command::new(to_os_str(program))
        .args(args.iter().map(|arg| to_os_str(arg)))
        .spawn()
        .map_err(|source| ShellError::Spawn {
            program: String::from_utf8_lossy(program).into_owned(),
            source,
        })?;
    debug!(pid = child.id(), "spawned child");
    // `wait` only returns once the child has exited or was killed by a signal.
    child.wait().map_err(ShellError::Wait)
}

fn describe(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with code {code}"),
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) if status.core_dumped() => {
            format!("killed by signal {signal} (core dumped)")
        }
        Some(signal) => format!("killed by signal {signal}"),
        None => "terminated".to_string(),
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> String {
    "terminated".to_string()
}
