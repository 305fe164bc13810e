use crate::SHELL_NAME;
use crate::command::Status;
use crate::error::ShellError;
use crate::tokenizer::to_os_str;
use std::env;
use std::io::Write;
use tracing::debug;

/// Built-in commands known to the shell at compile time.
///
/// Builtins run directly in the shell process. The set is closed: adding one means
/// adding a variant, its name in [`Builtin::name`], its handler in
/// [`Builtin::execute`] and an entry in [`Builtin::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Change the process working directory.
    Cd,
    /// Print the list of builtins.
    Help,
    /// Leave the shell.
    Exit,
}

impl Builtin {
    /// Builtin table, in lookup and `help` order.
    pub const ALL: [Builtin; 3] = [Builtin::Cd, Builtin::Help, Builtin::Exit];

    /// Canonical name of the command, e.g. "cd".
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
        }
    }

    /// Exact, byte-wise lookup in table order.
    pub fn lookup(name: &[u8]) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name().as_bytes() == name)
    }

    /// Runs the builtin with the full token sequence, `tokens[0]` being its name.
    ///
    /// Handler failures are written to `stderr` and turn into [`Status::Continue`]. Output
    /// stream failures, including the one writing that diagnostic, are returned.
    pub fn execute(
        self,
        tokens: &[&[u8]],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status, ShellError> {
        debug!(
            builtin = self.name(),
            args = tokens.len().saturating_sub(1),
            "running builtin"
        );
        let outcome = match self {
            Builtin::Cd => change_dir(tokens),
            Builtin::Help => help(stdout),
            Builtin::Exit => Ok(Status::Stop),
        };
        match outcome {
            Ok(status) => Ok(status),
            Err(e @ ShellError::Write(_)) => Err(e),
            Err(e) => {
                writeln!(stderr, "{SHELL_NAME}: {e}")?;
                Ok(Status::Continue)
            }
        }
    }
}

fn change_dir(tokens: &[&[u8]]) -> Result<Status, ShellError> {
    let path = tokens
        .get(1)
        .ok_or(ShellError::MissingArgument(Builtin::Cd.name()))?;
    env::set_current_dir(to_os_str(path)).map_err(ShellError::ChangeDir)?;
    debug!(path = %String::from_utf8_lossy(path), "changed directory");
    Ok(Status::Continue)
}

fn help(stdout: &mut dyn Write) -> Result<Status, ShellError> {
    writeln!(stdout, "Shell's Help")?;
    writeln!(stdout, "Built-ins:")?;
    for builtin in Builtin::ALL {
        writeln!(stdout, " {}", builtin.name())?;
    }
    writeln!(stdout, "The man command can be used for other programs.")?;
    Ok(Status::Continue)
}
