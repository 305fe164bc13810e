use crate::builtin::Builtin;
use crate::command::Status;
use crate::error::ShellError;
use crate::external;
use crate::reader::LineSource;
use crate::tokenizer::split_into_tokens;
use std::io::Write;
use tracing::debug;

/// A minimal shell-like interpreter that runs builtins and external commands.
///
/// Builtin output goes to the interpreter's own `stdout`/`stderr` writers; external
/// programs always inherit the real process streams.
///
/// Example
/// ```
/// use tiny_shell::io_adapters::MemWriter;
/// use tiny_shell::{Interpreter, Status};
///
/// let out = MemWriter::new();
/// let mut sh = Interpreter::new(Box::new(out.clone()), Box::new(std::io::sink()));
/// assert_eq!(sh.execute_line(b"help").unwrap(), Status::Continue);
/// assert!(out.contents().contains("exit"));
/// assert_eq!(sh.execute_line(b"exit now").unwrap(), Status::Stop);
/// ```
pub struct Interpreter {
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl Interpreter {
    /// Create an interpreter whose builtins write to the given streams.
    pub fn new(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self { stdout, stderr }
    }

    /// Read/dispatch loop. Returns when a command asks to stop or the input runs out.
    ///
    /// Errors returned from here are fatal for the shell.
    pub fn repl(&mut self, source: &mut dyn LineSource) -> anyhow::Result<()> {
        loop {
            let Some(line) = source.read_line()? else {
                debug!("end of input");
                return Ok(());
            };
            if self.execute_line(&line)?.should_stop() {
                debug!("exit requested");
                return Ok(());
            }
        }
    }

    /// Tokenize and dispatch a single raw line.
    pub fn execute_line(&mut self, line: &[u8]) -> Result<Status, ShellError> {
        let tokens = split_into_tokens(line);
        self.dispatch(&tokens)
    }

    /// Run a builtin when `tokens[0]` names one, otherwise launch it as a program.
    ///
    /// An empty token sequence does nothing.
    pub fn dispatch(&mut self, tokens: &[&[u8]]) -> Result<Status, ShellError> {
        let Some(&name) = tokens.first() else {
            return Ok(Status::Continue);
        };
        let status = match Builtin::lookup(name) {
            Some(builtin) => builtin.execute(tokens, &mut self.stdout, &mut self.stderr)?,
            None => {
                // Keep terminal output in execution order.
                self.stdout.flush()?;
                self.stderr.flush()?;
                external::launch(tokens, &mut self.stderr)?
            }
        };
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(status)
    }
}

impl Default for Interpreter {
    /// An interpreter writing to the process's standard output and error.
    fn default() -> Self {
        Self::new(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }
}
