//! Sources of input lines for the loop driver.

use crate::error::ShellError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};
use tracing::trace;

/// Initial capacity of the line buffer, in bytes.
pub const INITIAL_CAPACITY: usize = 1024;

/// Something that prompts for and yields one line of input at a time.
pub trait LineSource {
    /// Read the next line as raw bytes, newline excluded.
    ///
    /// Returns `Ok(None)` once the input is exhausted and nothing was read.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, ShellError>;
}

/// Plain line reader over any buffered input, printing the prompt to `W`.
pub struct StdinSource<R, W> {
    input: R,
    prompt_out: W,
    prompt: String,
}

impl<R: BufRead, W: Write> StdinSource<R, W> {
    /// Read lines from `input`, writing `prompt` to `prompt_out` before each one.
    pub fn new(input: R, prompt_out: W, prompt: impl Into<String>) -> Self {
        Self {
            input,
            prompt_out,
            prompt: prompt.into(),
        }
    }

    fn show_prompt(&mut self) -> Result<(), ShellError> {
        self.prompt_out.write_all(self.prompt.as_bytes())?;
        self.prompt_out.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> LineSource for StdinSource<R, W> {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, ShellError> {
        self.show_prompt()?;

        let mut line: Vec<u8> = Vec::new();
        line.try_reserve(INITIAL_CAPACITY)?;
        let mut saw_input = false;

        loop {
            let (consumed, finished) = {
                let available = match self.input.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(ShellError::Read(e)),
                };
                if available.is_empty() {
                    // End of stream.
                    break;
                }
                saw_input = true;
                match available.iter().position(|&b| b == b'\n') {
                    Some(newline) => {
                        line.try_reserve(newline)?;
                        line.extend_from_slice(&available[..newline]);
                        (newline + 1, true)
                    }
                    None => {
                        line.try_reserve(available.len())?;
                        line.extend_from_slice(available);
                        (available.len(), false)
                    }
                }
            };
            self.input.consume(consumed);
            if finished {
                break;
            }
        }

        if !saw_input {
            return Ok(None);
        }
        trace!(bytes = line.len(), "read line");
        Ok(Some(line))
    }
}

/// Interactive reader backed by a line editor with in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
    prompt: String,
}

impl EditorSource {
    /// Create a line editor on the controlling terminal.
    pub fn new(prompt: impl Into<String>) -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: prompt.into(),
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, ShellError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line.into_bytes()))
            }
            // Ctrl-C discards the line being edited.
            Err(ReadlineError::Interrupted) => Ok(Some(Vec::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
