use rustyline::error::ReadlineError;
use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Every failure the shell knows how to name.
///
/// Input, editor, allocation and output-stream failures travel up to `main` and end the
/// process. The rest are reported on the error stream where they happen and the loop
/// carries on with the next line.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The line buffer could not grow.
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),

    /// Standard input could not be read.
    #[error("cannot read input: {0}")]
    Read(#[source] io::Error),

    /// The interactive line editor failed.
    #[error("line editor: {0}")]
    Editor(#[from] ReadlineError),

    /// A builtin was called without its required argument.
    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),

    /// `cd` could not change the working directory.
    #[error("{0}")]
    ChangeDir(#[source] io::Error),

    /// An external program could not be started.
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Waiting for a started child failed.
    #[error("waiting for child: {0}")]
    Wait(#[source] io::Error),

    /// An output stream refused a write.
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}
