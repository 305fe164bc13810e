//! A minimal interactive command interpreter.
//!
//! Each iteration reads one line, splits it into whitespace-delimited tokens and either
//! runs one of the built-in commands (`cd`, `help`, `exit`) in-process or launches an
//! external program and waits for it to finish. There are no pipelines, redirections,
//! quoting rules or variable expansion.
//!
//! The main entry point is [`Interpreter`]; lines come from any [`LineSource`].

mod builtin;
pub mod command;
pub mod config;
pub mod error;
mod external;
mod interpreter;
pub mod io_adapters;
pub mod reader;
pub mod tokenizer;

pub use builtin::Builtin;
pub use command::Status;
pub use error::ShellError;
pub use interpreter::Interpreter;
pub use reader::{EditorSource, LineSource, StdinSource};

/// Prefix of every diagnostic the shell writes to standard error.
pub const SHELL_NAME: &str = "shell";
