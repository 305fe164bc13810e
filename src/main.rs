use std::io::{self, IsTerminal};
use std::process;

use tiny_shell::config::Options;
use tiny_shell::{EditorSource, Interpreter, LineSource, SHELL_NAME, StdinSource};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let options: Options = argh::from_env();

    // RUST_LOG wins over the --verbose default. Logs go to stderr, away from command output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let mut source = line_source(&options);
    if let Err(e) = Interpreter::default().repl(source.as_mut()) {
        eprintln!("{SHELL_NAME}: {e}");
        process::exit(1);
    }
}

fn line_source(options: &Options) -> Box<dyn LineSource> {
    if !options.plain && io::stdin().is_terminal() {
        match EditorSource::new(options.prompt.as_str()) {
            Ok(editor) => return Box::new(editor),
            Err(e) => warn!("line editor unavailable, reading plain input: {e}"),
        }
    }
    Box::new(StdinSource::new(
        io::stdin().lock(),
        io::stdout(),
        options.prompt.as_str(),
    ))
}
