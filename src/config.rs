use argh::FromArgs;

/// Prompt printed before every line when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

#[derive(FromArgs, Debug, PartialEq)]
/// A minimal interactive command interpreter with the builtins cd, help and exit.
pub struct Options {
    #[argh(option, default = "String::from(DEFAULT_PROMPT)")]
    /// text printed before each command line is read
    pub prompt: String,

    #[argh(switch)]
    /// read raw lines from standard input even when it is a terminal
    pub plain: bool,

    #[argh(switch, short = 'v')]
    /// log at debug level unless RUST_LOG says otherwise
    pub verbose: bool,
}

impl Options {
    /// Default log filter directive for this configuration.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
