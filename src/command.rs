/// Signal threaded from the dispatcher back to the loop driver after every line.
///
/// This is the shell's own control flow, distinct from a child program's numeric exit
/// code, which never influences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Keep reading lines.
    Continue,
    /// Leave the loop and terminate with a success exit code.
    Stop,
}

impl Status {
    /// Whether the loop driver should leave the loop.
    pub fn should_stop(self) -> bool {
        self == Status::Stop
    }
}
