#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Next,
    Prev,
    GoTo(usize),
    /// Advances on non-final steps, finishes on the final one.
    Submit,
    Tick,
    Noop,
}
