use thiserror::Error;

/// Structured failure conditions the core surfaces to callers.
///
/// Both are local to one file/class: a caller should report them and move on
/// to the next input rather than abort the whole run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Extraction yielded zero classes for an input file.
    #[error("no class declaration detected")]
    NoClassFound,

    /// End of input was reached before a brace region closed.
    #[error("unbalanced braces: region opened at offset {0} never closes")]
    UnbalancedBraces(usize),
}
