use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Every active breakpoint was deactivated before the end of the paragraph,
    /// so no partition into lines satisfies the tolerance. Callers may retry with
    /// a larger tolerance.
    #[error("no feasible line break at node {position} with tolerance {tolerance}")]
    NoFeasibleBreak { position: usize, tolerance: f64 },

    /// A non-empty paragraph needs at least one available line length
    #[error("line breaking requires at least one line length")]
    MissingLineLengths,

    /// The tolerance must be a non-negative number
    #[error("invalid line breaking tolerance {0}")]
    InvalidTolerance(f64),

    #[error(transparent)]
    /// An I/O error occurred while writing rendered output
    Io(#[from] std::io::Error),
}
