use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures of lattice construction, mutation and configuration.
///
/// Out-of-range coordinates are not represented here: they are programmer errors
/// and panic at the access site.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid lattice dimension {rows}x{cols}, need 1 <= rows * cols <= isize::MAX")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("invalid spin value {0}, expected +1 or -1")]
    InvalidSpinValue(i8),

    #[error("spin buffer has {actual} entries, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),
}
