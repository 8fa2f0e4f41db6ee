use thiserror::Error;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("segment is vertical, its slope angle is undefined")]
    VerticalSegment,
}

/// Errors caused by malformed caller input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

/// Coarse classification of a [`PlanarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    TypeMismatch,
    DegenerateGeometry,
}

impl PlanarError {
    /// Returns the kind of failure, independent of its message.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(_) => ErrorKind::DegenerateGeometry,
            Self::Input(InputError::InvalidArgument(_)) => ErrorKind::InvalidArgument,
            Self::Input(InputError::TypeMismatch { .. }) => ErrorKind::TypeMismatch,
        }
    }
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
