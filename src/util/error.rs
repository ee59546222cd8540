use thiserror::Error;

/// Error type for s2cell-rs operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum S2CellError {
    /// The face index is outside the valid range (0-5).
    #[error("Invalid face: {0}")]
    InvalidFace(u8),
    /// The identifier has no level marker, a misplaced marker, or a face above 5.
    #[error("Invalid cell id: {0:#066b}")]
    InvalidCellId(u64),
    /// The level is outside the valid range (0-29) or finer than the cell itself.
    #[error("Invalid level: {0}")]
    InvalidLevel(u8),
    /// A covering was requested for zero points.
    #[error("Cannot cover an empty point set")]
    EmptyPointSet,
    /// The points share no ancestor within the searched levels.
    #[error("Points share no common ancestor cell")]
    NoCommonAncestor,
}
