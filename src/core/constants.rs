/// Deepest subdivision level (finest cells)
pub const MAX_LEVEL: u8 = 29;

/// Level used when encoding without an explicit level
pub const DEFAULT_LEVEL: u8 = MAX_LEVEL;

/// Level used by `Cell::min_default` / `Cell::max_default`
pub const DEFAULT_RANGE_LEVEL: u8 = 12;

/// Number of cube faces
pub const NUM_FACES: u8 = 6;

/// Bit offset of the face field inside a cell identifier
pub const FACE_SHIFT: u32 = 59;

/// Bit position of the level marker for a level-29 cell is 0; each coarser
/// level moves it up two bits.
pub(crate) const MARKER_BASE: u32 = 58;

/// Bit position of the level marker for `level`.
pub(crate) const fn marker_bit(level: u8) -> u32 {
    MARKER_BASE - 2 * level as u32
}
