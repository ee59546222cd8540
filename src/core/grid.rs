use crate::core::constants::MAX_LEVEL;
use crate::util::error::S2CellError;

/// Offset that places a point at the center of its grid cell.
pub const CELL_CENTER: (f64, f64) = (0.5, 0.5);

/// Converts ST coordinates to grid indices at the given level.
///
/// Indices are clamped to `[0, 2^level - 1]` so that `s == 1.0` still lands
/// in the last cell.
pub fn st_to_ij((s, t): (f64, f64), level: u8) -> Result<(u32, u32), S2CellError> {
    if level > MAX_LEVEL {
        return Err(S2CellError::InvalidLevel(level));
    }

    let size = 1u32 << level;
    let max = (size - 1) as f64;

    let to_index = |s: f64| (s * size as f64).floor().clamp(0.0, max) as u32;

    Ok((to_index(s), to_index(t)))
}

/// Converts grid indices back to ST coordinates.
///
/// `offset` picks the point inside the cell: `(0.0, 0.0)` is the lower
/// corner, [`CELL_CENTER`] the middle and `(1.0, 1.0)` the upper corner.
pub fn ij_to_st(
    (i, j): (u32, u32),
    level: u8,
    (offset_i, offset_j): (f64, f64),
) -> (f64, f64) {
    let size = 2f64.powi(level as i32);

    ((i as f64 + offset_i) / size, (j as f64 + offset_j) / size)
}
