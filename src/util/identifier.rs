use crate::core::constants::{FACE_SHIFT, MARKER_BASE, MAX_LEVEL, marker_bit};
use crate::core::hilbert::ij_to_hilbert;
use crate::core::projection::Face;
use crate::util::error::S2CellError;

/// Packs a face, grid position and level into a 64-bit cell identifier.
///
/// # Binary Format
///
/// | Bits           | Field            | Description                                  |
/// |----------------|------------------|----------------------------------------------|
/// | 63-62          | Unused           | Always zero                                  |
/// | 61-59          | Face             | Cube face (0-5)                              |
/// | 58-(59-2L)     | Hilbert position | `2L` bits, coarsest digit first              |
/// | 58-2L          | Level marker     | Single set bit; its position encodes `L`     |
/// | below marker   | Padding          | Zero                                         |
///
/// A level-29 cell fills every bit down to the marker at bit 0; a level-0
/// cell is just the face and a marker at bit 58.
///
/// # Example
/// ```
/// use s2cell_rs::{Face, encode_cell_id};
///
/// let id = encode_cell_id(Face::NegX, (0, 0), 0).unwrap();
/// assert_eq!(id, (3 << 59) | (1 << 58));
/// ```
pub fn encode_cell_id(face: Face, (i, j): (u32, u32), level: u8) -> Result<u64, S2CellError> {
    if level > MAX_LEVEL {
        return Err(S2CellError::InvalidLevel(level));
    }

    let position = ij_to_hilbert(i, j, level, face)?;

    let mut id = (face.index() as u64) << FACE_SHIFT;
    id |= position << (FACE_SHIFT - 2 * level as u32);
    id |= 1u64 << marker_bit(level);

    Ok(id)
}

/// Index of the level marker bit.
///
/// # Errors
///
/// [`S2CellError::InvalidCellId`] when `id` is zero, or when the lowest set
/// bit cannot be a marker (odd position, or above bit 58).
pub fn lowest_set_bit(id: u64) -> Result<u32, S2CellError> {
    if id == 0 {
        return Err(S2CellError::InvalidCellId(id));
    }

    let lsb = id.trailing_zeros();
    if lsb % 2 == 1 || lsb > MARKER_BASE {
        return Err(S2CellError::InvalidCellId(id));
    }

    Ok(lsb)
}

pub fn cell_id_level(id: u64) -> Result<u8, S2CellError> {
    let lsb = lowest_set_bit(id)?;
    Ok(MAX_LEVEL - (lsb / 2) as u8)
}

/// Face of `id`, read from every bit above position 58.
///
/// Reading the whole field (rather than masking it down to two bits) keeps
/// faces 4 and 5 intact and rejects anything above 5.
pub fn cell_id_face(id: u64) -> Result<Face, S2CellError> {
    let field = id >> FACE_SHIFT;
    u8::try_from(field)
        .ok()
        .and_then(|f| Face::try_from(f).ok())
        .ok_or(S2CellError::InvalidCellId(id))
}

/// Hilbert position of `id`, stripped of the marker and padding.
///
/// The face bits are masked off, so the result holds exactly `2 * level` bits.
pub fn cell_id_position(id: u64) -> Result<u64, S2CellError> {
    let lsb = lowest_set_bit(id)?;
    let position_bits = MARKER_BASE - lsb;
    let position = id >> (lsb + 1);

    Ok(position & ((1u64 << position_bits) - 1))
}

/// Decodes a cell identifier to `(face, level, hilbert position)`.
///
/// # Errors
///
/// [`S2CellError::InvalidCellId`] when the marker or face field is malformed.
pub fn decode_cell_id(id: u64) -> Result<(Face, u8, u64), S2CellError> {
    let face = cell_id_face(id)?;
    let level = cell_id_level(id)?;
    let position = cell_id_position(id)?;

    Ok((face, level, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTPELLIER_L29: u64 =
        0b0000010010101101101010111110011000110001010010100011000010011101;

    #[test]
    fn test_decode_known_identifier() -> Result<(), S2CellError> {
        let (face, level, position) = decode_cell_id(MONTPELLIER_L29)?;

        assert_eq!(face, Face::PosX);
        assert_eq!(level, 29);
        assert_eq!(position, MONTPELLIER_L29 >> 1);
        Ok(())
    }

    #[test]
    fn test_level_from_marker() -> Result<(), S2CellError> {
        assert_eq!(cell_id_level(1)?, 29);
        assert_eq!(cell_id_level(1 << 2)?, 28);
        assert_eq!(cell_id_level(1 << 58)?, 0);
        assert_eq!(cell_id_level((5 << 59) | (1 << 34))?, 12);
        Ok(())
    }

    #[test]
    fn test_encode_level_zero_cells() -> Result<(), S2CellError> {
        for face in Face::all() {
            let id = encode_cell_id(face, (0, 0), 0)?;
            assert_eq!(id, ((face.index() as u64) << 59) | (1 << 58));
            assert_eq!(decode_cell_id(id)?, (face, 0, 0));
        }
        Ok(())
    }

    #[test]
    fn test_encode_decode_fields() -> Result<(), S2CellError> {
        let id = encode_cell_id(Face::NegZ, (5, 2), 3)?;
        let position = ij_to_hilbert(5, 2, 3, Face::NegZ)?;

        assert_eq!(id.trailing_zeros(), 52);
        assert_eq!(decode_cell_id(id)?, (Face::NegZ, 3, position));
        Ok(())
    }

    #[test]
    fn test_faces_four_and_five_survive_decoding() -> Result<(), S2CellError> {
        let id = encode_cell_id(Face::NegY, (1, 0), 1)?;
        assert_eq!(cell_id_face(id)?, Face::NegY);

        let id = encode_cell_id(Face::NegZ, ((1 << 29) - 1, 0), 29)?;
        assert_eq!(cell_id_face(id)?, Face::NegZ);
        Ok(())
    }

    #[test]
    fn test_zero_is_invalid() {
        assert_eq!(lowest_set_bit(0), Err(S2CellError::InvalidCellId(0)));
        assert_eq!(cell_id_level(0), Err(S2CellError::InvalidCellId(0)));
        assert!(decode_cell_id(0).is_err());
    }

    #[test]
    fn test_misplaced_marker_is_invalid() {
        assert_eq!(cell_id_level(0b10), Err(S2CellError::InvalidCellId(0b10)));
        assert!(cell_id_level(1 << 59).is_err());
        assert!(cell_id_level(1 << 60).is_err());
    }

    #[test]
    fn test_face_above_five_is_invalid() {
        let id = (6u64 << 59) | 1;
        assert_eq!(cell_id_face(id), Err(S2CellError::InvalidCellId(id)));

        let id = (1u64 << 63) | 1;
        assert_eq!(decode_cell_id(id), Err(S2CellError::InvalidCellId(id)));
    }

    #[test]
    fn test_invalid_level() {
        assert_eq!(
            encode_cell_id(Face::PosX, (0, 0), 30),
            Err(S2CellError::InvalidLevel(30))
        );
    }
}
