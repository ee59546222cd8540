//! Hilbert curve traversal of a face grid.
//!
//! Encoding walks a 4-state machine from the coarsest bit of `(i, j)` to the
//! finest, emitting one 2-bit digit per level. Decoding undoes it with the
//! classic rotate-and-flip construction, reading digits finest first. Both
//! directions must agree bit for bit with other implementations of the same
//! cell scheme, so the table below is fixed.

use crate::core::constants::MAX_LEVEL;
use crate::core::projection::Face;
use crate::util::error::S2CellError;

/// Orientation of the curve inside the current quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurveState {
    A,
    B,
    C,
    D,
}

impl CurveState {
    fn initial(face: Face) -> Self {
        if face.is_odd() { CurveState::D } else { CurveState::A }
    }

    /// `(digit, next state)` for a quadrant, indexed by `2 * i_bit + j_bit`.
    fn step(self, quad: usize) -> (u64, CurveState) {
        use CurveState::*;

        const TABLE: [[(u64, CurveState); 4]; 4] = [
            [(0, D), (1, A), (3, B), (2, A)],
            [(2, B), (1, B), (3, A), (0, C)],
            [(2, C), (3, D), (1, C), (0, B)],
            [(0, A), (3, C), (1, D), (2, D)],
        ];

        let row = match self {
            A => 0,
            B => 1,
            C => 2,
            D => 3,
        };
        TABLE[row][quad]
    }
}

fn check_order(order: u8) -> Result<(), S2CellError> {
    if order > MAX_LEVEL {
        return Err(S2CellError::InvalidLevel(order));
    }
    Ok(())
}

/// Position of cell `(i, j)` along the face's Hilbert curve of the given order.
///
/// Only the low `order` bits of `i` and `j` are read. The result holds
/// `2 * order` bits.
///
/// # Errors
///
/// [`S2CellError::InvalidLevel`] when `order` is above 29.
pub fn ij_to_hilbert(i: u32, j: u32, order: u8, face: Face) -> Result<u64, S2CellError> {
    check_order(order)?;
    Ok(walk_to_position(i, j, order, face))
}

/// Inverse of [`ij_to_hilbert`].
///
/// # Errors
///
/// [`S2CellError::InvalidLevel`] when `order` is above 29.
pub fn hilbert_to_ij(position: u64, order: u8, face: Face) -> Result<(u32, u32), S2CellError> {
    check_order(order)?;
    Ok(walk_to_ij(position, order, face))
}

// `order` must be at most MAX_LEVEL.
fn walk_to_position(i: u32, j: u32, order: u8, face: Face) -> u64 {
    let mut state = CurveState::initial(face);
    let mut position = 0u64;

    for bit in (0..order as u32).rev() {
        let quad_i = ((i >> bit) & 1) as usize;
        let quad_j = ((j >> bit) & 1) as usize;

        let (digit, next) = state.step(quad_i * 2 + quad_j);
        position = (position << 2) | digit;
        state = next;
    }

    position
}

fn rotate_and_flip(n: u32, ij: &mut (u32, u32), rx: u32, ry: u32) {
    if ry == 0 {
        if rx == 1 {
            ij.0 = n - 1 - ij.0;
            ij.1 = n - 1 - ij.1;
        }
        std::mem::swap(&mut ij.0, &mut ij.1);
    }
}

/// Decoding for callers that already hold a valid level, such as a `Cell`.
pub(crate) fn walk_to_ij(mut position: u64, order: u8, face: Face) -> (u32, u32) {
    let mut ij = (0u32, 0u32);

    // The quadrant grows from a single cell up to half the face.
    for step in 0..order as u32 {
        let (rx, ry) = match position & 0b11 {
            0 => (0, 0),
            1 => (0, 1),
            2 => (1, 1),
            _ => (1, 0),
        };
        position >>= 2;

        let n = 1u32 << step;
        rotate_and_flip(n, &mut ij, rx, ry);

        ij.0 += n * rx;
        ij.1 += n * ry;
    }

    if face.is_odd() {
        std::mem::swap(&mut ij.0, &mut ij.1);
    }

    ij
}
