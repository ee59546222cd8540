//! # s2cell-rs
//!
//! Hierarchical 64-bit cell identifiers for points on Earth. The sphere is
//! projected onto the six faces of a cube, each face is split into a
//! quadtree up to level 29, and the cells of every level are numbered along
//! a Hilbert curve. Nearby points get nearby identifiers, and a coarser
//! cell's identifier range contains all of its descendants.
//!
//! There are currently two main entry points.
//!
//! ### 1. `Cell` - Single Cell Operations
//!
//! ```
//! use s2cell_rs::Cell;
//!
//! # fn main() -> Result<(), s2cell_rs::S2CellError> {
//! let cell = Cell::from_lat_lng(&(43.604448, 3.887772), 29)?;
//! println!("{} (level {})", cell.id(), cell.level());
//!
//! let center = cell.lat_lng();
//! let range = (cell.min(12)?, cell.max(12)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Covering` - Finest Cell Shared by Many Points
//!
//! ```
//! use s2cell_rs::{Cell, Covering};
//!
//! # fn main() -> Result<(), s2cell_rs::S2CellError> {
//! let points = [(42.831317, -2.700071), (42.832909, -2.699551)];
//!
//! let cell = Cell::from_lat_lngs(&points)?;
//! assert_eq!(cell.level(), 7);
//!
//! // Or with custom level bounds
//! let coarse = Covering::builder().max_level(5).build()?.cover(&points)?;
//! assert_eq!(coarse.level(), 5);
//! # Ok(())
//! # }
//! ```
//!
//! The lower-level projection, grid and Hilbert functions are public too, in
//! [`core`] and [`util`].

pub mod api;
pub mod core;
pub mod util;

pub use api::{Cell, Covering, CoveringBuilder};
pub use core::{
    CELL_CENTER, DEFAULT_LEVEL, DEFAULT_RANGE_LEVEL, FACE_SHIFT, Face, MAX_LEVEL, NUM_FACES,
    Vector3, face_uv_to_vector, face_vector_to_uv, hilbert_to_ij, ij_to_hilbert, ij_to_st,
    largest_component, lat_lng_to_xyz, st_to_ij, st_to_uv, uv_to_st, vector_to_face,
    vector_to_lat_lng,
};
pub use util::{
    Coordinate, LatLng, S2CellError, cell_id_face, cell_id_level, cell_id_position,
    decode_cell_id, encode_cell_id,
};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_end_to_end_pipeline() -> Result<(), S2CellError> {
        let coord = (43.604448, 3.887772);

        let v = lat_lng_to_xyz(&coord);
        let face = vector_to_face(&v);
        let st = uv_to_st(face_vector_to_uv(face, &v));
        let (i, j) = st_to_ij(st, 29)?;
        let id = encode_cell_id(face, (i, j), 29)?;

        let cell = Cell::from_lat_lng(&coord, 29)?;
        assert_eq!(cell.id(), id);

        let (face_back, level, position) = decode_cell_id(id)?;
        assert_eq!((face_back, level), (face, 29));
        assert_eq!(hilbert_to_ij(position, level, face_back)?, (i, j));
        Ok(())
    }

    #[test]
    fn test_nearby_points_share_prefix() -> Result<(), S2CellError> {
        let a = Cell::from_lat_lng(&(43.604448, 3.887772), 29)?;
        let b = Cell::from_lat_lng(&(43.604450, 3.887775), 29)?;
        let far = Cell::from_lat_lng(&(-33.9, 151.2), 29)?;

        assert_eq!(a.parent(20)?, b.parent(20)?);
        assert_ne!(a.parent(5)?, far.parent(5)?);
        Ok(())
    }

    #[test]
    fn test_lat_lng_is_repeatable() -> Result<(), S2CellError> {
        let cell = Cell::from_lat_lng(&(51.5, -0.12), 18)?;
        assert_eq!(cell.lat_lng(), cell.lat_lng());
        Ok(())
    }

    fn lat_lng() -> impl Strategy<Value = (f64, f64)> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
    }

    proptest! {
        #[test]
        fn prop_encoded_level_roundtrips(coord in lat_lng(), level in 0..=MAX_LEVEL) {
            let cell = Cell::from_lat_lng(&coord, level).unwrap();
            prop_assert_eq!(cell.level(), level);
            prop_assert_eq!(cell_id_level(cell.id()).unwrap(), level);
            prop_assert_eq!(Cell::new(cell.id()).unwrap(), cell);
        }

        #[test]
        fn prop_range_contains_cell(coord in lat_lng(), level in 0..=MAX_LEVEL) {
            let cell = Cell::from_lat_lng(&coord, MAX_LEVEL).unwrap();
            let (min, max) = (cell.min(level).unwrap(), cell.max(level).unwrap());

            prop_assert!(min <= cell.id() && cell.id() <= max);

            let coarser = Cell::from_lat_lng(&coord, level).unwrap();
            prop_assert!(coarser.contains(&cell));
            prop_assert!(min <= coarser.id() && coarser.id() <= max);
        }

        #[test]
        fn prop_ranges_nest(coord in lat_lng(), a in 0..=MAX_LEVEL, b in 0..=MAX_LEVEL) {
            prop_assume!(a != b);
            let (coarse, fine) = (a.min(b), a.max(b));
            let cell = Cell::from_lat_lng(&coord, MAX_LEVEL).unwrap();

            let outer = (cell.min(coarse).unwrap(), cell.max(coarse).unwrap());
            let inner = (cell.min(fine).unwrap(), cell.max(fine).unwrap());

            prop_assert!(outer.0 <= inner.0 && inner.1 <= outer.1);
            prop_assert_ne!(outer, inner);
        }

        #[test]
        fn prop_center_is_stable(coord in lat_lng(), level in 0..=MAX_LEVEL) {
            let cell = Cell::from_lat_lng(&coord, level).unwrap();
            let again = Cell::from_lat_lng(&cell.lat_lng(), level).unwrap();
            prop_assert_eq!(again, cell);
        }
    }
}
