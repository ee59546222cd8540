use crate::api::covering::Covering;
use crate::core::constants::{
    DEFAULT_LEVEL, DEFAULT_RANGE_LEVEL, FACE_SHIFT, MARKER_BASE, MAX_LEVEL, marker_bit,
};
use crate::core::grid::{CELL_CENTER, ij_to_st, st_to_ij};
use crate::core::hilbert::walk_to_ij;
use crate::core::projection::{
    Face, face_uv_to_vector, face_vector_to_uv, lat_lng_to_xyz, st_to_uv, uv_to_st,
    vector_to_face, vector_to_lat_lng,
};
use crate::util::coord::{Coordinate, LatLng};
use crate::util::error::S2CellError;
use crate::util::identifier::{decode_cell_id, encode_cell_id};
use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of the cube-face quadtree, identified by a 64-bit id.
///
/// The identifier is the only state. Face, level, grid position and
/// coordinates are all derived from it on demand. A `Cell` is an immutable
/// value: use [`Cell::with_id`] or [`Cell::with_lat_lng`] to get a different
/// one.
///
/// Cells order by identifier, which follows the Hilbert curve, so nearby
/// points sort close together.
///
/// # Example
///
/// ```
/// use s2cell_rs::Cell;
///
/// # fn main() -> Result<(), s2cell_rs::S2CellError> {
/// let cell = Cell::from_lat_lng(&(43.604448, 3.887772), 29)?;
/// assert_eq!(cell.level(), 29);
///
/// let center = cell.lat_lng().rounded(6);
/// assert_eq!((center.lat, center.lng), (43.604448, 3.887772));
///
/// // Every cell nested inside the level-12 ancestor sorts within this range
/// let (min, max) = (cell.min(12)?, cell.max(12)?);
/// assert!(min <= cell.id() && cell.id() <= max);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Cell {
    id: u64,
}

impl Cell {
    /// Wraps a raw identifier after checking its face and level marker.
    ///
    /// # Errors
    ///
    /// [`S2CellError::InvalidCellId`] for zero, a misplaced marker, or a
    /// face above 5.
    pub fn new(id: u64) -> Result<Self, S2CellError> {
        let (face, level, _) = decode_cell_id(id)?;

        tracing::trace!(id, face = face.index(), level, "decoded cell");
        Ok(Self { id })
    }

    /// Create a Cell containing a lat/lng coordinate at the given level.
    ///
    /// # Example
    /// ```
    /// use s2cell_rs::Cell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), s2cell_rs::S2CellError> {
    /// // From a (lat, lng) tuple
    /// let cell = Cell::from_lat_lng(&(43.604448, 3.887772), 13)?;
    /// // From a Point (x = lng, y = lat)
    /// let same = Cell::from_lat_lng(&Point::new(3.887772, 43.604448), 13)?;
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lng(coord: &impl Coordinate, level: u8) -> Result<Self, S2CellError> {
        let v = lat_lng_to_xyz(coord);
        let face = vector_to_face(&v);
        let st = uv_to_st(face_vector_to_uv(face, &v));
        let ij = st_to_ij(st, level)?;
        let id = encode_cell_id(face, ij, level)?;

        tracing::trace!(lat = coord.lat(), lng = coord.lng(), level, id, "encoded cell");
        Ok(Self { id })
    }

    /// Create the finest (level 29) Cell containing a coordinate.
    pub fn leaf(coord: &impl Coordinate) -> Result<Self, S2CellError> {
        Self::from_lat_lng(coord, DEFAULT_LEVEL)
    }

    /// Finest cell that contains every point.
    ///
    /// Brute force: each point is encoded at level 29, then levels are tried
    /// from 29 down to 1 until all points share an ancestor. Use [`Covering`]
    /// to change the searched levels.
    ///
    /// # Errors
    ///
    /// [`S2CellError::EmptyPointSet`] for no points and
    /// [`S2CellError::NoCommonAncestor`] when the points only share a face
    /// (or not even that).
    pub fn from_lat_lngs<C: Coordinate + Sync>(points: &[C]) -> Result<Self, S2CellError> {
        Covering::default().cover(points)
    }

    /// Same cell type, different identifier.
    pub fn with_id(self, id: u64) -> Result<Self, S2CellError> {
        Self::new(id)
    }

    /// The cell containing `coord` at `level`.
    pub fn with_lat_lng(self, coord: &impl Coordinate, level: u8) -> Result<Self, S2CellError> {
        Self::from_lat_lng(coord, level)
    }

    pub fn id(self) -> u64 {
        self.id
    }

    /// Subdivision level, 0 (whole face) to 29.
    pub fn level(self) -> u8 {
        MAX_LEVEL - (self.id.trailing_zeros() / 2) as u8
    }

    pub fn face(self) -> Face {
        // face field was checked in `new`
        Face::all()[(self.id >> FACE_SHIFT) as usize]
    }

    /// Hilbert position along the face curve, `2 * level` bits.
    pub fn position(self) -> u64 {
        let lsb = self.id.trailing_zeros();
        let bits = MARKER_BASE - lsb;
        (self.id >> (lsb + 1)) & ((1u64 << bits) - 1)
    }

    /// Grid indices of this cell within its face at its own level.
    pub fn ij(self) -> (u32, u32) {
        walk_to_ij(self.position(), self.level(), self.face())
    }

    /// Center of the cell.
    pub fn lat_lng(self) -> LatLng {
        let center = self.point_at(CELL_CENTER);

        tracing::trace!(id = self.id, lat = center.lat, lng = center.lng, "cell center");
        center
    }

    fn point_at(self, offset: (f64, f64)) -> LatLng {
        let face = self.face();
        let st = ij_to_st(self.ij(), self.level(), offset);
        let v = face_uv_to_vector(face, st_to_uv(st));
        vector_to_lat_lng(&v)
    }

    /// Boundary of the cell as a closed polygon in lng/lat order.
    ///
    /// Edges are straight lines between the four corners, which is only an
    /// approximation of the true (geodesic) cell edges for coarse levels.
    pub fn to_polygon(self) -> Polygon<f64> {
        let mut coords: Vec<Coord<f64>> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .into_iter()
            .map(|offset| {
                let ll = self.point_at(offset);
                Coord { x: ll.lng, y: ll.lat }
            })
            .collect();
        coords.push(coords[0]);

        Polygon::new(LineString::from(coords), vec![])
    }

    fn check_ancestor_level(self, level: u8) -> Result<u32, S2CellError> {
        if level > self.level() {
            return Err(S2CellError::InvalidLevel(level));
        }
        Ok(marker_bit(level))
    }

    /// The ancestor of this cell at `level` (itself when `level` equals its own).
    pub fn parent(self, level: u8) -> Result<Self, S2CellError> {
        let marker = self.check_ancestor_level(level)?;

        Ok(Self {
            id: (self.id & !through_marker(level)) | (1u64 << marker),
        })
    }

    /// Smallest identifier of any cell nested in the ancestor at `level`.
    ///
    /// Together with [`Cell::max`] this gives an inclusive, sortable range
    /// suitable for range scans on an ordered index.
    pub fn min(self, level: u8) -> Result<u64, S2CellError> {
        self.check_ancestor_level(level)?;
        Ok(self.range_at(level).0)
    }

    /// Largest identifier of any cell nested in the ancestor at `level`.
    pub fn max(self, level: u8) -> Result<u64, S2CellError> {
        self.check_ancestor_level(level)?;
        Ok(self.range_at(level).1)
    }

    /// [`Cell::min`] at level 12, or at the cell's own level if coarser.
    pub fn min_default(self) -> u64 {
        self.range_at(DEFAULT_RANGE_LEVEL.min(self.level())).0
    }

    /// [`Cell::max`] at level 12, or at the cell's own level if coarser.
    pub fn max_default(self) -> u64 {
        self.range_at(DEFAULT_RANGE_LEVEL.min(self.level())).1
    }

    // `level` must not be finer than the cell's own.
    fn range_at(self, level: u8) -> (u64, u64) {
        let mask = through_marker(level);
        ((self.id & !mask) | 1, self.id | mask)
    }

    /// Whether `other` is this cell or one of its descendants.
    pub fn contains(self, other: &Cell) -> bool {
        other.level() >= self.level() && other.parent(self.level()) == Ok(self)
    }
}

/// Every bit from the level marker down to bit 0.
fn through_marker(level: u8) -> u64 {
    (1u64 << (marker_bit(level) + 1)) - 1
}

impl TryFrom<u64> for Cell {
    type Error = S2CellError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<Cell> for u64 {
    fn from(cell: Cell) -> Self {
        cell.id
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}", self.id)
    }
}
