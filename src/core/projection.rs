//! Sphere to cube-face projection.
//!
//! A point travels `LatLng -> Vector3 -> (Face, UV) -> ST` when encoding and
//! back along the same path when decoding. UV is the linear gnomonic
//! projection onto a face in `[-1, 1]`; ST re-parameterizes it quadratically
//! into `[0, 1]` so cells keep a more even area across the face.

use crate::util::coord::{Coordinate, LatLng};
use crate::util::error::S2CellError;
use serde::{Deserialize, Serialize};

/// A point on (or very near) the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn component(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }
}

/// One of the six cube faces.
///
/// Faces 0-2 sit on the positive X, Y and Z axes, faces 3-5 on the negative
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    PosX = 0,
    PosY = 1,
    PosZ = 2,
    NegX = 3,
    NegY = 4,
    NegZ = 5,
}

impl Face {
    pub const fn all() -> [Face; 6] {
        [
            Face::PosX,
            Face::PosY,
            Face::PosZ,
            Face::NegX,
            Face::NegY,
            Face::NegZ,
        ]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Odd faces run their Hilbert curve mirrored along the diagonal.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 1
    }
}

impl TryFrom<u8> for Face {
    type Error = S2CellError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Face::PosX),
            1 => Ok(Face::PosY),
            2 => Ok(Face::PosZ),
            3 => Ok(Face::NegX),
            4 => Ok(Face::NegY),
            5 => Ok(Face::NegZ),
            _ => Err(S2CellError::InvalidFace(index)),
        }
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.index()
    }
}

/// Axis (0 = x, 1 = y, 2 = z) with the largest absolute component.
///
/// Ties go to the later axis when compared against z.
pub fn largest_component(v: &Vector3) -> usize {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());

    if ax > ay {
        if ax > az { 0 } else { 2 }
    } else if ay > az {
        1
    } else {
        2
    }
}

pub fn vector_to_face(v: &Vector3) -> Face {
    let axis = largest_component(v);
    let positive = [Face::PosX, Face::PosY, Face::PosZ];
    let negative = [Face::NegX, Face::NegY, Face::NegZ];

    if v.component(axis) < 0.0 {
        negative[axis]
    } else {
        positive[axis]
    }
}

/// Projects `v` onto the tangent plane of `face`.
///
/// Negative faces are not the negation of their positive counterparts: their
/// u and v axes are swapped so every face keeps the same handedness.
pub fn face_vector_to_uv(face: Face, v: &Vector3) -> (f64, f64) {
    match face {
        Face::PosX => (v.y / v.x, v.z / v.x),
        Face::PosY => (-v.x / v.y, v.z / v.y),
        Face::PosZ => (-v.x / v.z, -v.y / v.z),
        Face::NegX => (v.z / v.x, v.y / v.x),
        Face::NegY => (v.z / v.y, -v.x / v.y),
        Face::NegZ => (-v.y / v.z, -v.x / v.z),
    }
}

/// Inverse of [`face_vector_to_uv`]. The result lies on the cube, not the
/// sphere; only its direction is meaningful.
pub fn face_uv_to_vector(face: Face, (u, v): (f64, f64)) -> Vector3 {
    match face {
        Face::PosX => Vector3::new(1.0, u, v),
        Face::PosY => Vector3::new(-u, 1.0, v),
        Face::PosZ => Vector3::new(-u, -v, 1.0),
        Face::NegX => Vector3::new(-1.0, -v, -u),
        Face::NegY => Vector3::new(v, -1.0, -u),
        Face::NegZ => Vector3::new(v, u, -1.0),
    }
}

/// Same as [`face_uv_to_vector`] for a raw face index.
pub fn face_index_uv_to_vector(face: u8, uv: (f64, f64)) -> Result<Vector3, S2CellError> {
    Ok(face_uv_to_vector(Face::try_from(face)?, uv))
}

/// Same as [`face_vector_to_uv`] for a raw face index.
pub fn face_index_vector_to_uv(face: u8, v: &Vector3) -> Result<(f64, f64), S2CellError> {
    Ok(face_vector_to_uv(Face::try_from(face)?, v))
}

pub fn vector_to_lat_lng(v: &Vector3) -> LatLng {
    let lat = v.z.atan2((v.x * v.x + v.y * v.y).sqrt()).to_degrees();
    let lng = v.y.atan2(v.x).to_degrees();
    LatLng::new(lat, lng)
}

pub fn lat_lng_to_xyz<C: Coordinate>(coord: &C) -> Vector3 {
    let lat = coord.lat().to_radians();
    let lng = coord.lng().to_radians();
    let cos_lat = lat.cos();

    Vector3::new(lng.cos() * cos_lat, lng.sin() * cos_lat, lat.sin())
}

fn u_to_s(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

fn s_to_u(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

pub fn uv_to_st((u, v): (f64, f64)) -> (f64, f64) {
    (u_to_s(u), u_to_s(v))
}

pub fn st_to_uv((s, t): (f64, f64)) -> (f64, f64) {
    (s_to_u(s), s_to_u(t))
}
