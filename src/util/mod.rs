pub mod coord;
pub mod error;
pub mod identifier;

pub use coord::{Coordinate, LatLng};
pub use error::S2CellError;
pub use identifier::{
    cell_id_face, cell_id_level, cell_id_position, decode_cell_id, encode_cell_id, lowest_set_bit,
};
