pub mod constants;
pub mod grid;
pub mod hilbert;
pub mod projection;

pub use constants::{DEFAULT_LEVEL, DEFAULT_RANGE_LEVEL, FACE_SHIFT, MAX_LEVEL, NUM_FACES};
pub use grid::{CELL_CENTER, ij_to_st, st_to_ij};
pub use hilbert::{hilbert_to_ij, ij_to_hilbert};
pub use projection::{
    Face, Vector3, face_index_uv_to_vector, face_index_vector_to_uv, face_uv_to_vector,
    face_vector_to_uv, largest_component, lat_lng_to_xyz, st_to_uv, uv_to_st, vector_to_face,
    vector_to_lat_lng,
};
