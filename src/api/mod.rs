pub mod cell;
pub mod covering;

pub use cell::Cell;
pub use covering::{Covering, CoveringBuilder};
