use crate::api::cell::Cell;
use crate::core::constants::MAX_LEVEL;
use crate::util::coord::Coordinate;
use crate::util::error::S2CellError;
use rayon::prelude::*;

/// Search bounds for finding the finest cell shared by a set of points.
///
/// Levels are tried from `max_level` down to `min_level`; the first level at
/// which every point has the same ancestor wins, so the result is the
/// deepest common ancestor within the bounds.
///
/// # Example
///
/// ```
/// use s2cell_rs::Covering;
///
/// # fn main() -> Result<(), s2cell_rs::S2CellError> {
/// let covering = Covering::builder().min_level(0).max_level(20).build()?;
/// let cell = covering.cover(&[(42.831317, -2.700071), (42.832909, -2.699551)])?;
/// assert_eq!(cell.level(), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Covering {
    min_level: u8,
    max_level: u8,
}

impl Default for Covering {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: MAX_LEVEL,
        }
    }
}

impl Covering {
    pub fn builder() -> CoveringBuilder {
        CoveringBuilder::new()
    }

    pub fn min_level(&self) -> u8 {
        self.min_level
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Finest cell within the level bounds that contains every point.
    ///
    /// Points are encoded in parallel; the level scan itself is sequential.
    pub fn cover<C: Coordinate + Sync>(&self, points: &[C]) -> Result<Cell, S2CellError> {
        let Some((first, rest)) = points.split_first() else {
            return Err(S2CellError::EmptyPointSet);
        };

        let first = Cell::from_lat_lng(first, self.max_level)?;
        let rest: Vec<Cell> = rest
            .par_iter()
            .map(|p| Cell::from_lat_lng(p, self.max_level))
            .collect::<Result<_, _>>()?;

        tracing::debug!(
            points = points.len(),
            min_level = self.min_level,
            max_level = self.max_level,
            "searching for covering cell"
        );

        for level in (self.min_level..=self.max_level).rev() {
            let candidate = first.parent(level)?;
            if shared_by_all(candidate, &rest, level)? {
                tracing::debug!(level, id = candidate.id(), "found covering cell");
                return Ok(candidate);
            }
        }

        tracing::debug!(
            points = points.len(),
            min_level = self.min_level,
            "no covering cell within level bounds"
        );
        Err(S2CellError::NoCommonAncestor)
    }
}

fn shared_by_all(candidate: Cell, cells: &[Cell], level: u8) -> Result<bool, S2CellError> {
    for cell in cells {
        if cell.parent(level)? != candidate {
            return Ok(false);
        }
    }
    Ok(true)
}

#[derive(Debug, Default)]
pub struct CoveringBuilder {
    min_level: Option<u8>,
    max_level: Option<u8>,
}

impl CoveringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coarsest level to consider (default 1). Use 0 to allow whole-face cells.
    pub fn min_level(mut self, level: u8) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Finest level to consider (default 29).
    pub fn max_level(mut self, level: u8) -> Self {
        self.max_level = Some(level);
        self
    }

    pub fn build(self) -> Result<Covering, S2CellError> {
        let defaults = Covering::default();
        let min_level = self.min_level.unwrap_or(defaults.min_level);
        let max_level = self.max_level.unwrap_or(defaults.max_level);

        if max_level > MAX_LEVEL {
            return Err(S2CellError::InvalidLevel(max_level));
        }
        if min_level > max_level {
            return Err(S2CellError::InvalidLevel(min_level));
        }

        Ok(Covering {
            min_level,
            max_level,
        })
    }
}
