//! Bookkeeping for tiles playing in floating surfaces.

use serde::Serialize;
use wall_common::{DetachError, FloatId, TileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetachedSurface {
    pub tile: TileId,
    pub float: FloatId,
}

/// Registry of detached tiles, capped at `max`.
#[derive(Debug, Clone)]
pub struct DetachController {
    max: usize,
    detached: Vec<DetachedSurface>,
    next_float: u64,
}

impl DetachController {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            detached: Vec::new(),
            next_float: 0,
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn set_max(&mut self, max: usize) {
        self.max = max;
    }

    pub fn count(&self) -> usize {
        self.detached.len()
    }

    pub fn surfaces(&self) -> &[DetachedSurface] {
        &self.detached
    }

    pub fn is_detached(&self, tile: TileId) -> bool {
        self.detached.iter().any(|d| d.tile == tile)
    }

    pub fn float_of(&self, tile: TileId) -> Option<FloatId> {
        self.detached.iter().find(|d| d.tile == tile).map(|d| d.float)
    }

    pub fn tile_of(&self, float: FloatId) -> Option<TileId> {
        self.detached.iter().find(|d| d.float == float).map(|d| d.tile)
    }

    /// Check a detach without changing anything.
    pub fn check(&self, tile: TileId) -> Result<(), DetachError> {
        if self.is_detached(tile) {
            return Err(DetachError::AlreadyDetached(tile));
        }
        if self.detached.len() >= self.max {
            return Err(DetachError::CapacityReached { max: self.max });
        }
        Ok(())
    }

    pub fn register(&mut self, tile: TileId) -> Result<FloatId, DetachError> {
        self.check(tile)?;
        self.next_float += 1;
        let float = FloatId(self.next_float);
        self.detached.push(DetachedSurface { tile, float });
        Ok(float)
    }

    pub fn unregister(&mut self, tile: TileId) -> Result<FloatId, DetachError> {
        let idx = self
            .detached
            .iter()
            .position(|d| d.tile == tile)
            .ok_or(DetachError::NotDetached(tile))?;
        Ok(self.detached.remove(idx).float)
    }
}
