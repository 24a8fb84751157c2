//! Focus mode: one tile enlarged with the rest in a side list.

use wall_common::TileId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum FocusState {
    #[default]
    Grid,
    Focus { main: TileId, side: Vec<TileId> },
}

/// Result of removing a tile from focus mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRemoval {
    NotPresent,
    RemovedFromSide,
    /// The focused tile itself went away; focus mode was exited.
    WasMain,
}

#[derive(Debug, Clone, Default)]
pub struct FocusController {
    state: FocusState,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        matches!(self.state, FocusState::Focus { .. })
    }

    pub fn focused(&self) -> Option<TileId> {
        match &self.state {
            FocusState::Focus { main, .. } => Some(*main),
            FocusState::Grid => None,
        }
    }

    pub fn side(&self) -> &[TileId] {
        match &self.state {
            FocusState::Focus { side, .. } => side,
            FocusState::Grid => &[],
        }
    }

    /// Enter focus on `main`. Callers exit any previous focus first.
    pub fn enter(&mut self, main: TileId, side: Vec<TileId>) {
        let side = side.into_iter().filter(|t| *t != main).collect();
        self.state = FocusState::Focus { main, side };
    }

    /// Back to grid mode. Returns the tile that was focused, if any.
    pub fn exit(&mut self) -> Option<TileId> {
        let prev = self.focused();
        self.state = FocusState::Grid;
        prev
    }

    /// Append `tile` to the side list when it rejoins while focused.
    pub fn add_side(&mut self, tile: TileId) {
        if let FocusState::Focus { main, side } = &mut self.state {
            if *main != tile && !side.contains(&tile) {
                side.push(tile);
            }
        }
    }

    pub fn remove(&mut self, tile: TileId) -> FocusRemoval {
        if self.focused() == Some(tile) {
            self.state = FocusState::Grid;
            return FocusRemoval::WasMain;
        }
        match &mut self.state {
            FocusState::Grid => FocusRemoval::NotPresent,
            FocusState::Focus { side, .. } => {
                let before = side.len();
                side.retain(|t| *t != tile);
                if side.len() < before {
                    FocusRemoval::RemovedFromSide
                } else {
                    FocusRemoval::NotPresent
                }
            }
        }
    }
}
