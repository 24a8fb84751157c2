//! The wall's user-facing control surface as a command enum.

use wall_common::{Direction, GroupFilter, TileId};

/// One user-level operation on the wall. See [`crate::Wall::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum WallCommand {
    Activate(TileId),
    /// Activate the tile in the n-th slot (0-based) of the current page.
    ActivateSlot(usize),
    MoveActive(Direction),
    ReloadActive,
    ReloadTile(TileId),
    ReloadAll,
    SetGlobalMute(bool),
    ToggleGlobalMute,
    UnmuteActive,
    NextPage,
    PrevPage,
    LoadPage(i64),
    SetGroupFilter(GroupFilter),
    ToggleFocus(TileId),
    ToggleFocusActive,
    ExitFocus,
    ToggleDetach(TileId),
    ToggleDetachActive,
    /// The floating surface's own close action.
    CloseDetached(TileId),
    /// Grow (positive) or shrink (negative) the grid on both axes.
    ResizeGrid(i64),
    ToggleNativeControls,
}
