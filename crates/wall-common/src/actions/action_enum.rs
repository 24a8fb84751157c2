use serde::{Deserialize, Serialize};

use super::Direction;

/// Every user-triggerable action in the application.
///
/// Keybinds resolve to an `Action`. The app dispatcher turns it into a wall
/// command aimed at the active tile where one is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Tiles --
    ActivateSlot(u32),
    MoveActive(Direction),
    ReloadActive,
    ReloadAll,

    // -- Audio --
    ToggleGlobalMute,
    UnmuteActive,

    // -- Paging / filtering --
    NextPage,
    PrevPage,
    /// `0` shows every group, `n` shows the n-th configured group.
    SetGroup(u32),

    // -- Presentation --
    ToggleFocus,
    ExitFocus,
    ToggleDetach,
    CloseDetached,
    GrowGrid,
    ShrinkGrid,
    ToggleNativeControls,

    // -- Window --
    ToggleFullscreen,
    Quit,

    // -- Config --
    ReloadConfig,

    // -- Noop --
    None,
}
