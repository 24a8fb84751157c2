use super::{Action, Direction};

impl Action {
    /// Human-readable label, used in logs and the window title.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ActivateSlot(1) => "Activate Slot 1",
            Action::ActivateSlot(2) => "Activate Slot 2",
            Action::ActivateSlot(3) => "Activate Slot 3",
            Action::ActivateSlot(4) => "Activate Slot 4",
            Action::ActivateSlot(_) => "Activate Slot",
            Action::MoveActive(Direction::Left) => "Move Left",
            Action::MoveActive(Direction::Right) => "Move Right",
            Action::MoveActive(Direction::Up) => "Move Up",
            Action::MoveActive(Direction::Down) => "Move Down",
            Action::ReloadActive => "Reload Tile",
            Action::ReloadAll => "Reload All",
            Action::ToggleGlobalMute => "Toggle Mute All",
            Action::UnmuteActive => "Listen to Active",
            Action::NextPage => "Next Page",
            Action::PrevPage => "Previous Page",
            Action::SetGroup(0) => "Show All Groups",
            Action::SetGroup(1) => "Show Group 1",
            Action::SetGroup(2) => "Show Group 2",
            Action::SetGroup(3) => "Show Group 3",
            Action::SetGroup(4) => "Show Group 4",
            Action::SetGroup(_) => "Show Group",
            Action::ToggleFocus => "Toggle Focus",
            Action::ExitFocus => "Exit Focus",
            Action::ToggleDetach => "Toggle Detach",
            Action::CloseDetached => "Close Floating Tile",
            Action::GrowGrid => "Grow Grid",
            Action::ShrinkGrid => "Shrink Grid",
            Action::ToggleNativeControls => "Toggle Player Controls",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::Quit => "Quit",
            Action::ReloadConfig => "Reload Config",
            Action::None => "None",
        }
    }

    /// All actions that can be bound to a key.
    pub fn bindable_actions() -> Vec<Action> {
        vec![
            Action::MoveActive(Direction::Left),
            Action::MoveActive(Direction::Right),
            Action::MoveActive(Direction::Up),
            Action::MoveActive(Direction::Down),
            Action::NextPage,
            Action::PrevPage,
            Action::UnmuteActive,
            Action::ToggleGlobalMute,
            Action::ReloadActive,
            Action::ReloadAll,
            Action::ToggleFocus,
            Action::ExitFocus,
            Action::ToggleDetach,
            Action::CloseDetached,
            Action::GrowGrid,
            Action::ShrinkGrid,
            Action::ToggleNativeControls,
            Action::ToggleFullscreen,
            Action::ReloadConfig,
            Action::Quit,
        ]
    }
}
