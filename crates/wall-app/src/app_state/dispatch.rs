//! Action dispatch: maps keybind actions to wall commands and app behavior.

use std::time::Instant;

use winit::window::Fullscreen;

use wall_common::{Action, GroupFilter};
use wall_config::schema::WallSection;
use wall_core::WallCommand;

use super::core::NewsWallApp;

/// The wall command an action stands for.
///
/// `None` for window-level actions and for digits with no configured group.
pub(super) fn wall_command(action: &Action, wall: &WallSection) -> Option<WallCommand> {
    let cmd = match action {
        Action::ActivateSlot(n) => WallCommand::ActivateSlot((*n as usize).checked_sub(1)?),
        Action::MoveActive(direction) => WallCommand::MoveActive(*direction),
        Action::ReloadActive => WallCommand::ReloadActive,
        Action::ReloadAll => WallCommand::ReloadAll,
        Action::ToggleGlobalMute => WallCommand::ToggleGlobalMute,
        Action::UnmuteActive => WallCommand::UnmuteActive,
        Action::NextPage => WallCommand::NextPage,
        Action::PrevPage => WallCommand::PrevPage,
        Action::SetGroup(0) => WallCommand::SetGroupFilter(GroupFilter::All),
        Action::SetGroup(n) => {
            WallCommand::SetGroupFilter(GroupFilter::Group(wall.group_for_digit(*n)?.to_string()))
        }
        Action::ToggleFocus => WallCommand::ToggleFocusActive,
        Action::ExitFocus => WallCommand::ExitFocus,
        Action::ToggleDetach => WallCommand::ToggleDetachActive,
        Action::GrowGrid => WallCommand::ResizeGrid(1),
        Action::ShrinkGrid => WallCommand::ResizeGrid(-1),
        Action::ToggleNativeControls => WallCommand::ToggleNativeControls,
        Action::CloseDetached
        | Action::ToggleFullscreen
        | Action::ReloadConfig
        | Action::Quit
        | Action::None => return None,
    };
    Some(cmd)
}

impl NewsWallApp {
    /// Dispatch a resolved action.
    pub(super) fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching action: {}", action.label());

        match action {
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::ReloadConfig => self.reload_config_now(),
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            Action::CloseDetached => self.close_detached(),
            Action::None => {}
            other => match wall_command(&other, &self.config.wall) {
                Some(cmd) => self.execute(cmd),
                None => tracing::debug!("{} has nothing to do", other.label()),
            },
        }

        self.refresh();
    }

    /// Run a command against the wall. Refusals surface through wall events.
    pub(super) fn execute(&mut self, cmd: WallCommand) {
        let Some(wall) = self.wall.as_mut() else {
            return;
        };
        if let Err(e) = wall.execute(cmd, Instant::now()) {
            tracing::debug!("wall command refused: {e}");
        }
    }

    /// Close the active tile's floating surface, or else the newest one.
    fn close_detached(&mut self) {
        let target = self.wall.as_ref().and_then(|w| {
            let detached = w.detached();
            w.active()
                .filter(|tile| detached.is_detached(*tile))
                .or_else(|| detached.surfaces().last().map(|d| d.tile))
        });
        if let Some(tile) = target {
            self.execute(WallCommand::CloseDetached(tile));
        }
    }

    fn toggle_fullscreen(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let next = match window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        window.set_fullscreen(next);
    }
}
