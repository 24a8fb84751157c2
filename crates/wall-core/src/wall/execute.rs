use std::time::Instant;

use wall_common::DetachError;

use crate::commands::WallCommand;
use crate::source::ChannelSource;
use crate::surface::SurfaceHost;

use super::Wall;

impl<H: SurfaceHost, S: ChannelSource> Wall<H, S> {
    /// Run one control-surface command. Only detach refusals are errors.
    pub fn execute(&mut self, cmd: WallCommand, now: Instant) -> Result<(), DetachError> {
        tracing::debug!(?cmd, "wall command");
        match cmd {
            WallCommand::Activate(tile) => self.activate(tile),
            WallCommand::ActivateSlot(index) => self.activate_slot(index),
            WallCommand::MoveActive(direction) => self.move_active(direction),
            WallCommand::ReloadActive => self.reload_active(now),
            WallCommand::ReloadTile(tile) => self.reload_tile(tile, now),
            WallCommand::ReloadAll => self.reload_all(now),
            WallCommand::SetGlobalMute(on) => self.set_global_mute(on),
            WallCommand::ToggleGlobalMute => self.toggle_global_mute(),
            WallCommand::UnmuteActive => self.unmute_active(),
            WallCommand::NextPage => self.next_page(now),
            WallCommand::PrevPage => self.prev_page(now),
            WallCommand::LoadPage(page) => self.load_page(page, now),
            WallCommand::SetGroupFilter(filter) => self.set_group_filter(filter, now),
            WallCommand::ToggleFocus(tile) => self.toggle_focus(tile, now),
            WallCommand::ToggleFocusActive => {
                if let Some(tile) = self.focus.focused().or(self.activation.active()) {
                    self.toggle_focus(tile, now);
                }
            }
            WallCommand::ExitFocus => self.exit_focus(now),
            WallCommand::ToggleDetach(tile) => return self.toggle_detach(tile, now),
            WallCommand::ToggleDetachActive => {
                if let Some(tile) = self.activation.active() {
                    return self.toggle_detach(tile, now);
                }
            }
            WallCommand::CloseDetached(tile) => return self.close_detached(tile, now),
            WallCommand::ResizeGrid(delta) => self.resize_grid(delta, now),
            WallCommand::ToggleNativeControls => self.toggle_native_controls(now),
        }
        Ok(())
    }
}
