use tracing::debug;
use wall_common::{Channel, SurfaceError, SurfaceId, TileId};
use wall_core::{PollTicket, SurfaceCommand, SurfaceEvent, SurfaceHost};
use wry::raw_window_handle;

use crate::ipc::{self, PlayerMessage};
use crate::player;

use super::handlers::player_url;
use super::WebViewHost;

impl<W: raw_window_handle::HasWindowHandle> SurfaceHost for WebViewHost<W> {
    fn create(&mut self, tile: TileId, channel: &Channel) -> Result<SurfaceId, SurfaceError> {
        let (id, handle) = self
            .build_surface(tile, channel)
            .map_err(|e| SurfaceError::Backend(e.to_string()))?;
        self.surfaces.insert(id, handle);
        Ok(id)
    }

    fn destroy(&mut self, surface: SurfaceId) {
        self.remove(surface);
    }

    fn command(&mut self, surface: SurfaceId, command: SurfaceCommand) -> Result<(), SurfaceError> {
        let handle = self
            .surfaces
            .get_mut(&surface)
            .ok_or(SurfaceError::NotFound(surface))?;

        if let SurfaceCommand::Load {
            generation,
            show_controls,
        } = command
        {
            let source = player::resolve_source(&handle.channel.url);
            let html = player::player_html(&source, generation, show_controls);
            self.pages
                .lock()
                .map_err(|_| SurfaceError::Unavailable("page table poisoned".into()))?
                .insert(surface, html);
            handle.generation = generation;
            debug!(%surface, generation, ?source, "loading player page");
            return handle
                .webview
                .load_url(&player_url(surface, generation))
                .map_err(|e| SurfaceError::Backend(e.to_string()));
        }

        match ipc::command_script(command) {
            Some(script) => handle
                .evaluate_script(&script)
                .map_err(|e| SurfaceError::Backend(e.to_string())),
            None => Ok(()),
        }
    }

    fn query_position(&mut self, surface: SurfaceId, ticket: PollTicket) -> Result<(), SurfaceError> {
        let handle = self
            .surfaces
            .get(&surface)
            .ok_or(SurfaceError::NotFound(surface))?;
        if handle.generation != ticket.generation {
            return Err(SurfaceError::Unavailable(format!(
                "{surface} is on generation {}, query is for {}",
                handle.generation, ticket.generation
            )));
        }
        handle
            .evaluate_script(&ipc::position_script(ticket.seq))
            .map_err(|e| SurfaceError::Backend(e.to_string()))
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        let raw = match self.inbox.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return Vec::new(),
        };

        let mut events = Vec::with_capacity(raw.len());
        for (surface, body) in raw {
            if !self.surfaces.contains_key(&surface) {
                continue;
            }
            let Some(message) = PlayerMessage::from_json(&body) else {
                debug!(%surface, body_len = body.len(), "unrecognised IPC message");
                continue;
            };
            if let PlayerMessage::Gesture { kind, .. } = message {
                self.gestures.push((surface, kind));
                continue;
            }
            if let Some(event) = message.into_surface_event(surface) {
                events.push(event);
            }
        }
        events
    }
}
