//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use wall_common::FloatId;
use wall_core::WallCommand;

use crate::input::{normalize_winit_key, KeyCombo};

use super::core::NewsWallApp;

impl ApplicationHandler for NewsWallApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.refresh();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(float) = self.floats.by_window(window_id) {
            self.floating_window_event(float, event);
        } else {
            self.wall_window_event(event_loop, event);
        }

        if self.should_exit {
            self.shutdown();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl NewsWallApp {
    fn wall_window_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_surface_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_surface_bounds();
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(ref w) = self.window {
                    let logical = position.to_logical::<f64>(w.scale_factor());
                    self.cursor_pos = (logical.x, logical.y);
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.handle_click();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    /// A floating window's close button closes the floating surface. Focusing
    /// the window activates its tile, so wall keys act on it.
    fn floating_window_event(&mut self, float: FloatId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_floating_window(float);
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_floating_bounds();
            }

            WindowEvent::Focused(true) => {
                if let Some(tile) = self.floats.get(float).map(|w| w.tile) {
                    self.execute(WallCommand::Activate(tile));
                    self.refresh();
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    /// Resolve a key press against the registry and dispatch its action.
    /// Repeats are ignored so a held key does not reload in a loop.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        let key_name = match &event.logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&key_name),
        );

        if let Some(action) = self.registry.lookup(&combo).cloned() {
            self.dispatch(action);
        }
    }
}
