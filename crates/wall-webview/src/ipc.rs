//! IPC protocol between the player pages and Rust.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the page calls `window.ipc.postMessage(JSON.stringify({...}))`
//!   with a `type` tag and the generation it was loaded with.
//! - **Rust -> JS**: Rust calls `evaluate_script` on the `window.newswall`
//!   functions the page defines.

use serde::Deserialize;
use wall_common::SurfaceId;
use wall_core::{SurfaceCommand, SurfaceEvent, SurfaceEventKind};

/// A pointer gesture on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Click,
    #[serde(rename = "dblclick")]
    DoubleClick,
}

/// A message posted by a player page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayerMessage {
    Ready {
        gen: u64,
    },
    Stats {
        gen: u64,
        #[serde(default)]
        time: Option<f64>,
        #[serde(default)]
        buf: Option<f64>,
    },
    Position {
        gen: u64,
        seq: u64,
        #[serde(default)]
        time: Option<f64>,
    },
    Gesture {
        gen: u64,
        kind: Gesture,
    },
}

impl PlayerMessage {
    /// Parse a raw IPC body. Unknown or malformed messages yield `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// The surface event this message reports, if it is one the wall consumes.
    pub fn into_surface_event(self, surface: SurfaceId) -> Option<SurfaceEvent> {
        let (generation, kind) = match self {
            PlayerMessage::Ready { gen } => (gen, SurfaceEventKind::Ready),
            PlayerMessage::Stats { gen, time, buf } => (
                gen,
                SurfaceEventKind::Stats {
                    position: time.filter(|t| t.is_finite()).unwrap_or(-1.0),
                    buffered_fraction: buf.filter(|b| b.is_finite()).unwrap_or(0.0),
                },
            ),
            PlayerMessage::Position { gen, seq, time } => (
                gen,
                SurfaceEventKind::Position {
                    seq,
                    position: time.filter(|t| t.is_finite() && *t >= 0.0),
                },
            ),
            PlayerMessage::Gesture { .. } => return None,
        };
        Some(SurfaceEvent {
            surface,
            generation,
            kind,
        })
    }
}

/// Script that forwards a command to the page's player.
///
/// `Load` is not a script: it replaces the page and is handled by the host.
pub fn command_script(command: SurfaceCommand) -> Option<String> {
    let call = match command {
        SurfaceCommand::Load { .. } => return None,
        SurfaceCommand::Play => "play()".to_string(),
        SurfaceCommand::Pause => "pause()".to_string(),
        SurfaceCommand::Mute(on) => format!("mute({on})"),
    };
    Some(guarded(&call))
}

/// Script asking the page to post its playback position tagged with `seq`.
pub fn position_script(seq: u64) -> String {
    guarded(&format!("position({seq})"))
}

/// Calls made before the page has booted are dropped.
fn guarded(call: &str) -> String {
    format!("window.newswall && window.newswall.{call};")
}
