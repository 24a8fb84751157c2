use std::path::PathBuf;

use crate::id::{SurfaceId, TileId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures reported by an embedded content surface.
///
/// These never leave a tile session: the session logs them and lets the
/// health watchdog decide whether a reload is needed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface not found: {0}")]
    NotFound(SurfaceId),

    #[error("surface unavailable: {0}")]
    Unavailable(String),

    #[error("surface backend error: {0}")]
    Backend(String),
}

/// Refusals from the detach controller. No state changes when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetachError {
    #[error("detach refused: {max} surfaces already detached")]
    CapacityReached { max: usize },

    #[error("no live tile {0}")]
    UnknownTile(TileId),

    #[error("tile {0} is already detached")]
    AlreadyDetached(TileId),

    #[error("tile {0} is not detached")]
    NotDetached(TileId),
}

#[derive(Debug, thiserror::Error)]
pub enum WallError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Detach(#[from] DetachError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::NotFound(SurfaceId(3));
        assert_eq!(err.to_string(), "surface not found: surface-3");

        let err = SurfaceError::Backend("script eval failed".into());
        assert_eq!(err.to_string(), "surface backend error: script eval failed");
    }

    #[test]
    fn detach_error_display() {
        let err = DetachError::CapacityReached { max: 4 };
        assert_eq!(err.to_string(), "detach refused: 4 surfaces already detached");

        let err = DetachError::AlreadyDetached(TileId(9));
        assert_eq!(err.to_string(), "tile tile-9 is already detached");
    }

    #[test]
    fn wall_error_from_detach() {
        let err: WallError = DetachError::CapacityReached { max: 4 }.into();
        assert!(matches!(err, WallError::Detach(_)));
        assert!(err.to_string().contains("already detached"));
    }

    #[test]
    fn wall_error_from_config() {
        let err: WallError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, WallError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn wall_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WallError = io_err.into();
        assert!(matches!(err, WallError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn wall_error_other_variants() {
        let err = WallError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = WallError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
