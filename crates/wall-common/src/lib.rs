pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use actions::{Action, Direction};
pub use errors::{ConfigError, DetachError, SurfaceError, WallError};
pub use events::{Event, EventBus};
pub use id::{new_id, ChannelId, FloatId, SurfaceId, TileId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{Channel, GroupFilter, Rect};

pub type Result<T> = std::result::Result<T, WallError>;
