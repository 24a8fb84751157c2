mod channel;
mod core;

pub use self::core::*;
pub use channel::*;
