pub mod emote_handlers;
pub mod state_handlers;

pub use emote_handlers::*;
pub use state_handlers::*;
