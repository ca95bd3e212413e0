#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod events;
pub mod game_loop;

pub use quest_core::Clock;

pub use content::{bank_from_json, bank_from_path, builtin_bank};
pub use error::{ContentError, GameServiceError};
pub use events::{EventDispatcher, EventSink, LogSink, NullSink, SinkError};
pub use game_loop::{DropReport, DropTarget, GameLoopService};
