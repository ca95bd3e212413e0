#![forbid(unsafe_code)]

//! Domain core of the CloudNet Quest drag-and-drop quiz.
//!
//! Pure, synchronous logic only: the validated content model, buffered
//! drop-zone hit-testing, and the [`session::GameSession`] state machine.
//! Rendering, audio, and content acquisition live elsewhere and talk to this
//! crate through plain values and the events it returns.

pub mod error;
pub mod geometry;
pub mod model;
pub mod session;
pub mod time;

pub use error::Error;
pub use time::Clock;
