//! Core state machine for the birthday greeting app.
//!
//! Everything timing-sensitive lives here as a pure, synchronous state
//! machine: applying an [`Input`] returns the [`Effect`]s the embedding
//! layer must carry out (schedule a timer, play the chime, navigate).
//! The core never sleeps and owns no timers, which keeps the whole
//! message timeline deterministically testable.

pub mod messages;
pub mod route;
pub mod sequencer;
pub mod timings;

pub use messages::MessageList;
pub use route::Route;
pub use sequencer::{Choice, Effect, Input, Phase, Sequencer, Timer};
pub use timings::Timings;
