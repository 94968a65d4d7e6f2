//! Topic-based event bus for battle events.
//!
//! Core events are drained once per tick and published to the topic they
//! belong to, so consumers subscribe only to what they render.

mod bus;

pub use bus::{EventBus, Topic};
