//! Input pipeline: platform-agnostic events and their conversion into
//! queued selection intents.

pub mod event;
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputIntent, InputProcessor, KeyAction};
