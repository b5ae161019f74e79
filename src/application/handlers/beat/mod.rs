//! Beat handlers.

mod create_beat;

pub use create_beat::{CreateBeatHandler, CreateBeatSettings};
