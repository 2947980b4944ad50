//! mood - Daily mood journal
//!
//! One entry per day: a mood and an optional note. History is browsable
//! and a "wrapped" view summarizes the last week, month, or year —
//! counts per mood, the dominant mood, and the current logging streak.

pub mod entry;
pub mod store;
pub mod wrapped;

pub use entry::{Mood, MoodEntry};
pub use store::MoodStore;
pub use wrapped::{Period, Wrapped};
