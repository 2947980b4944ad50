//! pomo - Focus timer with pomodoro-style modes
//!
//! "Protect the sacred space of deep work."
//!
//! A three-mode countdown (25 minute focus, 5 minute short break,
//! 15 minute long break) with lifetime statistics that survive across
//! runs:
//! - Completed focus sessions
//! - Total focused minutes (full sessions only; abandoning a countdown
//!   credits nothing)
//!
//! The timer itself is a synchronous state machine ([`TimerEngine`])
//! driven one tick per second by whatever front end hosts it; the bundled
//! binary drives it from a ratatui event loop.

pub mod engine;
pub mod notify;
pub mod store;

pub use engine::{EngineEvent, LifetimeStats, Phase, SessionMode, TimerEngine};
pub use store::{FileStore, MemoryStore, StateStore};
