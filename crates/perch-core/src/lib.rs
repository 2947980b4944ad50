//! Perch Core - Shared functionality for all perch desk tools
//!
//! Small companions for a workday: a focus timer, a mood journal, and
//! a flashcard generator. This crate holds the plumbing they share.

pub mod config;
pub mod format;
pub mod paths;

pub use config::Config;
pub use paths::Paths;
