//! Completion feedback
//!
//! Best-effort desktop notification when a countdown finishes. The timer
//! keeps working without one, so every failure path here is silent.

use anyhow::{bail, Result};
use std::process::Command;

use crate::engine::SessionMode;

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// macOS osascript
    Osascript,
    /// Linux notify-send
    NotifySend,
    /// No notifier available
    None,
}

impl Backend {
    /// Detect the best available backend for the current platform
    pub fn detect() -> Self {
        #[cfg(target_os = "macos")]
        {
            return Self::Osascript;
        }

        #[cfg(target_os = "linux")]
        {
            if Self::command_exists("notify-send") {
                return Self::NotifySend;
            }
            return Self::None;
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            Self::None
        }
    }

    /// Check if a command exists
    #[cfg(target_os = "linux")]
    fn command_exists(cmd: &str) -> bool {
        Command::new("which")
            .arg(cmd)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn send(&self, title: &str, message: &str) -> Result<()> {
        match self {
            Self::Osascript => {
                let title = title.replace('"', r#"\""#);
                let message = message.replace('"', r#"\""#);
                let script = format!(
                    r#"display notification "{}" with title "{}" sound name "default""#,
                    message, title
                );
                let status = Command::new("osascript").args(["-e", &script]).status()?;
                if !status.success() {
                    bail!("osascript failed with status: {}", status);
                }
                Ok(())
            }
            Self::NotifySend => {
                let status = Command::new("notify-send")
                    .args(["--app-name", "pomo", title, message])
                    .status()?;
                if !status.success() {
                    bail!("notify-send failed with status: {}", status);
                }
                Ok(())
            }
            Self::None => Ok(()),
        }
    }
}

/// Announce a finished countdown
pub fn session_complete(mode: SessionMode) {
    let message = match mode {
        SessionMode::Focus => "Great work! Time for a break",
        SessionMode::ShortBreak | SessionMode::LongBreak => "Break complete! Ready to focus?",
    };

    if let Err(err) = Backend::detect().send(&format!("{} complete", mode.label()), message) {
        tracing::warn!("desktop notification failed: {:#}", err);
    }
}
