//! Application state for the interactive timer
//!
//! Owns the engine and turns its events into what the view needs: a
//! status line, desktop notifications, and two yes/no prompts (confirm
//! abandoning a running countdown, suggest the follow-up mode after
//! completion). The engine never blocks on a question; both prompts
//! live entirely here.

use perch_core::Config;

use pomo::engine::{EngineEvent, SessionMode, TimerEngine};
use pomo::notify;

/// A yes/no question overlaid on the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Timer is running; really switch to this mode?
    ConfirmSwitch(SessionMode),
    /// A countdown finished; offer the suggested next mode
    SuggestFollowUp(SessionMode),
}

/// Application state
pub struct App {
    pub engine: TimerEngine,
    pub config: Config,
    pub status: String,
    pub prompt: Option<Prompt>,
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: TimerEngine, config: Config) -> Self {
        Self {
            engine,
            config,
            status: "Ready to focus?".to_string(),
            prompt: None,
            should_quit: false,
        }
    }

    /// Space bar: start when stopped, pause when running
    pub fn toggle(&mut self) {
        let events = if self.engine.is_running() {
            self.engine.pause()
        } else {
            self.engine.start()
        };
        self.apply(events);
    }

    pub fn reset(&mut self) {
        let events = self.engine.reset();
        self.apply(events);
        self.status = "Ready to focus?".to_string();
    }

    /// Ask for a mode switch; a running countdown gets a confirmation
    /// prompt first
    pub fn request_mode(&mut self, mode: SessionMode) {
        if self.engine.is_running() {
            self.prompt = Some(Prompt::ConfirmSwitch(mode));
        } else {
            self.switch_mode(mode);
        }
    }

    /// Answer the active prompt with yes
    pub fn confirm(&mut self) {
        match self.prompt.take() {
            Some(Prompt::ConfirmSwitch(mode)) | Some(Prompt::SuggestFollowUp(mode)) => {
                self.switch_mode(mode)
            }
            None => {}
        }
    }

    /// Answer the active prompt with no
    pub fn dismiss(&mut self) {
        self.prompt = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// One second elapsed on the wall clock
    pub fn tick(&mut self) {
        let events = self.engine.tick();
        self.apply(events);
    }

    fn switch_mode(&mut self, mode: SessionMode) {
        let events = self.engine.select_mode(mode);
        self.apply(events);
        self.status = idle_status(mode).to_string();
    }

    fn apply(&mut self, events: Vec<EngineEvent>) {
        for event in events {
            match event {
                EngineEvent::Completed { mode } => {
                    self.status = match mode {
                        SessionMode::Focus => "Great work! Time for a break".to_string(),
                        SessionMode::ShortBreak | SessionMode::LongBreak => {
                            "Break complete! Ready to focus?".to_string()
                        }
                    };
                    if self.config.notifications {
                        notify::session_complete(mode);
                    }
                    self.prompt = Some(Prompt::SuggestFollowUp(mode.follow_up()));
                }
                EngineEvent::RunStateChanged { running: true } => {
                    self.status = running_status(self.engine.mode()).to_string();
                }
                // The view reads remaining time and mode straight off the
                // engine on every frame
                EngineEvent::Tick { .. }
                | EngineEvent::ModeChanged { .. }
                | EngineEvent::RunStateChanged { running: false } => {}
            }
        }
    }
}

fn running_status(mode: SessionMode) -> &'static str {
    match mode {
        SessionMode::Focus => "Focus mode activated",
        SessionMode::ShortBreak => "Take a quick break",
        SessionMode::LongBreak => "Relax and recharge",
    }
}

fn idle_status(mode: SessionMode) -> &'static str {
    match mode {
        SessionMode::Focus => "Ready to focus?",
        SessionMode::ShortBreak | SessionMode::LongBreak => "Time for a breather",
    }
}
