//! Focus timer state machine
//!
//! Three modes (focus, short break, long break), a one-second countdown,
//! and lifetime counters that survive across runs. The engine is purely
//! synchronous: the front end drives `tick()` once per second while the
//! timer runs, and every operation returns the notifications it produced
//! so any front end can subscribe without the engine knowing about it.

use crate::store::StateStore;

const KEY_FOCUS_SESSIONS: &str = "focus_sessions";
const KEY_TOTAL_MINUTES: &str = "total_minutes";

/// Timer mode, each with a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// 25 minutes of focused work
    #[default]
    Focus,
    /// 5 minute breather
    ShortBreak,
    /// 15 minutes to recharge
    LongBreak,
}

impl SessionMode {
    pub const ALL: [SessionMode; 3] = [
        SessionMode::Focus,
        SessionMode::ShortBreak,
        SessionMode::LongBreak,
    ];

    /// Full countdown duration for this mode, in seconds
    pub fn duration_seconds(&self) -> u32 {
        match self {
            SessionMode::Focus => 25 * 60,
            SessionMode::ShortBreak => 5 * 60,
            SessionMode::LongBreak => 15 * 60,
        }
    }

    /// Full countdown duration for this mode, in whole minutes
    pub fn minutes(&self) -> u32 {
        self.duration_seconds() / 60
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Focus => "focus",
            SessionMode::ShortBreak => "short",
            SessionMode::LongBreak => "long",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "focus" => Some(SessionMode::Focus),
            "short" => Some(SessionMode::ShortBreak),
            "long" => Some(SessionMode::LongBreak),
            _ => None,
        }
    }

    /// Display name for mode indicators
    pub fn label(&self) -> &'static str {
        match self {
            SessionMode::Focus => "Focus Time",
            SessionMode::ShortBreak => "Short Break",
            SessionMode::LongBreak => "Long Break",
        }
    }

    /// The mode a front end would suggest after this one completes
    pub fn follow_up(&self) -> SessionMode {
        match self {
            SessionMode::Focus => SessionMode::ShortBreak,
            SessionMode::ShortBreak | SessionMode::LongBreak => SessionMode::Focus,
        }
    }
}

/// Where the countdown currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not counting; remaining time is either full or spent
    #[default]
    Idle,
    /// Counting down, one tick per second
    Running,
    /// Suspended mid-countdown; `start()` resumes exactly where it left off
    Paused,
}

/// Notification emitted by an engine operation, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// One second elapsed while running
    Tick { remaining_seconds: u32 },
    /// Mode switched; remaining time was reset to the new full duration
    ModeChanged {
        mode: SessionMode,
        duration_seconds: u32,
    },
    /// A countdown reached zero
    Completed { mode: SessionMode },
    /// The countdown started or stopped
    RunStateChanged { running: bool },
}

/// Lifetime counters, persisted across engine instances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifetimeStats {
    /// Completed focus sessions (breaks don't count)
    pub focus_sessions: u32,
    /// Total focused minutes; only fully completed sessions are credited
    pub total_minutes: u32,
}

impl LifetimeStats {
    /// Load counters from the store, treating anything unparsable as zero
    fn load(store: &dyn StateStore) -> Self {
        Self {
            focus_sessions: read_counter(store, KEY_FOCUS_SESSIONS),
            total_minutes: read_counter(store, KEY_TOTAL_MINUTES),
        }
    }

    /// Write both counters back; failures are logged, never raised
    fn persist(&self, store: &dyn StateStore) {
        let values = [
            (KEY_FOCUS_SESSIONS, self.focus_sessions),
            (KEY_TOTAL_MINUTES, self.total_minutes),
        ];
        for (key, value) in values {
            if let Err(err) = store.set(key, &value.to_string()) {
                tracing::warn!("failed to persist {}: {:#}", key, err);
            }
        }
    }
}

fn read_counter(store: &dyn StateStore, key: &str) -> u32 {
    match store.get(key) {
        None => 0,
        Some(raw) => match raw.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!("ignoring non-numeric stored value for {}: {:?}", key, raw);
                0
            }
        },
    }
}

/// The focus timer engine
///
/// Owns all timer state; front ends only talk to it through the
/// operations below and the events they return. Invalid intents (starting
/// a spent timer, pausing an idle one) are silent no-ops.
pub struct TimerEngine {
    mode: SessionMode,
    remaining: u32,
    phase: Phase,
    stats: LifetimeStats,
    store: Box<dyn StateStore>,
}

impl TimerEngine {
    /// Create an engine in focus mode, idle at the full 25 minutes,
    /// with lifetime counters recovered from the store
    pub fn new(store: Box<dyn StateStore>) -> Self {
        let stats = LifetimeStats::load(store.as_ref());
        let mode = SessionMode::default();

        Self {
            mode,
            remaining: mode.duration_seconds(),
            phase: Phase::Idle,
            stats,
            store,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn stats(&self) -> LifetimeStats {
        self.stats
    }

    /// Begin (or resume) the countdown. No-op if already running or if
    /// there is nothing left to run.
    pub fn start(&mut self) -> Vec<EngineEvent> {
        if self.phase == Phase::Running || self.remaining == 0 {
            return Vec::new();
        }

        self.phase = Phase::Running;
        vec![EngineEvent::RunStateChanged { running: true }]
    }

    /// Suspend the countdown, keeping the remaining time. No-op unless
    /// running.
    pub fn pause(&mut self) -> Vec<EngineEvent> {
        if self.phase != Phase::Running {
            return Vec::new();
        }

        self.phase = Phase::Paused;
        vec![EngineEvent::RunStateChanged { running: false }]
    }

    /// Stop the countdown and restore the full duration of the current
    /// mode. Always succeeds.
    pub fn reset(&mut self) -> Vec<EngineEvent> {
        let events = self.stop();
        self.remaining = self.mode.duration_seconds();
        events
    }

    /// Switch mode, stopping any countdown and restoring the new mode's
    /// full duration. The engine never asks for confirmation; callers
    /// that want to guard an in-flight session check `is_running()`
    /// before invoking.
    pub fn select_mode(&mut self, mode: SessionMode) -> Vec<EngineEvent> {
        let mut events = self.stop();
        self.mode = mode;
        self.remaining = mode.duration_seconds();
        events.push(EngineEvent::ModeChanged {
            mode,
            duration_seconds: mode.duration_seconds(),
        });
        events
    }

    /// Advance the countdown by one second. The driver calls this once
    /// per second while the timer runs; pulses arriving in any other
    /// phase are ignored, so a late tick after pause/reset/completion
    /// can never fire.
    pub fn tick(&mut self) -> Vec<EngineEvent> {
        if self.phase != Phase::Running {
            return Vec::new();
        }

        self.remaining = self.remaining.saturating_sub(1);
        let mut events = vec![EngineEvent::Tick {
            remaining_seconds: self.remaining,
        }];

        if self.remaining == 0 {
            self.phase = Phase::Idle;
            if self.mode == SessionMode::Focus {
                self.stats.focus_sessions += 1;
                self.stats.total_minutes += self.mode.minutes();
                self.stats.persist(self.store.as_ref());
            }
            events.push(EngineEvent::Completed { mode: self.mode });
            events.push(EngineEvent::RunStateChanged { running: false });
        }

        events
    }

    /// Halt any countdown, reporting the stop if one was in flight
    fn stop(&mut self) -> Vec<EngineEvent> {
        let was_running = self.phase == Phase::Running;
        self.phase = Phase::Idle;
        if was_running {
            vec![EngineEvent::RunStateChanged { running: false }]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::rc::Rc;

    fn engine() -> TimerEngine {
        TimerEngine::new(Box::new(MemoryStore::new()))
    }

    /// Tick `n` times, collecting every event emitted
    fn drive(engine: &mut TimerEngine, n: u32) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(engine.tick());
        }
        events
    }

    fn tick_count(events: &[EngineEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Tick { .. }))
            .count()
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.mode(), SessionMode::Focus);
        assert_eq!(engine.remaining_seconds(), 1500);
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_running());
        assert_eq!(engine.stats(), LifetimeStats::default());
    }

    #[test]
    fn test_mode_durations() {
        assert_eq!(SessionMode::Focus.duration_seconds(), 1500);
        assert_eq!(SessionMode::ShortBreak.duration_seconds(), 300);
        assert_eq!(SessionMode::LongBreak.duration_seconds(), 900);
        assert_eq!(SessionMode::Focus.minutes(), 25);
    }

    #[test]
    fn test_mode_name_roundtrip() {
        for mode in SessionMode::ALL {
            assert_eq!(SessionMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(SessionMode::from_str("nap"), None);
    }

    #[test]
    fn test_select_mode_resets_and_stops() {
        for mode in SessionMode::ALL {
            let mut engine = engine();
            engine.start();
            engine.tick();

            let events = engine.select_mode(mode);
            assert_eq!(engine.mode(), mode);
            assert_eq!(engine.remaining_seconds(), mode.duration_seconds());
            assert!(!engine.is_running());
            assert!(events.contains(&EngineEvent::RunStateChanged { running: false }));
            assert!(events.contains(&EngineEvent::ModeChanged {
                mode,
                duration_seconds: mode.duration_seconds(),
            }));
        }
    }

    #[test]
    fn test_start_emits_run_state() {
        let mut engine = engine();
        let events = engine.start();
        assert_eq!(events, vec![EngineEvent::RunStateChanged { running: true }]);
        assert!(engine.is_running());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut engine = engine();
        engine.start();
        assert!(engine.start().is_empty());
        assert!(engine.is_running());
    }

    #[test]
    fn test_start_at_zero_is_noop() {
        let mut engine = engine();
        engine.select_mode(SessionMode::ShortBreak);
        engine.start();
        drive(&mut engine, 300);
        assert_eq!(engine.remaining_seconds(), 0);

        let events = engine.start();
        assert!(events.is_empty());
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_ticks_decrement_one_per_second() {
        let mut engine = engine();
        engine.start();

        let events = drive(&mut engine, 10);
        assert_eq!(engine.remaining_seconds(), 1490);
        assert_eq!(tick_count(&events), 10);

        // Each tick reports the value after its own decrement
        let remaining: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::Tick { remaining_seconds } => Some(*remaining_seconds),
                _ => None,
            })
            .collect();
        assert_eq!(remaining, (1490..1500).rev().collect::<Vec<u32>>());
    }

    #[test]
    fn test_tick_while_idle_or_paused_is_noop() {
        let mut engine = engine();
        assert!(engine.tick().is_empty());

        engine.start();
        engine.tick();
        engine.pause();
        assert!(engine.tick().is_empty());
        assert_eq!(engine.remaining_seconds(), 1499);
    }

    #[test]
    fn test_pause_resume_keeps_remaining() {
        let mut engine = engine();
        engine.start();
        drive(&mut engine, 3);

        let events = engine.pause();
        assert_eq!(
            events,
            vec![EngineEvent::RunStateChanged { running: false }]
        );
        assert_eq!(engine.remaining_seconds(), 1497);
        assert_eq!(engine.phase(), Phase::Paused);

        // Pause while paused stays silent
        assert!(engine.pause().is_empty());

        engine.start();
        engine.tick();
        assert_eq!(engine.remaining_seconds(), 1496);
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut engine = engine();
        engine.start();
        drive(&mut engine, 42);

        let events = engine.reset();
        assert_eq!(
            events,
            vec![EngineEvent::RunStateChanged { running: false }]
        );
        assert_eq!(engine.remaining_seconds(), 1500);
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.tick().is_empty());

        // Reset while idle succeeds without noise
        assert!(engine.reset().is_empty());
        assert_eq!(engine.remaining_seconds(), 1500);
    }

    #[test]
    fn test_completion_event_order() {
        let mut engine = engine();
        engine.select_mode(SessionMode::ShortBreak);
        engine.start();
        drive(&mut engine, 299);

        let events = engine.tick();
        assert_eq!(
            events,
            vec![
                EngineEvent::Tick {
                    remaining_seconds: 0
                },
                EngineEvent::Completed {
                    mode: SessionMode::ShortBreak
                },
                EngineEvent::RunStateChanged { running: false },
            ]
        );
    }

    #[test]
    fn test_completion_fires_once_and_ticking_stops() {
        let mut engine = engine();
        engine.select_mode(SessionMode::ShortBreak);
        engine.start();

        // Keep pulsing well past zero, as a real clock would
        let events = drive(&mut engine, 350);
        let completions = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Completed { .. }))
            .count();
        assert_eq!(completions, 1);
        assert_eq!(tick_count(&events), 300);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_focus_completion_credits_stats() {
        let mut engine = engine();
        engine.select_mode(SessionMode::Focus);
        engine.start();

        let events = drive(&mut engine, 1500);
        let completions: Vec<&EngineEvent> = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Completed { .. }))
            .collect();
        assert_eq!(
            completions,
            vec![&EngineEvent::Completed {
                mode: SessionMode::Focus
            }]
        );

        let stats = engine.stats();
        assert_eq!(stats.focus_sessions, 1);
        assert_eq!(stats.total_minutes, 25);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_break_completion_leaves_stats() {
        let mut engine = engine();
        engine.select_mode(SessionMode::LongBreak);
        engine.start();
        drive(&mut engine, 900);

        assert_eq!(engine.stats(), LifetimeStats::default());
    }

    #[test]
    fn test_partial_session_credits_nothing() {
        let mut engine = engine();
        engine.start();
        drive(&mut engine, 1499);
        engine.reset();

        assert_eq!(engine.stats(), LifetimeStats::default());
    }

    #[test]
    fn test_completion_persists_to_store() {
        let store = Rc::new(MemoryStore::new());

        let mut engine = TimerEngine::new(Box::new(Rc::clone(&store)));
        engine.start();
        drive(&mut engine, 1500);

        assert_eq!(store.get("focus_sessions").as_deref(), Some("1"));
        assert_eq!(store.get("total_minutes").as_deref(), Some("25"));

        // A fresh engine on the same store picks the counters up
        let revived = TimerEngine::new(Box::new(Rc::clone(&store)));
        assert_eq!(revived.stats().focus_sessions, 1);
        assert_eq!(revived.stats().total_minutes, 25);
    }

    #[test]
    fn test_corrupt_persisted_state_defaults_to_zero() {
        let store = Rc::new(MemoryStore::new());
        store.set("focus_sessions", "3").unwrap();
        store.set("total_minutes", "bad").unwrap();

        let engine = TimerEngine::new(Box::new(store));
        assert_eq!(engine.stats().focus_sessions, 3);
        assert_eq!(engine.stats().total_minutes, 0);
    }

    #[test]
    fn test_stats_accumulate_across_sessions() {
        let mut engine = engine();
        for _ in 0..2 {
            engine.select_mode(SessionMode::Focus);
            engine.start();
            drive(&mut engine, 1500);
        }

        assert_eq!(engine.stats().focus_sessions, 2);
        assert_eq!(engine.stats().total_minutes, 50);
    }

    #[test]
    fn test_follow_up_suggestions() {
        assert_eq!(SessionMode::Focus.follow_up(), SessionMode::ShortBreak);
        assert_eq!(SessionMode::ShortBreak.follow_up(), SessionMode::Focus);
        assert_eq!(SessionMode::LongBreak.follow_up(), SessionMode::Focus);
    }
}
