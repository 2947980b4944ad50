//! pomo - Focus timer with pomodoro-style modes
//!
//! "Protect the sacred space of deep work."
//!
//! Usage:
//!   pomo                        Open the interactive timer
//!   pomo run [--mode MODE]      Open the timer in a specific mode
//!   pomo stats                  Show lifetime statistics
//!   pomo modes                  List modes and their durations

mod app;
mod ui;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use perch_core::{format, Config, Paths};
use pomo::engine::{SessionMode, TimerEngine};
use pomo::store::FileStore;

use app::App;

/// pomo - Focus timer with pomodoro-style modes
#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "Focus timer with pomodoro-style modes and lifetime statistics")]
#[command(version)]
#[command(after_help = r#"MODES:
    focus     25 minutes of focused work
    short      5 minute breather
    long      15 minutes to recharge

KEYS (interactive timer):
    space     start / pause
    r         reset the countdown
    f s l     switch mode (asks first if the timer is running)
    y n       answer a prompt
    q         quit

EXAMPLES:
    pomo                    # Open the timer in focus mode
    pomo run --mode short   # Open the timer on a short break
    pomo stats              # Lifetime sessions and focused minutes

Completed focus sessions are counted for life; breaks and abandoned
countdowns are not.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive timer
    #[command(alias = "r")]
    Run {
        /// Starting mode: focus, short, or long
        #[arg(long, default_value = "focus")]
        mode: String,
    },

    /// Show lifetime statistics
    #[command(alias = "st")]
    Stats,

    /// List modes and their durations
    Modes,
}

// ANSI color codes
const CYAN: &str = "\x1b[0;36m";
const BOLD: &str = "\x1b[1m";
const NC: &str = "\x1b[0m";

/// Check if stdout is a TTY and colors should be used
fn use_colors() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stdout())
}

/// Conditionally apply color
fn color(code: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", code, text, NC)
    } else {
        text.to_string()
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let paths = Paths::new();
    let store = FileStore::new(&paths.state("pomo"))?;
    let engine = TimerEngine::new(Box::new(store));

    match cli.command {
        Some(Commands::Run { mode }) => cmd_run(engine, &paths, Some(&mode)),
        Some(Commands::Stats) => cmd_stats(&engine),
        Some(Commands::Modes) => cmd_modes(),
        None => cmd_run(engine, &paths, None),
    }
}

/// Open the interactive timer
fn cmd_run(mut engine: TimerEngine, paths: &Paths, mode: Option<&str>) -> Result<()> {
    if let Some(name) = mode {
        let Some(mode) = SessionMode::from_str(name) else {
            bail!("Unknown mode: {} (expected focus, short, or long)", name);
        };
        engine.select_mode(mode);
    }

    let config = Config::load(&paths.config_file()).unwrap_or_default();
    let app = App::new(engine, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    // An open prompt captures the keyboard until answered
    if app.prompt.is_some() {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm(),
            KeyCode::Char('n') | KeyCode::Esc => app.dismiss(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char(' ') => app.toggle(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('f') => app.request_mode(SessionMode::Focus),
        KeyCode::Char('s') => app.request_mode(SessionMode::ShortBreak),
        KeyCode::Char('l') => app.request_mode(SessionMode::LongBreak),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Show lifetime statistics
fn cmd_stats(engine: &TimerEngine) -> Result<()> {
    let stats = engine.stats();
    let (hours, mins) = (stats.total_minutes / 60, stats.total_minutes % 60);

    println!("{}Lifetime Focus Statistics{}", BOLD, NC);
    println!();
    println!(
        "  {}  {}",
        color(CYAN, "Focus Sessions:"),
        stats.focus_sessions
    );
    println!(
        "  {}   {}h {}m",
        color(CYAN, "Total Focused:"),
        hours,
        mins
    );

    Ok(())
}

/// List modes and their durations
fn cmd_modes() -> Result<()> {
    println!("{}Modes{}", BOLD, NC);
    println!();
    for mode in SessionMode::ALL {
        println!(
            "  {}  {} ({})",
            color(CYAN, &format!("{:<6}", mode.as_str())),
            mode.label(),
            format::clock(mode.duration_seconds())
        );
    }

    Ok(())
}
