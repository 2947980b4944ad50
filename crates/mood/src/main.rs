//! mood - Daily mood journal
//!
//! Usage:
//!   mood log <MOOD> [--note TEXT]   Log (or change) today's mood
//!   mood today                      Show today's entry
//!   mood history [DAYS]             Show recent entries (default: 7)
//!   mood wrapped [--period PERIOD]  Weekly/monthly/yearly summary

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mood::entry::{Mood, MoodEntry};
use mood::store::MoodStore;
use mood::wrapped::{Period, Wrapped};
use perch_core::{format, Paths};

/// mood - Daily mood journal
#[derive(Parser)]
#[command(name = "mood")]
#[command(about = "Daily mood journal with wrapped-style statistics")]
#[command(version)]
#[command(after_help = r#"MOODS:
    amazing  happy  okay  sad  anxious

EXAMPLES:
    mood log happy                    # Log today's mood
    mood log sad --note "rough day"   # With a note
    mood history 30                   # Last month of entries
    mood wrapped --period yearly      # Year in review

One entry per day; logging again replaces today's entry.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log (or change) today's mood
    #[command(alias = "l")]
    Log {
        /// One of: amazing, happy, okay, sad, anxious
        mood: String,

        /// A short note about the day
        #[arg(long)]
        note: Option<String>,
    },

    /// Show today's entry
    #[command(alias = "t")]
    Today,

    /// Show recent entries
    #[command(alias = "h")]
    History {
        /// Number of days to look back
        #[arg(default_value = "7")]
        days: u32,
    },

    /// Show a summary of the recent window
    #[command(alias = "w")]
    Wrapped {
        /// Window: weekly, monthly, or yearly
        #[arg(long, default_value = "weekly")]
        period: String,
    },
}

// ANSI color codes
const GREEN: &str = "\x1b[0;32m";
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
    let store = MoodStore::new(&paths.state("mood"))?;
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Log { mood, note }) => cmd_log(&store, today, &mood, note),
        Some(Commands::Today) => cmd_today(&store, today),
        Some(Commands::History { days }) => cmd_history(&store, today, days),
        Some(Commands::Wrapped { period }) => cmd_wrapped(&store, today, &period),
        None => cmd_today(&store, today),
    }
}

/// Log (or change) today's mood
fn cmd_log(store: &MoodStore, today: NaiveDate, mood: &str, note: Option<String>) -> Result<()> {
    let mood: Mood = mood.parse()?;

    let replaced = store.upsert(MoodEntry::new(today, mood, note))?;

    if replaced {
        println!("{} Updated today's entry", color(GREEN, "[ok]"));
    } else {
        println!("{} Logged today's mood", color(GREEN, "[ok]"));
    }
    println!();
    println!("  {}  {}", mood.glyph(), mood.as_str());

    Ok(())
}

/// Show today's entry
fn cmd_today(store: &MoodStore, today: NaiveDate) -> Result<()> {
    println!("{}", color(BOLD, &today.format("%A, %B %e, %Y").to_string()));
    println!();

    match store.entry_for(today)? {
        Some(entry) => {
            println!("  {}  {}", entry.mood.glyph(), entry.mood.as_str());
            if let Some(note) = entry.note {
                println!("  {}", note);
            }
        }
        None => {
            println!("No entry yet today");
            println!();
            println!("Log one with: mood log <mood>");
        }
    }

    Ok(())
}

/// Show recent entries, newest first
fn cmd_history(store: &MoodStore, today: NaiveDate, days: u32) -> Result<()> {
    let from = today - chrono::Duration::days(i64::from(days.max(1)) - 1);
    let entries = store.entries_since(from)?;

    if entries.is_empty() {
        println!("No entries in the last {} days", days);
        return Ok(());
    }

    println!("{}", color(BOLD, &format!("Last {} days", days)));
    println!();
    for entry in entries.iter().rev() {
        let note = entry
            .note
            .as_deref()
            .map(|n| format!("  {}", format::truncate(n, 40)))
            .unwrap_or_default();
        println!(
            "  {}  {}  {:<8}{}",
            color(CYAN, &entry.date.to_string()),
            entry.mood.glyph(),
            entry.mood.as_str(),
            note
        );
    }

    Ok(())
}

/// Show a summary of the recent window
fn cmd_wrapped(store: &MoodStore, today: NaiveDate, period: &str) -> Result<()> {
    let Some(period) = Period::from_str(period) else {
        bail!(
            "Unknown period: {} (expected weekly, monthly, or yearly)",
            period
        );
    };

    let entries = store.load()?;
    let wrapped = Wrapped::build(&entries, period, today);

    println!(
        "{}",
        color(BOLD, &format!("Mood Wrapped ({})", period.as_str()))
    );
    println!();
    println!(
        "  {}  {} of {} days",
        color(CYAN, "Logged:"),
        wrapped.entries,
        wrapped.days
    );
    if let Some(mood) = wrapped.dominant {
        println!(
            "  {}  {} {}",
            color(CYAN, "Mostly:"),
            mood.glyph(),
            mood.as_str()
        );
    }
    println!("  {}  {} days", color(CYAN, "Streak:"), wrapped.streak);

    let max = wrapped.counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max > 0 {
        println!();
        for (mood, count) in &wrapped.counts {
            if *count == 0 {
                continue;
            }
            let bar = "\u{2588}".repeat(((count * 20) / max).max(1) as usize);
            println!("  {:<8} {} {}", mood.as_str(), bar, count);
        }
    }

    Ok(())
}
