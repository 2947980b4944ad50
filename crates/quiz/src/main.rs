//! quiz - Study aids from pasted text
//!
//! Usage:
//!   quiz make <FILE> [--title TITLE]   Build a deck from a text file ('-' for stdin)
//!   quiz list                          Show saved decks
//!   quiz drill <TITLE>                 Drill a deck in the terminal

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use perch_core::{format, Paths};
use quiz::deck::{Card, Deck, DeckStore};
use quiz::generate::{generate, normalize_answer};

/// quiz - Study aids from pasted text
#[derive(Parser)]
#[command(name = "quiz")]
#[command(about = "Flashcard and quiz generator for pasted study text")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    quiz make notes.txt                   # Deck named after the file
    quiz make notes.txt --title biology   # Deck named 'biology'
    pbpaste | quiz make - --title wk3     # Straight from the clipboard
    quiz drill biology                    # Shuffled terminal drill

Cards are generated with plain text heuristics - sentence splitting and
keyword picking. No network, no models.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a deck from a text file
    #[command(alias = "m")]
    Make {
        /// Text file with study material, or '-' for stdin
        file: PathBuf,

        /// Deck title (default: the file name)
        #[arg(long)]
        title: Option<String>,
    },

    /// Show saved decks
    #[command(alias = "ls")]
    List,

    /// Drill a deck in the terminal
    #[command(alias = "d")]
    Drill {
        /// Title of the deck to drill
        title: String,
    },
}

// ANSI color codes
const GREEN: &str = "\x1b[0;32m";
const RED: &str = "\x1b[0;31m";
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
    let store = DeckStore::new(&paths.state("quiz"))?;

    match cli.command {
        Some(Commands::Make { file, title }) => cmd_make(&store, &file, title),
        Some(Commands::Drill { title }) => cmd_drill(&store, &title),
        Some(Commands::List) | None => cmd_list(&store),
    }
}

/// Build a deck from a text file
fn cmd_make(store: &DeckStore, file: &PathBuf, title: Option<String>) -> Result<()> {
    let from_stdin = file.as_os_str() == "-";

    let content = if from_stdin {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read study material from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read study material: {}", file.display()))?
    };

    let title = match title {
        Some(t) => t,
        None if from_stdin => bail!("--title is required when reading from stdin"),
        None => file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "notes".to_string()),
    };

    let cards = generate(&content, &mut rand::thread_rng())?;
    let deck = Deck::new(title, cards);
    store.save(&deck)?;

    let flashcards = count(&deck, |c| matches!(c, Card::Flashcard { .. }));
    let fills = count(&deck, |c| matches!(c, Card::Fill { .. }));
    let choices = count(&deck, |c| matches!(c, Card::Choice { .. }));

    println!("{} Deck '{}' saved", color(GREEN, "[ok]"), deck.title);
    println!();
    println!("  {}  {}", color(CYAN, "Flashcards:"), flashcards);
    println!("  {}  {}", color(CYAN, "Fill-ins:  "), fills);
    println!("  {}  {}", color(CYAN, "Choices:   "), choices);
    println!();
    println!("Drill it with: quiz drill \"{}\"", deck.title);

    Ok(())
}

fn count(deck: &Deck, pred: impl Fn(&Card) -> bool) -> usize {
    deck.cards.iter().filter(|c| pred(c)).count()
}

/// Show saved decks
fn cmd_list(store: &DeckStore) -> Result<()> {
    let decks = store.list()?;

    if decks.is_empty() {
        println!("No decks yet");
        println!();
        println!("Make one with: quiz make <file>");
        return Ok(());
    }

    println!("{}Decks{}", BOLD, NC);
    println!();
    for deck in decks {
        println!(
            "  {}  {} cards  ({})",
            color(CYAN, &format!("{:<20}", format::truncate(&deck.title, 20))),
            deck.cards.len(),
            deck.created_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}

/// Drill a deck in the terminal
fn cmd_drill(store: &DeckStore, title: &str) -> Result<()> {
    let deck = store.load(title)?;
    if deck.cards.is_empty() {
        bail!("Deck '{}' has no cards", deck.title);
    }

    let mut cards = deck.cards.clone();
    cards.shuffle(&mut rand::thread_rng());

    println!(
        "{}",
        color(BOLD, &format!("Drilling '{}' - {} cards", deck.title, cards.len()))
    );

    let mut score = 0usize;
    for (i, card) in cards.iter().enumerate() {
        println!();
        println!("{}", color(CYAN, &format!("[{}/{}]", i + 1, cards.len())));

        let correct = match card {
            Card::Flashcard { front, back } => drill_flashcard(front, back)?,
            Card::Fill { sentence, answer } => drill_fill(sentence, answer)?,
            Card::Choice {
                question,
                options,
                correct,
            } => drill_choice(question, options, *correct)?,
        };
        if correct {
            score += 1;
        }
    }

    println!();
    println!(
        "{} {}/{} ({}%)",
        color(BOLD, "Score:"),
        score,
        cards.len(),
        (score * 100) / cards.len()
    );

    Ok(())
}

fn drill_flashcard(front: &str, back: &str) -> Result<bool> {
    println!("{}", front);
    ask("  press enter to flip ")?;
    println!("  {}", back);

    let got = ask("  got it? [y/n] ")?;
    Ok(got.to_lowercase().starts_with('y'))
}

fn drill_fill(sentence: &str, answer: &str) -> Result<bool> {
    println!("{}", sentence);
    let typed = ask("  your answer: ")?;

    if normalize_answer(&typed) == *answer {
        println!("  {}", color(GREEN, "correct!"));
        Ok(true)
    } else {
        println!("  {} it was '{}'", color(RED, "not quite -"), answer);
        Ok(false)
    }
}

fn drill_choice(question: &str, options: &[String], correct: usize) -> Result<bool> {
    println!("{}", question);
    for (i, option) in options.iter().enumerate() {
        println!("    {}) {}", (b'a' + i as u8) as char, option);
    }

    let picked = ask("  your pick: ")?;
    let picked_index = picked
        .to_lowercase()
        .bytes()
        .next()
        .and_then(|b| b.checked_sub(b'a'))
        .map(usize::from);

    if picked_index == Some(correct) {
        println!("  {}", color(GREEN, "correct!"));
        Ok(true)
    } else {
        println!(
            "  {} it was '{}'",
            color(RED, "not quite -"),
            options[correct]
        );
        Ok(false)
    }
}

/// Prompt on stdout, read one trimmed line from stdin
fn ask(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
