//! Deck storage
//!
//! One JSON file per deck under the tool's data directory, named by a
//! slug of the deck title.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A single study card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Card {
    /// Prompt on the front, full sentence on the back
    Flashcard { front: String, back: String },
    /// A sentence with one word blanked out
    Fill { sentence: String, answer: String },
    /// A blanked sentence with four candidate words
    Choice {
        question: String,
        options: Vec<String>,
        correct: usize,
    },
}

/// A saved set of cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            title: title.into(),
            created_at: Utc::now(),
            cards,
        }
    }
}

/// Filesystem slug for a deck title
fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

/// Deck store
pub struct DeckStore {
    data_dir: PathBuf,
}

impl DeckStore {
    /// Create a store with the given data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir).with_context(|| {
            format!("Failed to create quiz data directory: {}", data_dir.display())
        })?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    fn deck_path(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", slug(title)))
    }

    /// Save a deck, overwriting any deck with the same title
    pub fn save(&self, deck: &Deck) -> Result<()> {
        if slug(&deck.title).is_empty() {
            bail!("Deck title must contain at least one letter or digit");
        }

        let path = self.deck_path(&deck.title);
        let content = serde_json::to_string_pretty(deck).context("Failed to serialize deck")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write deck: {}", path.display()))
    }

    /// Load a deck by title
    pub fn load(&self, title: &str) -> Result<Deck> {
        let path = self.deck_path(title);
        if !path.exists() {
            bail!("No deck named '{}' (try 'quiz list')", title);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read deck: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse deck JSON")
    }

    /// All saved decks, newest first
    pub fn list(&self) -> Result<Vec<Deck>> {
        let mut decks = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                match fs::read_to_string(&path) {
                    Ok(content) => match serde_json::from_str::<Deck>(&content) {
                        Ok(deck) => decks.push(deck),
                        Err(err) => {
                            tracing::warn!("skipping unreadable deck {}: {}", path.display(), err);
                        }
                    },
                    Err(_) => continue,
                }
            }
        }

        decks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(decks)
    }
}
