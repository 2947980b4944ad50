//! Mood entry storage
//!
//! All entries live in a single entries.json under the tool's data
//! directory, kept sorted by date. The file is small (one entry per
//! day), so reads and writes just load and rewrite the whole thing.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::MoodEntry;

/// Mood journal store
pub struct MoodStore {
    data_dir: PathBuf,
}

impl MoodStore {
    /// Create a store with the given data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir).with_context(|| {
            format!("Failed to create mood data directory: {}", data_dir.display())
        })?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    fn entries_path(&self) -> PathBuf {
        self.data_dir.join("entries.json")
    }

    /// Load all entries, oldest first
    pub fn load(&self) -> Result<Vec<MoodEntry>> {
        let path = self.entries_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read mood entries: {}", path.display()))?;

        let mut entries: Vec<MoodEntry> =
            serde_json::from_str(&content).context("Failed to parse mood entries JSON")?;

        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Insert or replace the entry for its date. Returns true if an
    /// existing entry was replaced.
    pub fn upsert(&self, entry: MoodEntry) -> Result<bool> {
        let mut entries = self.load()?;

        let replaced = if let Some(existing) = entries.iter_mut().find(|e| e.date == entry.date) {
            *existing = entry;
            true
        } else {
            entries.push(entry);
            entries.sort_by_key(|e| e.date);
            false
        };

        self.save(&entries)?;
        Ok(replaced)
    }

    /// Get the entry for a specific date, if any
    pub fn entry_for(&self, date: NaiveDate) -> Result<Option<MoodEntry>> {
        Ok(self.load()?.into_iter().find(|e| e.date == date))
    }

    /// All entries on or after the given date, oldest first
    pub fn entries_since(&self, from: NaiveDate) -> Result<Vec<MoodEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.date >= from)
            .collect())
    }

    fn save(&self, entries: &[MoodEntry]) -> Result<()> {
        let path = self.entries_path();
        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize mood entries")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write mood entries: {}", path.display()))
    }
}
