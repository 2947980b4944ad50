//! Mood journal entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How the day felt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Amazing,
    Happy,
    Okay,
    Sad,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Amazing,
        Mood::Happy,
        Mood::Okay,
        Mood::Sad,
        Mood::Anxious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Amazing => "amazing",
            Mood::Happy => "happy",
            Mood::Okay => "okay",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
        }
    }

    /// Little face for list views
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Amazing => "(^o^)",
            Mood::Happy => "(^-^)",
            Mood::Okay => "(._.)",
            Mood::Sad => "(;_;)",
            Mood::Anxious => "(>_<)",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mood: {0} (expected amazing, happy, okay, sad, or anxious)")]
pub struct ParseMoodError(String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amazing" => Ok(Mood::Amazing),
            "happy" => Ok(Mood::Happy),
            "okay" => Ok(Mood::Okay),
            "sad" => Ok(Mood::Sad),
            "anxious" => Ok(Mood::Anxious),
            _ => Err(ParseMoodError(s.to_string())),
        }
    }
}

/// One journal entry; at most one exists per calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood, note: Option<String>) -> Self {
        Self { date, mood, note }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_parse_roundtrip() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_mood_parse_is_case_insensitive() {
        assert_eq!("Happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!("ANXIOUS".parse::<Mood>().unwrap(), Mood::Anxious);
    }

    #[test]
    fn test_mood_parse_rejects_unknown() {
        assert!("tired".parse::<Mood>().is_err());
    }

    #[test]
    fn test_entry_serialization_skips_empty_note() {
        let entry = MoodEntry::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Mood::Okay,
            None,
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("note"));
        assert!(json.contains("\"okay\""));
    }
}
