//! "Wrapped" statistics over the journal
//!
//! Summarizes a recent window of entries: how often each mood showed up,
//! which one dominated, and how many consecutive days are logged.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::entry::{Mood, MoodEntry};

/// Reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub fn days(&self) -> u32 {
        match self {
            Period::Weekly => 7,
            Period::Monthly => 30,
            Period::Yearly => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" => Some(Period::Weekly),
            "monthly" | "month" => Some(Period::Monthly),
            "yearly" | "year" => Some(Period::Yearly),
            _ => None,
        }
    }
}

/// Aggregated journal statistics for one window
#[derive(Debug, Clone)]
pub struct Wrapped {
    /// Window size in days
    pub days: u32,
    /// Entries that fell inside the window
    pub entries: u32,
    /// Count per mood, in Mood::ALL order
    pub counts: Vec<(Mood, u32)>,
    /// Most frequent mood (earliest in Mood::ALL order wins ties)
    pub dominant: Option<Mood>,
    /// Consecutive logged days ending today (or yesterday if today is
    /// not yet logged)
    pub streak: u32,
}

impl Wrapped {
    /// Summarize the entries that fall within `period` ending at `today`.
    /// `entries` may contain anything; out-of-window dates are ignored.
    pub fn build(entries: &[MoodEntry], period: Period, today: NaiveDate) -> Self {
        let days = period.days();
        let from = today - chrono::Duration::days(i64::from(days) - 1);

        let in_window: Vec<&MoodEntry> = entries
            .iter()
            .filter(|e| e.date >= from && e.date <= today)
            .collect();

        let counts: Vec<(Mood, u32)> = Mood::ALL
            .iter()
            .map(|&mood| {
                let n = in_window.iter().filter(|e| e.mood == mood).count() as u32;
                (mood, n)
            })
            .collect();

        let dominant = counts
            .iter()
            .filter(|(_, n)| *n > 0)
            .max_by_key(|(_, n)| *n)
            .map(|(mood, _)| *mood);

        Self {
            days,
            entries: in_window.len() as u32,
            counts,
            dominant,
            streak: streak(entries, today),
        }
    }
}

/// Consecutive logged days counting back from today (today itself may be
/// unlogged without breaking the streak)
fn streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let logged: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();

    let mut day = if logged.contains(&today) {
        today
    } else {
        today - chrono::Duration::days(1)
    };

    let mut count = 0;
    while logged.contains(&day) {
        count += 1;
        day = day - chrono::Duration::days(1);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(d: NaiveDate, mood: Mood) -> MoodEntry {
        MoodEntry::new(d, mood, None)
    }

    #[test]
    fn test_empty_journal() {
        let wrapped = Wrapped::build(&[], Period::Weekly, date(2024, 3, 10));
        assert_eq!(wrapped.entries, 0);
        assert_eq!(wrapped.dominant, None);
        assert_eq!(wrapped.streak, 0);
    }

    #[test]
    fn test_counts_and_dominant() {
        let today = date(2024, 3, 10);
        let entries = vec![
            entry(date(2024, 3, 8), Mood::Happy),
            entry(date(2024, 3, 9), Mood::Happy),
            entry(date(2024, 3, 10), Mood::Sad),
            // Outside the weekly window
            entry(date(2024, 2, 1), Mood::Anxious),
        ];

        let wrapped = Wrapped::build(&entries, Period::Weekly, today);
        assert_eq!(wrapped.entries, 3);
        assert_eq!(wrapped.dominant, Some(Mood::Happy));

        let happy = wrapped
            .counts
            .iter()
            .find(|(m, _)| *m == Mood::Happy)
            .unwrap();
        assert_eq!(happy.1, 2);
        let anxious = wrapped
            .counts
            .iter()
            .find(|(m, _)| *m == Mood::Anxious)
            .unwrap();
        assert_eq!(anxious.1, 0);
    }

    #[test]
    fn test_monthly_window_is_wider() {
        let today = date(2024, 3, 10);
        let entries = vec![entry(date(2024, 2, 20), Mood::Okay)];

        assert_eq!(Wrapped::build(&entries, Period::Weekly, today).entries, 0);
        assert_eq!(Wrapped::build(&entries, Period::Monthly, today).entries, 1);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let today = date(2024, 3, 10);
        let entries = vec![
            entry(date(2024, 3, 8), Mood::Okay),
            entry(date(2024, 3, 9), Mood::Okay),
            entry(date(2024, 3, 10), Mood::Okay),
            // Gap before this one, so it doesn't count
            entry(date(2024, 3, 5), Mood::Okay),
        ];

        assert_eq!(Wrapped::build(&entries, Period::Weekly, today).streak, 3);
    }

    #[test]
    fn test_streak_survives_unlogged_today() {
        let today = date(2024, 3, 10);
        let entries = vec![
            entry(date(2024, 3, 8), Mood::Okay),
            entry(date(2024, 3, 9), Mood::Okay),
        ];

        assert_eq!(Wrapped::build(&entries, Period::Weekly, today).streak, 2);
    }

    #[test]
    fn test_period_parse() {
        assert_eq!(Period::from_str("weekly"), Some(Period::Weekly));
        assert_eq!(Period::from_str("month"), Some(Period::Monthly));
        assert_eq!(Period::from_str("decade"), None);
    }
}
