//! quiz - Study aids from pasted text
//!
//! Feed it any prose and it cuts the material into flashcards,
//! fill-in-the-blank items, and multiple-choice questions using plain
//! text heuristics (sentence splitting, keyword picking) — no network,
//! no models. Decks are saved locally and drilled from the terminal.

pub mod deck;
pub mod generate;

pub use deck::{Card, Deck, DeckStore};
pub use generate::{generate, GenerateError};
