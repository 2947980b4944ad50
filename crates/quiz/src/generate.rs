//! Card generation heuristics
//!
//! Everything here is deliberately naive string work: split the material
//! into sentences, pick out longer words as keywords, and build cards
//! from those pieces. Good enough to drill from pasted notes.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use thiserror::Error;

use crate::deck::Card;

/// Most cards produced per card kind
const MAX_PER_KIND: usize = 5;

/// Words shorter than this are never keywords
const MIN_KEYWORD_LEN: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("not enough content: need at least two usable sentences")]
    NotEnoughContent,
}

/// Split study material into trimmed sentences worth keeping
pub fn sentences(content: &str) -> Vec<String> {
    let splitter = Regex::new(r"[.!?]+").expect("sentence regex");
    splitter
        .split(content)
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| s.len() > 10)
        .collect()
}

/// Longer words in order of first appearance, deduplicated
/// case-insensitively, punctuation stripped
pub fn keywords(content: &str) -> Vec<String> {
    let mut seen = Vec::new();
    let mut out = Vec::new();

    for word in content.split_whitespace() {
        let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
        if cleaned.len() < MIN_KEYWORD_LEN {
            continue;
        }
        let key = cleaned.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(cleaned);
    }

    out
}

/// Generate a full card set from study material
///
/// The rng only drives option shuffling for multiple-choice cards;
/// which cards exist is deterministic for a given input.
pub fn generate<R: Rng>(content: &str, rng: &mut R) -> Result<Vec<Card>, GenerateError> {
    let sentences = sentences(content);
    if sentences.len() < 2 {
        return Err(GenerateError::NotEnoughContent);
    }
    let keywords = keywords(content);

    let mut cards = Vec::new();
    cards.extend(flashcards(&sentences));
    cards.extend(fill_blanks(&sentences));
    cards.extend(choices(&sentences, &keywords, rng));

    Ok(cards)
}

/// Front: the opening of a sentence; back: the whole sentence
fn flashcards(sentences: &[String]) -> Vec<Card> {
    sentences
        .iter()
        .take(MAX_PER_KIND)
        .map(|sentence| {
            let opening: String = sentence.chars().take(50).collect();
            let ellipsis = if sentence.chars().count() > 50 { "..." } else { "" };
            Card::Flashcard {
                front: format!("What does this mean: \"{}{}\"?", opening, ellipsis),
                back: sentence.clone(),
            }
        })
        .collect()
}

/// Mask the middle word of longer sentences
fn fill_blanks(sentences: &[String]) -> Vec<Card> {
    sentences
        .iter()
        .filter(|s| s.len() > 20)
        .filter_map(|sentence| {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            let blank_index = words.len() / 2;
            let answer = normalize_answer(words[blank_index]);
            if answer.is_empty() {
                return None;
            }

            let mut masked: Vec<&str> = words.clone();
            masked[blank_index] = "_____";
            Some(Card::Fill {
                sentence: masked.join(" "),
                answer,
            })
        })
        .take(MAX_PER_KIND)
        .collect()
}

/// Mask a keyword and offer it among shuffled distractor keywords
fn choices<R: Rng>(sentences: &[String], keywords: &[String], rng: &mut R) -> Vec<Card> {
    if keywords.len() < 4 {
        return Vec::new();
    }

    let mut cards = Vec::new();
    for sentence in sentences {
        if cards.len() == MAX_PER_KIND {
            break;
        }

        // The first keyword this sentence contains becomes the answer
        let Some(answer) = keywords
            .iter()
            .find(|k| sentence.to_lowercase().contains(&k.to_lowercase()))
        else {
            continue;
        };

        let mut options: Vec<String> = keywords
            .iter()
            .filter(|k| *k != answer)
            .take(3)
            .cloned()
            .collect();
        if options.len() < 3 {
            continue;
        }
        options.push(answer.clone());
        options.shuffle(rng);

        let correct = options
            .iter()
            .position(|o| o == answer)
            .expect("answer is among the options");

        let masked = mask_word(sentence, answer);
        cards.push(Card::Choice {
            question: format!("Which word completes: \"{}\"?", masked),
            options,
            correct,
        });
    }

    cards
}

/// Replace the (case-insensitive) first occurrence of `word` with blanks
fn mask_word(sentence: &str, word: &str) -> String {
    let lower = sentence.to_lowercase();
    match lower.find(&word.to_lowercase()) {
        Some(at) => {
            let mut out = String::with_capacity(sentence.len());
            out.push_str(&sentence[..at]);
            out.push_str("_____");
            out.push_str(&sentence[at + word.len()..]);
            out
        }
        None => sentence.to_string(),
    }
}

/// Lowercase and strip punctuation so typed answers compare loosely
pub fn normalize_answer(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const MATERIAL: &str = "The mitochondria is the powerhouse of the cell. \
        Photosynthesis converts sunlight into chemical energy. \
        Osmosis moves water across a semipermeable membrane. \
        Enzymes catalyze reactions without being consumed.";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_sentences_split_and_filter() {
        let result = sentences("One two three four. Tiny! Another proper sentence here?");
        assert_eq!(
            result,
            vec![
                "One two three four".to_string(),
                "Another proper sentence here".to_string()
            ]
        );
    }

    #[test]
    fn test_keywords_dedup_and_strip() {
        let result = keywords("Osmosis, osmosis my cat; at Membrane up.");
        assert_eq!(result, vec!["Osmosis".to_string(), "Membrane".to_string()]);
    }

    #[test]
    fn test_generate_needs_two_sentences() {
        let mut rng = rng();
        assert_eq!(
            generate("Just one sentence here.", &mut rng),
            Err(GenerateError::NotEnoughContent)
        );
    }

    #[test]
    fn test_generate_produces_every_kind() {
        let mut rng = rng();
        let cards = generate(MATERIAL, &mut rng).unwrap();

        assert!(cards.iter().any(|c| matches!(c, Card::Flashcard { .. })));
        assert!(cards.iter().any(|c| matches!(c, Card::Fill { .. })));
        assert!(cards.iter().any(|c| matches!(c, Card::Choice { .. })));
    }

    #[test]
    fn test_flashcard_front_quotes_the_sentence() {
        let mut rng = rng();
        let cards = generate(MATERIAL, &mut rng).unwrap();

        let Some(Card::Flashcard { front, back }) = cards.first() else {
            panic!("expected a flashcard first");
        };
        assert!(front.starts_with("What does this mean: \"The mitochondria"));
        assert_eq!(back, "The mitochondria is the powerhouse of the cell");
    }

    #[test]
    fn test_fill_masks_middle_word() {
        let cards = fill_blanks(&["alpha beta gamma delta epsilon".to_string()]);
        let Some(Card::Fill { sentence, answer }) = cards.first() else {
            panic!("expected a fill card");
        };
        assert_eq!(sentence, "alpha beta _____ delta epsilon");
        assert_eq!(answer, "gamma");
    }

    #[test]
    fn test_choice_marks_the_right_option() {
        let mut rng = rng();
        let cards = generate(MATERIAL, &mut rng).unwrap();

        for card in cards {
            if let Card::Choice {
                question,
                options,
                correct,
            } = card
            {
                assert_eq!(options.len(), 4);
                assert!(question.contains("_____"));
                assert!(correct < options.len());
                // The blanked word must not leak into the question
                assert!(!question
                    .to_lowercase()
                    .contains(&options[correct].to_lowercase()));
            }
        }
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("Membrane,"), "membrane");
        assert_eq!(normalize_answer("(cell)"), "cell");
        assert_eq!(normalize_answer("--"), "");
    }
}
