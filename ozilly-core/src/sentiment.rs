//! Keyword-based classification of free-text feedback.
//!
//! Feedback is lower-cased and checked for substring containment against two
//! fixed phrase lists. There is no tokenizing: "nothing" contains "no", and
//! "not good" contains "good". The positive list is checked first, so any
//! text that matches both lists counts as positive.

use serde::{Deserialize, Serialize};

/// Phrases that mean the user is happy with the suggestion.
pub const POSITIVE_PHRASES: &[&str] = &[
    "yes",
    "good",
    "love it",
    "like it",
    "perfect",
    "awesome",
    "great",
    "cool",
    "nice",
    "this works",
    "works for me",
    "i like this",
    "that's the one",
    "this is good",
    "amazing",
    "i love it",
    "it's perfect",
    "beautiful",
    "i’m happy with it",
    "looks good",
    "this is it",
    "this is nice",
];

/// Phrases that ask for a different suggestion.
pub const NEGATIVE_PHRASES: &[&str] = &[
    "no",
    "not good",
    "meh",
    "bad",
    "try again",
    "next",
    "another one",
    "don’t like it",
    "change it",
    "not great",
    "any other",
    "can you redo?",
    "i don’t like this",
    "it's okay, but",
    "not feeling it",
    "hmm",
    "not this",
    "ew",
    "nah",
    "redo",
    "something else",
    "give me another",
    "not my vibe",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Classify feedback text. Positive wins when both lists match.
pub fn classify(text: &str) -> Sentiment {
    let text = text.to_lowercase();
    if contains_any(&text, POSITIVE_PHRASES) {
        Sentiment::Positive
    } else if contains_any(&text, NEGATIVE_PHRASES) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}
