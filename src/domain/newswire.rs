// ============================================================
// Layer 3 — Newswire Domain Types
// ============================================================
// Represents a single newswire story as it arrives from the
// corpus files: a list of vocabulary ranks plus an optional
// topic label.
//
// The text itself never appears in this system. The corpus is
// distributed pre-tokenised — every word has already been
// replaced by its frequency rank (1 = the most common word).
// Only the 10000 most common words are kept, so every rank
// the model ever sees is below VOCABULARY_SIZE.
//
// Reference: Rust Book §5 (Structs)
//            Lewis (1997) Reuters-21578 corpus documentation

use serde::{Deserialize, Serialize};

/// Size of the bag-of-words input vector. Ranks at or above this
/// value are dropped by the vectorizer.
pub const VOCABULARY_SIZE: usize = 10_000;

/// Number of mutually exclusive topic categories.
pub const NUM_TOPICS: usize = 46;

/// The 46 topic categories, indexed by class label.
/// Order matches the label numbering used by the corpus files.
pub const TOPIC_NAMES: [&str; NUM_TOPICS] = [
    "cocoa", "grain", "veg-oil", "earn", "acq", "wheat", "copper",
    "housing", "money-supply", "coffee", "sugar", "trade", "reserves",
    "ship", "cotton", "carcass", "crude", "nat-gas", "cpi", "money-fx",
    "interest", "gnp", "meal-feed", "alum", "oilseed", "gold", "tin",
    "strategic-metal", "livestock", "retail", "ipi", "iron-steel",
    "rubber", "heat", "jobs", "lei", "bop", "zinc", "orange",
    "pet-chem", "dlr", "gas", "silver", "wpi", "hog", "lead",
];

/// Returns the human-readable name for a topic label,
/// or "unknown" if the label is out of range.
pub fn topic_name(label: usize) -> &'static str {
    TOPIC_NAMES.get(label).copied().unwrap_or("unknown")
}

/// One newswire story as read from a corpus file.
///
/// `label` is optional because the same record format serves two
/// purposes: labelled records for training and evaluation, and
/// unlabelled records as prediction input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewswireStory {
    /// Vocabulary ranks of the words in the story, in order.
    /// Duplicates are expected — a word that appears twice
    /// contributes its rank twice.
    pub indices: Vec<u32>,

    /// Topic label in `0..NUM_TOPICS`, absent for prediction input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<usize>,
}

impl NewswireStory {
    pub fn new(indices: Vec<u32>, label: Option<usize>) -> Self {
        Self { indices, label }
    }

    /// Number of word occurrences in the story (with duplicates).
    pub fn word_count(&self) -> usize {
        self.indices.len()
    }
}
