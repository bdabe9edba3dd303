// ============================================================
// Layer 4 — Bag-of-Words Vectorizer
// ============================================================
// Turns a story's word-rank list into the fixed-length input
// vector the network consumes.
//
// Multi-hot encoding:
//   A story is a sequence of vocabulary ranks such as
//   [3, 120, 3, 9871]. The vector has one position per
//   vocabulary entry; position i is 1.0 when rank i occurs in
//   the story and 0.0 otherwise. Word order and word frequency
//   are both discarded:
//     - duplicates collapse to a single 1.0
//     - ranks at or above the vocabulary size are ignored
//
// The result is a Vec<f32> of length 10000 per story, which the
// batcher later stacks into a [batch, 10000] tensor.
//
// Reference: Rust Book §8 (Vectors)

use anyhow::{bail, Result};

use crate::data::dataset::TopicSample;
use crate::domain::newswire::{NewswireStory, NUM_TOPICS, VOCABULARY_SIZE};

/// Encodes stories into fixed-length multi-hot vectors.
pub struct Vectorizer {
    /// Length of the output vector; ranks >= input_dim are dropped
    input_dim: usize,
}

impl Vectorizer {
    pub fn new(input_dim: usize) -> Self {
        Self { input_dim }
    }

    /// Multi-hot encode one story's word ranks.
    pub fn multi_hot(&self, indices: &[u32]) -> Vec<f32> {
        let mut row = vec![0.0f32; self.input_dim];
        for &rank in indices {
            if let Some(slot) = row.get_mut(rank as usize) {
                *slot = 1.0;
            }
        }
        row
    }

    /// Build labelled training samples from stories.
    ///
    /// Every story must carry a label in `0..NUM_TOPICS`;
    /// a missing or out-of-range label is a hard error because a
    /// silently dropped story would bias the class distribution.
    pub fn labeled_samples(
        &self,
        stories: &[NewswireStory],
    ) -> Result<Vec<TopicSample>> {
        let mut samples = Vec::with_capacity(stories.len());
        for (position, story) in stories.iter().enumerate() {
            let Some(label) = story.label else {
                bail!(
                    "Story {} has no topic label — labelled corpora \
                     must set \"label\" on every record",
                    position + 1
                );
            };
            if label >= NUM_TOPICS {
                bail!(
                    "Story {} has label {} but only {} topics exist",
                    position + 1,
                    label,
                    NUM_TOPICS
                );
            }
            samples.push(TopicSample {
                features: self.multi_hot(&story.indices),
                label,
            });
        }
        Ok(samples)
    }

    /// Encode stories for prediction, ignoring any labels.
    pub fn feature_rows(&self, stories: &[NewswireStory]) -> Vec<Vec<f32>> {
        stories
            .iter()
            .map(|s| self.multi_hot(&s.indices))
            .collect()
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(VOCABULARY_SIZE)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_hot_flags_exactly_the_given_ranks() {
        let v = Vectorizer::new(8);
        let row = v.multi_hot(&[1, 3, 3, 6]);
        assert_eq!(row, vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_ranks_are_ignored() {
        let v = Vectorizer::new(4);
        let row = v.multi_hot(&[0, 4, 5, 9999]);
        assert_eq!(row, vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_duplicates_collapse_to_one() {
        let v = Vectorizer::new(4);
        let row = v.multi_hot(&[2, 2, 2]);
        assert_eq!(row[2], 1.0);
        assert_eq!(row.iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn test_default_dimension_matches_vocabulary() {
        let row = Vectorizer::default().multi_hot(&[9_999]);
        assert_eq!(row.len(), VOCABULARY_SIZE);
        assert_eq!(row[9_999], 1.0);
    }

    #[test]
    fn test_labeled_samples_require_labels() {
        let v = Vectorizer::new(4);
        let stories = vec![NewswireStory::new(vec![1], None)];
        let err = v.labeled_samples(&stories).unwrap_err();
        assert!(err.to_string().contains("no topic label"));
    }

    #[test]
    fn test_labeled_samples_reject_out_of_range_labels() {
        let v = Vectorizer::new(4);
        let stories = vec![NewswireStory::new(vec![1], Some(NUM_TOPICS))];
        assert!(v.labeled_samples(&stories).is_err());
    }

    #[test]
    fn test_labeled_samples_carry_features_and_label() {
        let v = Vectorizer::new(4);
        let stories = vec![NewswireStory::new(vec![0, 3], Some(7))];
        let samples = v.labeled_samples(&stories).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].label, 7);
        assert_eq!(samples[0].features, vec![1.0, 0.0, 0.0, 1.0]);
    }
}
