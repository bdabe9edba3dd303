// ============================================================
// Layer 3 — Topic Prediction Domain Type
// ============================================================
// The output of the classifier for one input story:
// a probability distribution over all 46 topics.
//
// The model guarantees (via softmax) that the entries are
// non-negative and sum to 1, so this type can rank and report
// topics without re-normalising anything.

use serde::{Deserialize, Serialize};

use crate::domain::newswire::{topic_name, NUM_TOPICS};

/// A probability distribution over the 46 topics for one story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicPrediction {
    /// One probability per topic, indexed by class label.
    /// Invariant: len() == NUM_TOPICS, entries >= 0, sum ≈ 1.
    pub probabilities: Vec<f32>,
}

impl TopicPrediction {
    pub fn new(probabilities: Vec<f32>) -> Self {
        debug_assert_eq!(probabilities.len(), NUM_TOPICS);
        Self { probabilities }
    }

    /// Label of the most probable topic.
    pub fn predicted_label(&self) -> usize {
        self.probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Name of the most probable topic.
    pub fn predicted_topic(&self) -> &'static str {
        topic_name(self.predicted_label())
    }

    /// Probability assigned to the most probable topic.
    pub fn confidence(&self) -> f32 {
        self.probabilities[self.predicted_label()]
    }

    /// The `k` most probable topics as (label, name, probability),
    /// ordered from most to least probable.
    pub fn top_k(&self, k: usize) -> Vec<(usize, &'static str, f32)> {
        let mut ranked: Vec<(usize, f32)> = self
            .probabilities
            .iter()
            .copied()
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .take(k)
            .map(|(label, p)| (label, topic_name(label), p))
            .collect()
    }
}
