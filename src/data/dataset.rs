use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One fully vectorised training sample: a multi-hot
/// bag-of-words row plus its topic label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSample {
    /// Multi-hot features of length VOCABULARY_SIZE
    pub features: Vec<f32>,
    /// Topic class in 0..NUM_TOPICS
    pub label: usize,
}

pub struct TopicDataset {
    samples: Vec<TopicSample>,
}

impl TopicDataset {
    pub fn new(samples: Vec<TopicSample>) -> Self {
        Self { samples }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Dataset<TopicSample> for TopicDataset {
    fn get(&self, index: usize) -> Option<TopicSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: usize) -> TopicSample {
        TopicSample { features: vec![0.0, 1.0], label }
    }

    #[test]
    fn test_get_and_len() {
        let ds = TopicDataset::new(vec![sample(1), sample(2)]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sample_count(), 2);
        assert_eq!(ds.get(1).unwrap().label, 2);
        assert!(ds.get(2).is_none());
    }
}
