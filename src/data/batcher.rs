// ============================================================
// Layer 4 — Topic Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<TopicSample>
// into tensors for the training loop.
//
// How batching works here:
//   Input:  Vec of N TopicSamples, each with a feature row of
//           length D (all rows have the same length because the
//           vectorizer produces fixed-size multi-hot vectors)
//   Output: TopicBatch with features [N, D] and targets [N]
//
//   We flatten all feature rows into one long Vec, then reshape:
//   [s1_f1, ..., s1_fD, s2_f1, ..., sN_fD] → [N, D]
//
// Reference: Burn Book §4 (Batcher)

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::TopicSample;

// ─── TopicBatch ───────────────────────────────────────────────────────────────
/// A batch of samples ready for the model forward pass.
///
/// B is the Burn Backend (e.g. NdArray, Autodiff<NdArray>) —
/// generic so the same batcher serves training and validation.
#[derive(Debug, Clone)]
pub struct TopicBatch<B: Backend> {
    /// Multi-hot features — shape: [batch_size, input_dim]
    pub features: Tensor<B, 2>,

    /// Topic labels — shape: [batch_size]
    /// One integer class per sample, consumed by the
    /// cross-entropy loss and the accuracy metric.
    pub targets: Tensor<B, 1, Int>,
}

// ─── TopicBatcher ─────────────────────────────────────────────────────────────
/// Holds the target device so tensors are created in the right
/// place.
#[derive(Clone, Debug)]
pub struct TopicBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> TopicBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<TopicSample, TopicBatch<B>> for TopicBatcher<B> {
    /// Convert a Vec of TopicSamples into a single TopicBatch.
    fn batch(&self, items: Vec<TopicSample>) -> TopicBatch<B> {
        let batch_size = items.len();
        // All rows share the vectorizer's fixed dimension
        let input_dim = items[0].features.len();

        let feature_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();

        let labels: Vec<i32> = items.iter().map(|s| s.label as i32).collect();

        let features = Tensor::<B, 1>::from_floats(
            feature_flat.as_slice(),
            &self.device,
        )
        .reshape([batch_size, input_dim]);

        let targets =
            Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device);

        TopicBatch { features, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::{NdArray, NdArrayDevice};

    #[test]
    fn test_batch_shapes() {
        let batcher = TopicBatcher::<NdArray>::new(NdArrayDevice::Cpu);
        let items = vec![
            TopicSample { features: vec![1.0, 0.0, 1.0], label: 0 },
            TopicSample { features: vec![0.0, 1.0, 0.0], label: 2 },
        ];

        let batch = batcher.batch(items);
        assert_eq!(batch.features.dims(), [2, 3]);
        assert_eq!(batch.targets.dims(), [2]);
    }

    #[test]
    fn test_batch_preserves_values() {
        let batcher = TopicBatcher::<NdArray>::new(NdArrayDevice::Cpu);
        let items = vec![TopicSample {
            features: vec![0.0, 1.0],
            label: 5,
        }];

        let batch = batcher.batch(items);
        let features: Vec<f32> =
            batch.features.into_data().to_vec().unwrap();
        let targets: Vec<i64> = batch.targets.into_data().to_vec().unwrap();
        assert_eq!(features, vec![0.0, 1.0]);
        assert_eq!(targets, vec![5]);
    }
}
