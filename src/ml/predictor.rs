// ============================================================
// Layer 5 — Predictor
// ============================================================
// Runs forward inference on new feature vectors, returning one
// probability distribution over the topics per input row.
//
// The predictor owns the network it predicts with. Loading an
// artifact (at construction or through predict_named) replaces
// the held network wholesale — plain field reassignment under
// exclusive ownership, never a merge.

use anyhow::Result;
use burn::backend::ndarray::NdArrayDevice;
use burn::prelude::*;

use crate::domain::prediction::TopicPrediction;
use crate::infra::artifact::ArtifactStore;
use crate::ml::model::TopicNet;

type InferBackend = burn::backend::NdArray;

pub struct Predictor {
    model: TopicNet<InferBackend>,
    store: ArtifactStore,
    device: NdArrayDevice,
}

impl Predictor {
    /// Load the most recently saved artifact from the store.
    pub fn from_store(store: ArtifactStore) -> Result<Self> {
        let device = NdArrayDevice::Cpu;
        let model = store.load_latest::<InferBackend>(&device)?;
        Ok(Self { model, store, device })
    }

    /// Load a specific named artifact from the store.
    pub fn from_named(store: ArtifactStore, name: &str) -> Result<Self> {
        let device = NdArrayDevice::Cpu;
        let model = store.load::<InferBackend>(name, &device)?;
        Ok(Self { model, store, device })
    }

    /// Predict topic distributions for a batch of multi-hot rows
    /// of shape [n, input_dim].
    pub fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<TopicPrediction>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let n = rows.len();
        let input_dim = rows[0].len();

        let flat: Vec<f32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let input = Tensor::<InferBackend, 1>::from_floats(
            flat.as_slice(),
            &self.device,
        )
        .reshape([n, input_dim]);

        let probs: Vec<f32> = self
            .model
            .forward_probabilities(input)
            .into_data()
            .to_vec()
            .unwrap_or_default();
        if probs.is_empty() {
            anyhow::bail!("Forward pass produced no probabilities");
        }

        let num_classes = probs.len() / n;
        let predictions = probs
            .chunks(num_classes)
            .map(|row| TopicPrediction::new(row.to_vec()))
            .collect();

        tracing::debug!("Predicted {} stories", n);
        Ok(predictions)
    }

    /// Load the named artifact — replacing the held network — and
    /// then predict with it. The replacement is a side effect that
    /// persists for later `predict` calls on this Predictor.
    pub fn predict_named(
        &mut self,
        rows: &[Vec<f32>],
        name: &str,
    ) -> Result<Vec<TopicPrediction>> {
        self.model = self.store.load::<InferBackend>(name, &self.device)?;
        tracing::info!("Switched to artifact '{}'", name);
        self.predict(rows)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::TopicNetConfig;

    fn store_with_artifact(tag: &str) -> (ArtifactStore, std::path::PathBuf) {
        let dir = std::env::temp_dir()
            .join(format!("newswire-predictor-{}-{}", std::process::id(), tag));
        let store = ArtifactStore::new(&dir);
        let device = NdArrayDevice::Cpu;
        let cfg = TopicNetConfig::new()
            .with_input_dim(6)
            .with_hidden_dim(4)
            .with_num_classes(46);
        let model = cfg.init::<InferBackend>(&device);
        store.save(&model, &cfg, "topic_net").unwrap();
        (store, dir)
    }

    #[test]
    fn test_rows_are_probability_distributions() {
        let (store, dir) = store_with_artifact("simplex");
        let predictor = Predictor::from_store(store).unwrap();

        let rows = vec![vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0]; 3];
        let predictions = predictor.predict(&rows).unwrap();

        assert_eq!(predictions.len(), 3);
        for p in &predictions {
            assert_eq!(p.probabilities.len(), 46);
            assert!(p.probabilities.iter().all(|&x| x >= 0.0));
            let sum: f32 = p.probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4);
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_repeated_predictions_are_identical() {
        let (store, dir) = store_with_artifact("repeat");
        let predictor = Predictor::from_store(store).unwrap();

        let rows = vec![vec![0.0, 1.0, 0.0, 1.0, 1.0, 0.0]];
        let first = predictor.predict(&rows).unwrap();
        let second = predictor.predict(&rows).unwrap();

        assert_eq!(first[0].probabilities, second[0].probabilities);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let (store, dir) = store_with_artifact("empty");
        let predictor = Predictor::from_store(store).unwrap();
        assert!(predictor.predict(&[]).unwrap().is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_predict_named_replaces_the_held_network() {
        let (store, dir) = store_with_artifact("switch");
        // Save a second artifact with different weights under
        // another name, through a fresh handle on the same dir.
        let device = NdArrayDevice::Cpu;
        let cfg = TopicNetConfig::new()
            .with_input_dim(6)
            .with_hidden_dim(4)
            .with_num_classes(46);
        let other = cfg.init::<InferBackend>(&device);
        store.save(&other, &cfg, "topic_net_b").unwrap();

        let mut predictor = Predictor::from_named(
            ArtifactStore::new(&dir),
            "topic_net",
        )
        .unwrap();

        let rows = vec![vec![1.0, 1.0, 0.0, 0.0, 1.0, 0.0]];
        let named = predictor.predict_named(&rows, "topic_net_b").unwrap();
        // The side effect persists: a plain predict now uses the
        // replacement network.
        let after = predictor.predict(&rows).unwrap();
        assert_eq!(named[0].probabilities, after[0].probabilities);
        std::fs::remove_dir_all(&dir).ok();
    }
}
