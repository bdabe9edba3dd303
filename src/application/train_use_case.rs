// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the corpus file       (Layer 4 - data)
//   Step 2: Vectorize the stories      (Layer 4 - data)
//   Step 3: Split train/dev            (Layer 4 - data)
//   Step 4: Build Burn datasets        (Layer 4 - data)
//   Step 5: Open the artifact store    (Layer 6 - infra)
//   Step 6: Run the training loop      (Layer 5 - ml)
//
// Reference: Burn Book §5 (Training)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::TopicDataset,
    loader::JsonlLoader,
    splitter::split_train_dev,
    vectorizer::Vectorizer,
};
use crate::domain::traits::StorySource;
use crate::infra::artifact::ArtifactStore;
use crate::infra::history::TrainingHistory;
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All knobs for one training run. Serialisable so a run can be
// reproduced from a saved config. The network topology is NOT
// in here — it is fixed in TopicNetConfig and persisted next to
// the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub corpus_path: String,
    pub model_dir: String,
    pub model_name: String,
    pub dev_fraction: f64,
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub seed: u64,
    pub save_model: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            corpus_path: "data/train.jsonl".to_string(),
            model_dir: "model".to_string(),
            model_name: "topic_net".to_string(),
            dev_fraction: 0.1,
            epochs: 1,
            batch_size: 512,
            learning_rate: 1e-3,
            seed: 42,
            save_model: true,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the training pipeline end to end, returning the
    /// per-epoch history for the caller to report.
    pub fn execute(&self) -> Result<TrainingHistory> {
        let cfg = &self.config;

        // ── Step 1: Load the corpus ──────────────────────────────────────────
        tracing::info!("Loading corpus from '{}'", cfg.corpus_path);
        let loader = JsonlLoader::new(&cfg.corpus_path);
        let stories = loader.load_all()?;

        // ── Step 2: Vectorize ────────────────────────────────────────────────
        // Multi-hot bag-of-words rows plus integer topic labels
        let vectorizer = Vectorizer::default();
        let samples = vectorizer.labeled_samples(&stories)?;
        tracing::info!("Vectorized {} labelled samples", samples.len());

        // ── Step 3: Train/dev split ──────────────────────────────────────────
        // Seeded shuffle so the run is reproducible
        let (train_samples, dev_samples) =
            split_train_dev(samples, cfg.dev_fraction, cfg.seed);
        tracing::info!(
            "Split: {} train, {} dev",
            train_samples.len(),
            dev_samples.len()
        );

        // ── Step 4: Build Burn datasets ──────────────────────────────────────
        let train_dataset = TopicDataset::new(train_samples);
        let dev_dataset = TopicDataset::new(dev_samples);

        // ── Step 5: Artifact store ───────────────────────────────────────────
        let store = ArtifactStore::new(&cfg.model_dir);

        // ── Step 6: Run training loop (Layer 5) ──────────────────────────────
        let (history, _model) =
            run_training(cfg, train_dataset, dev_dataset, &store)?;

        Ok(history)
    }
}
