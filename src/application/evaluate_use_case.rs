// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Loads a trained artifact and scores it on a held-out test
// corpus: load file → vectorize → one batched forward pass.

use anyhow::Result;
use burn::backend::ndarray::NdArrayDevice;

use crate::data::{dataset::TopicDataset, loader::JsonlLoader, vectorizer::Vectorizer};
use crate::domain::traits::StorySource;
use crate::infra::artifact::ArtifactStore;
use crate::ml::evaluator::{evaluate, EvalReport};

type EvalBackend = burn::backend::NdArray;

pub struct EvaluateUseCase {
    corpus_path: String,
    model_dir: String,
    /// Artifact to score; the latest one when not given
    model_name: Option<String>,
    batch_size: usize,
}

impl EvaluateUseCase {
    pub fn new(
        corpus_path: String,
        model_dir: String,
        model_name: Option<String>,
        batch_size: usize,
    ) -> Self {
        Self { corpus_path, model_dir, model_name, batch_size }
    }

    pub fn execute(&self) -> Result<EvalReport> {
        let device = NdArrayDevice::Cpu;

        let store = ArtifactStore::new(&self.model_dir);
        let model = match &self.model_name {
            Some(name) => store.load::<EvalBackend>(name, &device)?,
            None => store.load_latest::<EvalBackend>(&device)?,
        };

        tracing::info!("Loading test corpus from '{}'", self.corpus_path);
        let stories = JsonlLoader::new(&self.corpus_path).load_all()?;
        let samples = Vectorizer::default().labeled_samples(&stories)?;

        evaluate(&model, TopicDataset::new(samples), self.batch_size, &device)
    }
}
