// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Loads input stories, runs forward inference, and returns one
// topic distribution per story. When a specific artifact name
// is given, that artifact is loaded before predicting (and
// replaces whatever network the predictor held).

use anyhow::Result;

use crate::data::{loader::JsonlLoader, vectorizer::Vectorizer};
use crate::domain::prediction::TopicPrediction;
use crate::domain::traits::StorySource;
use crate::infra::artifact::ArtifactStore;
use crate::ml::predictor::Predictor;

pub struct PredictUseCase {
    input_path: String,
    model_dir: String,
    /// Artifact to predict with; the latest one when not given
    model_name: Option<String>,
}

impl PredictUseCase {
    pub fn new(
        input_path: String,
        model_dir: String,
        model_name: Option<String>,
    ) -> Self {
        Self { input_path, model_dir, model_name }
    }

    pub fn execute(&self) -> Result<Vec<TopicPrediction>> {
        tracing::info!("Loading prediction input from '{}'", self.input_path);
        let stories = JsonlLoader::new(&self.input_path).load_all()?;

        // Labels on the input records, if any, are ignored here —
        // prediction only consumes the word ranks.
        let rows = Vectorizer::default().feature_rows(&stories);

        let store = ArtifactStore::new(&self.model_dir);
        let mut predictor = Predictor::from_store(store)?;

        match &self.model_name {
            Some(name) => predictor.predict_named(&rows, name),
            None => predictor.predict(&rows),
        }
    }
}
