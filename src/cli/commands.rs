// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands and their flags:
//   `train`, `evaluate`, `predict`, `history`
//
// clap's derive macros generate the help text, the error
// messages for missing args, and the type conversions.
//
// The network topology deliberately has no flags here — it is
// fixed in TopicNetConfig and changes only by editing code.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the topic classifier on a labelled corpus
    Train(TrainArgs),

    /// Score a trained artifact on a held-out test corpus
    Evaluate(EvaluateArgs),

    /// Predict topics for new stories
    Predict(PredictArgs),

    /// Re-render the training history chart from history.csv
    History(HistoryArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Labelled training corpus (JSONL, one story per line)
    #[arg(long, default_value = "data/train.jsonl")]
    pub corpus: String,

    /// Directory for artifacts and the history CSV
    #[arg(long, default_value = "model")]
    pub model_dir: String,

    /// Name the trained artifact is saved under
    #[arg(long, default_value = "topic_net")]
    pub model_name: String,

    /// Fraction of the corpus held out as the dev set
    #[arg(long, default_value_t = 0.1)]
    pub dev_fraction: f64,

    /// Number of full passes over the training split
    #[arg(long, default_value_t = 1)]
    pub epochs: usize,

    /// Number of samples per gradient step
    #[arg(long, default_value_t = 512)]
    pub batch_size: usize,

    /// RmsProp learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub learning_rate: f64,

    /// Seed for the shuffled train/dev split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Skip saving the trained artifact
    #[arg(long)]
    pub no_save: bool,

    /// Print the history chart after training
    #[arg(long)]
    pub chart: bool,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 — the
/// application layer never sees clap types.
impl From<&TrainArgs> for TrainConfig {
    fn from(a: &TrainArgs) -> Self {
        TrainConfig {
            corpus_path: a.corpus.clone(),
            model_dir: a.model_dir.clone(),
            model_name: a.model_name.clone(),
            dev_fraction: a.dev_fraction,
            epochs: a.epochs,
            batch_size: a.batch_size,
            learning_rate: a.learning_rate,
            seed: a.seed,
            save_model: !a.no_save,
        }
    }
}

/// All arguments for the `evaluate` command
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Labelled test corpus (JSONL, one story per line)
    #[arg(long, default_value = "data/test.jsonl")]
    pub corpus: String,

    /// Directory the artifact was saved in
    #[arg(long, default_value = "model")]
    pub model_dir: String,

    /// Artifact to score (defaults to the last one saved)
    #[arg(long)]
    pub model_name: Option<String>,

    /// Number of samples per forward pass
    #[arg(long, default_value_t = 512)]
    pub batch_size: usize,
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Input stories (JSONL; labels, if present, are ignored)
    #[arg(long)]
    pub input: String,

    /// Directory the artifact was saved in
    #[arg(long, default_value = "model")]
    pub model_dir: String,

    /// Load this artifact before predicting, replacing the
    /// latest one
    #[arg(long)]
    pub model_name: Option<String>,

    /// How many topics to print per story
    #[arg(long, default_value_t = 3)]
    pub top_k: usize,
}

/// All arguments for the `history` command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Directory holding history.csv from a training run
    #[arg(long, default_value = "model")]
    pub model_dir: String,
}
