// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Four commands are supported:
//   1. `train`    — trains the classifier and records history
//   2. `evaluate` — scores an artifact on a test corpus
//   3. `predict`  — prints ranked topics for new stories
//   4. `history`  — re-renders the history chart from CSV
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the submodules
pub mod commands;
pub mod chart;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EvaluateArgs, HistoryArgs, PredictArgs, TrainArgs};

use crate::infra::history::{series, HistoryLogger};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "newswire-topics",
    version = "0.1.0",
    about = "Train a dense bag-of-words classifier over 46 newswire topics, \
             then evaluate it and predict topics for new stories."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use
    /// case. This keeps the CLI layer thin — it only routes and
    /// prints, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Predict(args) => run_predict(args),
            Commands::History(args) => run_history(args),
        }
    }
}

/// Handles the `train` subcommand.
fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Starting training on corpus: {}", args.corpus);

    let use_case = TrainUseCase::new((&args).into());
    let history = use_case.execute()?;

    if let (Ok(loss), Ok(val_loss)) = (
        history.require(series::LOSS),
        history.require(series::VAL_LOSS),
    ) {
        println!(
            "Training complete after {} epoch(s): loss={:.4}, val_loss={:.4}",
            history.epochs(),
            loss.last().copied().unwrap_or(f64::NAN),
            val_loss.last().copied().unwrap_or(f64::NAN),
        );
    }
    if args.no_save {
        println!("Artifact not saved (--no-save).");
    } else {
        println!("Artifact '{}' saved in '{}'.", args.model_name, args.model_dir);
    }

    if args.chart {
        println!();
        print!("{}", chart::render_history(&history)?);
    }
    Ok(())
}

/// Handles the `evaluate` subcommand.
fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use crate::application::evaluate_use_case::EvaluateUseCase;

    let use_case = EvaluateUseCase::new(
        args.corpus,
        args.model_dir,
        args.model_name,
        args.batch_size,
    );
    let report = use_case.execute()?;

    println!(
        "Test loss: {:.4}  accuracy: {:.2}%",
        report.loss,
        report.accuracy * 100.0
    );
    Ok(())
}

/// Handles the `predict` subcommand.
fn run_predict(args: PredictArgs) -> Result<()> {
    use crate::application::predict_use_case::PredictUseCase;

    let use_case = PredictUseCase::new(
        args.input,
        args.model_dir,
        args.model_name,
    );
    let predictions = use_case.execute()?;

    for (i, prediction) in predictions.iter().enumerate() {
        println!(
            "story {}: {} ({:.1}%)",
            i + 1,
            prediction.predicted_topic(),
            prediction.confidence() * 100.0
        );
        for (label, name, p) in prediction.top_k(args.top_k) {
            println!("  {:>2}  {:<16} {:>6.2}%", label, name, p * 100.0);
        }
    }
    Ok(())
}

/// Handles the `history` subcommand.
fn run_history(args: HistoryArgs) -> Result<()> {
    let history = HistoryLogger::load(&args.model_dir)?;
    print!("{}", chart::render_history(&history)?);
    Ok(())
}
