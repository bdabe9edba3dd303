// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full train + validation loop using Burn's DataLoader and the
// RmsProp optimiser (rho 0.9, epsilon 1e-7).
//
// Backend split:
//   - Training uses TrainBackend (Autodiff<NdArray>) for gradients
//   - model.valid() returns the model on ValidBackend (NdArray)
//   - The dev batcher must also use ValidBackend
//   - argmax(1) returns [batch, 1] so we flatten before .equal()
//
// Each epoch appends one entry to each of the four history
// series and one row to the history CSV, so after training the
// series lengths always equal the epoch count.
//
// Reference: Burn Book §5, Tieleman & Hinton (2012) RmsProp

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    nn::loss::CrossEntropyLossConfig,
    optim::{GradientsParams, Optimizer, RmsPropConfig},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::TopicBatcher, dataset::TopicDataset};
use crate::infra::artifact::ArtifactStore;
use crate::infra::history::{EpochMetrics, HistoryLogger, TrainingHistory};
use crate::ml::model::{TopicNet, TopicNetConfig};

pub type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;
pub type ValidBackend = burn::backend::NdArray;

pub fn run_training(
    cfg: &TrainConfig,
    train_dataset: TopicDataset,
    dev_dataset: TopicDataset,
    store: &ArtifactStore,
) -> Result<(TrainingHistory, TopicNet<TrainBackend>)> {
    let device = burn::backend::ndarray::NdArrayDevice::Cpu;

    // ── Build model ───────────────────────────────────────────────────────────
    let net_cfg = TopicNetConfig::new();
    let mut model: TopicNet<TrainBackend> = net_cfg.init(&device);
    tracing::info!(
        "Model ready: {} → {} → {} → {}",
        net_cfg.input_dim, net_cfg.hidden_dim, net_cfg.hidden_dim, net_cfg.num_classes,
    );

    // ── RmsProp optimiser ─────────────────────────────────────────────────────
    // v = ρ*v + (1-ρ)*g²           (running variance)
    // θ = θ - lr * g / (√v + ε)    (update)
    let mut optim = RmsPropConfig::new()
        .with_alpha(0.9)
        .with_epsilon(1e-7)
        .with_momentum(0.0)
        .init();

    // ── Training data loader (AutodiffBackend) ────────────────────────────────
    let train_batcher = TopicBatcher::<TrainBackend>::new(device.clone());
    let train_loader = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(train_dataset);

    // ── Dev data loader (inner backend — no autodiff overhead) ────────────────
    let dev_batcher = TopicBatcher::<ValidBackend>::new(device.clone());
    let dev_loader = DataLoaderBuilder::new(dev_batcher)
        .batch_size(cfg.batch_size)
        .num_workers(1)
        .build(dev_dataset);

    let train_criterion = CrossEntropyLossConfig::new().init(&device);
    let dev_criterion = CrossEntropyLossConfig::new().init(&device);

    // Fresh history per run: the CSV is truncated, never appended
    // across runs.
    let mut history = TrainingHistory::new();
    let logger = HistoryLogger::create(store.dir())?;

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {

        // ── Training phase ────────────────────────────────────────────────────
        let mut loss_sum = 0.0f64;
        let mut batches = 0usize;
        let mut correct = 0usize;
        let mut seen = 0usize;

        for batch in train_loader.iter() {
            let logits = model.forward(batch.features);
            let loss = train_criterion.forward(logits.clone(), batch.targets.clone());

            loss_sum += loss.clone().into_scalar().elem::<f64>();
            batches += 1;

            // Training accuracy from the same forward pass
            let predicted = logits.argmax(1).flatten::<1>(0, 1);
            let hits: i64 = predicted
                .equal(batch.targets.clone())
                .int()
                .sum()
                .into_scalar()
                .elem::<i64>();
            correct += hits as usize;
            seen += batch.targets.dims()[0];

            // Backward pass + RmsProp update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.learning_rate, model, grads);
        }

        let train_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };
        let train_acc = if seen > 0 { correct as f64 / seen as f64 } else { 0.0 };

        // ── Validation phase ──────────────────────────────────────────────────
        // model.valid() → TopicNet<ValidBackend>, no gradient tracking
        let model_valid = model.valid();

        let mut dev_loss_sum = 0.0f64;
        let mut dev_batches = 0usize;
        let mut dev_correct = 0usize;
        let mut dev_seen = 0usize;

        for batch in dev_loader.iter() {
            let logits = model_valid.forward(batch.features);
            let loss = dev_criterion.forward(logits.clone(), batch.targets.clone());

            dev_loss_sum += loss.into_scalar().elem::<f64>();
            dev_batches += 1;

            let predicted = logits.argmax(1).flatten::<1>(0, 1);
            let hits: i64 = predicted
                .equal(batch.targets.clone())
                .int()
                .sum()
                .into_scalar()
                .elem::<i64>();
            dev_correct += hits as usize;
            dev_seen += batch.targets.dims()[0];
        }

        let dev_loss = if dev_batches > 0 { dev_loss_sum / dev_batches as f64 } else { f64::NAN };
        let dev_acc = if dev_seen > 0 { dev_correct as f64 / dev_seen as f64 } else { 0.0 };

        let metrics = EpochMetrics::new(epoch, train_loss, dev_loss, train_acc, dev_acc);
        history.push(&metrics);
        logger.log(&metrics)?;

        println!(
            "Epoch {:>3}/{} | loss={:.4} | val_loss={:.4} | acc={:.1}% | val_acc={:.1}%",
            epoch, cfg.epochs, train_loss, dev_loss,
            train_acc * 100.0, dev_acc * 100.0,
        );
    }

    tracing::info!("History written to '{}'", logger.csv_path().display());

    // ── Persist the trained artifact ──────────────────────────────────────────
    if cfg.save_model {
        store.save(&model, &net_cfg, &cfg.model_name)?;
        tracing::info!("Artifact '{}' saved to '{}'", cfg.model_name, store.dir().display());
    } else {
        tracing::info!("Skipping artifact save (save_model = false)");
    }

    Ok((history, model))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::TopicSample;
    use crate::data::vectorizer::Vectorizer;
    use crate::infra::history::series;

    fn tiny_corpus(n: usize) -> Vec<TopicSample> {
        // Class i stories mention word rank i — linearly separable
        let v = Vectorizer::default();
        (0..n)
            .map(|i| TopicSample {
                features: v.multi_hot(&[(i % 3) as u32, 100 + (i % 3) as u32]),
                label: i % 3,
            })
            .collect()
    }

    fn test_config(dir: &std::path::Path, epochs: usize) -> TrainConfig {
        TrainConfig {
            epochs,
            batch_size: 4,
            save_model: false,
            model_dir: dir.to_string_lossy().into_owned(),
            ..TrainConfig::default()
        }
    }

    #[test]
    fn test_history_length_matches_epochs() {
        let dir = std::env::temp_dir()
            .join(format!("newswire-trainer-{}-len", std::process::id()));
        let store = ArtifactStore::new(&dir);
        let cfg = test_config(&dir, 3);

        let (history, _model) = run_training(
            &cfg,
            TopicDataset::new(tiny_corpus(12)),
            TopicDataset::new(tiny_corpus(6)),
            &store,
        )
        .unwrap();

        assert_eq!(history.epochs(), 3);
        for name in series::CANONICAL {
            assert_eq!(history.series(name).unwrap().len(), 3);
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_single_epoch_loss_is_finite() {
        let dir = std::env::temp_dir()
            .join(format!("newswire-trainer-{}-fin", std::process::id()));
        let store = ArtifactStore::new(&dir);
        let cfg = test_config(&dir, 1);

        let (history, _model) = run_training(
            &cfg,
            TopicDataset::new(tiny_corpus(8)),
            TopicDataset::new(tiny_corpus(4)),
            &store,
        )
        .unwrap();

        let loss = history.series(series::LOSS).unwrap()[0];
        assert!(loss.is_finite());
        assert!(loss >= 0.0);
        std::fs::remove_dir_all(&dir).ok();
    }
}
