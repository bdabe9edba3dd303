// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Scores a trained network on a held-out test split: one batched
// forward pass, no parameter updates, no gradient tracking.
// Returns the average cross-entropy loss and the overall
// classification accuracy.

use anyhow::{bail, Result};
use burn::{
    data::dataloader::DataLoaderBuilder,
    nn::loss::CrossEntropyLossConfig,
    prelude::*,
};

use crate::data::{batcher::TopicBatcher, dataset::TopicDataset};
use crate::ml::model::TopicNet;

/// Scalar results of one evaluation pass.
#[derive(Debug, Clone, Copy)]
pub struct EvalReport {
    /// Average cross-entropy loss over the test split
    pub loss: f64,
    /// Fraction of test samples classified correctly, in [0, 1]
    pub accuracy: f64,
}

/// Evaluate `model` on `test_dataset`, batched at `batch_size`.
pub fn evaluate<B: Backend>(
    model: &TopicNet<B>,
    test_dataset: TopicDataset,
    batch_size: usize,
    device: &B::Device,
) -> Result<EvalReport> {
    if test_dataset.sample_count() == 0 {
        bail!("Test split is empty — nothing to evaluate");
    }

    let batcher = TopicBatcher::<B>::new(device.clone());
    let loader = DataLoaderBuilder::new(batcher)
        .batch_size(batch_size)
        .num_workers(1)
        .build(test_dataset);

    let criterion = CrossEntropyLossConfig::new().init(device);

    let mut loss_sum = 0.0f64;
    let mut batches = 0usize;
    let mut correct = 0usize;
    let mut seen = 0usize;

    for batch in loader.iter() {
        let logits = model.forward(batch.features);
        let loss = criterion.forward(logits.clone(), batch.targets.clone());

        loss_sum += loss.into_scalar().elem::<f64>();
        batches += 1;

        let predicted = logits.argmax(1).flatten::<1>(0, 1);
        let hits: i64 = predicted
            .equal(batch.targets.clone())
            .int()
            .sum()
            .into_scalar()
            .elem::<i64>();
        correct += hits as usize;
        seen += batch.targets.dims()[0];
    }

    let report = EvalReport {
        loss: loss_sum / batches as f64,
        accuracy: correct as f64 / seen as f64,
    };
    tracing::info!(
        "Evaluated {} samples: loss={:.4}, accuracy={:.2}%",
        seen, report.loss, report.accuracy * 100.0,
    );
    Ok(report)
}
