// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one and
// the data layer's Dataset/Batcher impls.
//
// What's in this layer:
//
//   model.rs     — The dense topic network
//                  10000 → 64 (relu) → 64 (relu) → 46,
//                  logits out, softmax helper for probabilities
//
//   trainer.rs   — The training loop
//                  Minibatch forward, cross-entropy loss,
//                  backward pass, RmsProp step, per-epoch dev
//                  validation, history recording, artifact save
//
//   evaluator.rs — Scoring on a held-out test split
//                  One forward pass, average loss + accuracy
//
//   predictor.rs — Forward inference on new feature vectors
//                  Loads an artifact, owns the network, returns
//                  per-topic probability distributions
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Dense topic classifier architecture
pub mod model;

/// Full training loop with validation and history recording
pub mod trainer;

/// Held-out test split scoring
pub mod evaluator;

/// Inference engine — loads an artifact and predicts topics
pub mod predictor;
