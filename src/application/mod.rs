// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one goal per use case (training, evaluating, predicting).
//
// Rules for this layer:
//   - No tensor math or model code here
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The training workflow
pub mod train_use_case;

// Scoring a trained artifact on a held-out test corpus
pub mod evaluate_use_case;

// Forward inference on new stories
pub mod predict_use_case;
