// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any business
// layer:
//
//   artifact.rs — Saving and loading trained networks.
//                 Uses Burn's CompactRecorder for the weights,
//                 a JSON sidecar for the topology, and a
//                 latest-artifact pointer file.
//
//   history.rs  — The per-run training history (the four
//                 monitoring series) and its CSV logger.
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Checkpointing)

/// Trained-artifact saving and loading
pub mod artifact;

/// Training history record and CSV logger
pub mod history;
