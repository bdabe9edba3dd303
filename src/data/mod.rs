// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from corpus files on disk all
// the way to tensor batches for the training loop.
//
// The pipeline flows in this order:
//
//   corpus .jsonl file
//       │
//       ▼
//   JsonlLoader       → reads one story record per line
//       │
//       ▼
//   Vectorizer        → multi-hot encodes word ranks (dim 10000)
//       │
//       ▼
//   split_train_dev   → seeded shuffle + train/dev split
//       │
//       ▼
//   TopicDataset      → implements Burn's Dataset trait
//       │
//       ▼
//   TopicBatcher      → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step, so each step
// is independently testable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads newswire stories from JSONL corpus files
pub mod loader;

/// Multi-hot bag-of-words encoding
pub mod vectorizer;

/// Seeded shuffle and train/dev split
pub mod splitter;

/// Implements Burn's Dataset trait for topic samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
