// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads newswire stories from a JSON-lines corpus file.
//
// File format — one JSON object per line:
//   {"indices": [1, 245, 2, 9], "label": 3}
//   {"indices": [8, 13, 21]}
//
// `indices` are vocabulary ranks (1 = most common word).
// `label` is the topic class and may be absent: the same format
// is used for labelled train/test corpora and for unlabelled
// prediction input.
//
// Blank lines are skipped. A line that is present but malformed
// is a hard error — silently dropping records would skew every
// metric computed downstream.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::newswire::NewswireStory;
use crate::domain::traits::StorySource;

/// Loads newswire stories from a single JSONL file.
/// Implements the StorySource trait from Layer 3.
pub struct JsonlLoader {
    /// Path to the corpus file
    path: PathBuf,
}

impl JsonlLoader {
    /// Create a new loader pointed at a corpus file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorySource for JsonlLoader {
    fn load_all(&self) -> Result<Vec<NewswireStory>> {
        let text = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Cannot read corpus file '{}'. \
                 Expected one JSON record per line.",
                self.path.display()
            )
        })?;

        let mut stories = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let story: NewswireStory =
                serde_json::from_str(line).with_context(|| {
                    format!(
                        "Malformed record at {}:{}",
                        self.path.display(),
                        line_no + 1
                    )
                })?;
            stories.push(story);
        }

        tracing::info!(
            "Loaded {} stories from '{}'",
            stories.len(),
            self.path.display()
        );
        Ok(stories)
    }
}
