// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer can swap data sources without changing
// the code that uses them:
//   - JsonlLoader implements StorySource
//   - A future in-memory or network source could as well
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::newswire::NewswireStory;

/// Any component that can produce newswire stories.
///
/// Implementations:
///   - JsonlLoader → reads one JSON record per line from a file
pub trait StorySource {
    /// Load every story this source holds, in file order.
    fn load_all(&self) -> Result<Vec<NewswireStory>>;
}
