// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and constants that define the core concepts
// of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain structs, enums, constants, and traits
//
// Keeping this layer pure means every type in it can be unit
// tested without touching a tensor backend or the filesystem.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A newswire story (word-index ranks + optional topic label)
// and the 46-entry topic table
pub mod newswire;

// A probability distribution over the topics for one story
pub mod prediction;

// Core abstractions (traits) that other layers implement
pub mod traits;
