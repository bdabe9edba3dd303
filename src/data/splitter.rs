// ============================================================
// Layer 4 — Train/Dev Splitter
// ============================================================
// Shuffles samples with a seeded RNG and splits them into two
// sets:
//   - Training set: used to update model weights
//   - Dev set:      used to measure generalisation each epoch
//
// Why shuffle before splitting?
//   Corpus files are often ordered by topic. Without shuffling,
//   the dev set would contain only the classes that happen to
//   come last in the file.
//
// Why a seeded RNG instead of thread_rng?
//   The same seed must always produce the same split, so a
//   training run can be reproduced exactly. The seed travels in
//   the training config.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation
//            Rust Book §8 (Vectors)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `samples` with the given seed and split off a dev set.
///
/// `dev_fraction` is the proportion held out for the dev set,
/// e.g. 0.1 keeps 90% for training. The two halves are disjoint
/// and together contain every input sample.
pub fn split_train_dev<T>(
    mut samples: Vec<T>,
    dev_fraction: f64,
    seed: u64,
) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total = samples.len();
    let dev_count = ((total as f64) * dev_fraction).round() as usize;
    let split_at = total.saturating_sub(dev_count);

    // split_off(n) removes elements [n..] and returns them
    let dev = samples.split_off(split_at);

    tracing::debug!(
        "Corpus split: {} train, {} dev (seed {})",
        samples.len(),
        dev.len(),
        seed,
    );

    (samples, dev)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, dev) = split_train_dev(items, 0.1, 42);
        assert_eq!(train.len(), 90);
        assert_eq!(dev.len(), 10);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..57).collect();
        let (train, dev) = split_train_dev(items, 0.25, 7);
        let mut all: Vec<usize> = train.into_iter().chain(dev).collect();
        all.sort_unstable();
        assert_eq!(all, (0..57).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_dev((0..40).collect::<Vec<usize>>(), 0.2, 99);
        let b = split_train_dev((0..40).collect::<Vec<usize>>(), 0.2, 99);
        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
    }

    #[test]
    fn test_different_seed_different_order() {
        let a = split_train_dev((0..40).collect::<Vec<usize>>(), 0.2, 1);
        let b = split_train_dev((0..40).collect::<Vec<usize>>(), 0.2, 2);
        // Sizes always match; the shuffled order should not.
        assert_eq!(a.0.len(), b.0.len());
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn test_empty_dataset() {
        let (train, dev) = split_train_dev(Vec::<usize>::new(), 0.1, 0);
        assert!(train.is_empty());
        assert!(dev.is_empty());
    }

    #[test]
    fn test_zero_fraction_keeps_everything_for_training() {
        let (train, dev) = split_train_dev((0..10).collect::<Vec<usize>>(), 0.0, 3);
        assert_eq!(train.len(), 10);
        assert!(dev.is_empty());
    }
}
