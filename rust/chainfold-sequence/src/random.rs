//! Random integer sequences.

use chainfold_common::error::Error;
use chainfold_common::{Result, verify_arg};

use crate::sequence::Sequence;

/// Options for [`generate_random_sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSequenceOptions {
    /// Number of elements to generate.
    pub count: usize,
    /// Exclusive upper bound of every element; elements are drawn from `[0, max)`.
    pub max: i64,
    /// Seed for reproducible output. When `None`, the generator is seeded from
    /// the thread-local random source.
    pub seed: Option<u64>,
}

impl Default for RandomSequenceOptions {
    fn default() -> Self {
        RandomSequenceOptions {
            count: 50,
            max: 100,
            seed: None,
        }
    }
}

impl RandomSequenceOptions {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generates a sequence of `options.count` integers, each drawn independently
/// and uniformly from `[0, options.max)`.
///
/// Fails with `InvalidArgument` if `options.max` is not positive or if storage
/// for `options.count` elements cannot be reserved.
pub fn generate_random_sequence(options: &RandomSequenceOptions) -> Result<Sequence<i64>> {
    verify_arg!(max, options.max > 0);
    let mut rng = match options.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    log::debug!(
        "generating {} random values in [0, {}), seed: {:?}",
        options.count,
        options.max,
        options.seed
    );
    let mut sequence = Sequence::try_with_capacity(options.count)
        .map_err(|e| Error::invalid_arg("count", e.to_string()))?;
    for _ in 0..options.count {
        sequence.append(rng.i64(0..options.max));
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainfold_common::error::ErrorKind;

    #[test]
    fn test_generate_bounds() {
        let options = RandomSequenceOptions::default().with_seed(297135646);
        let s = generate_random_sequence(&options).unwrap();
        assert_eq!(s.size(), 50);
        assert!(s.iter().all(|&v| (0..100).contains(&v)));
        s.verify();
    }

    #[test]
    fn test_generate_reproducible() {
        let options = RandomSequenceOptions::default()
            .with_count(200)
            .with_max(7)
            .with_seed(6412384656);
        let a = generate_random_sequence(&options).unwrap();
        let b = generate_random_sequence(&options).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0..7).contains(&v)));
    }

    #[test]
    fn test_generate_empty() {
        let options = RandomSequenceOptions::default().with_count(0);
        assert!(generate_random_sequence(&options).unwrap().is_empty());
    }

    #[test]
    fn test_generate_max_one() {
        let options = RandomSequenceOptions::default().with_count(10).with_max(1);
        let s = generate_random_sequence(&options).unwrap();
        assert!(s.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_generate_count_too_large() {
        let options = RandomSequenceOptions::default().with_count(usize::MAX);
        let err = generate_random_sequence(&options).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "count"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generate_invalid_max() {
        let options = RandomSequenceOptions::default().with_max(0);
        let err = generate_random_sequence(&options).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }
}
