//! Command implementations for chainfold-cmd

use anyhow::{Context, Result};

use chainfold_sequence::sequence::Sequence;

pub mod average;
pub mod demo;
pub mod transform;

/// Copies `input` into `i128`, so that sums and differences of two values
/// cannot overflow while transforming.
pub fn widen(input: &Sequence<i64>) -> Sequence<i128> {
    input.iter().map(|&v| i128::from(v)).collect()
}

/// Converts transform output back to `i64`, failing on the first value out of range.
pub fn narrow(output: &Sequence<i128>) -> Result<Sequence<i64>> {
    output
        .iter()
        .enumerate()
        .map(|(position, &v)| {
            i64::try_from(v)
                .with_context(|| format!("Value {v} at position {position} does not fit in i64"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_narrow() {
        let input: Sequence<i64> = [i64::MIN, 0, i64::MAX].into_iter().collect();
        assert_eq!(narrow(&widen(&input)).unwrap(), input);

        let too_large: Sequence<i128> = [1, i128::from(i64::MAX) + 1].into_iter().collect();
        let err = narrow(&too_large).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }
}
