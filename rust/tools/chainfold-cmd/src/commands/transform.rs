use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::{self, Write};

use chainfold_sequence::printer::PrintVisitor;
use chainfold_sequence::sequence::Sequence;
use chainfold_sequence::transform::{Collect, Diff, RunningAverage};

use crate::commands::{narrow, widen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransformKind {
    /// Running pairwise average
    RunningAverage,
    /// First difference
    Diff,
    /// Unchanged copy of the input
    Collect,
}

pub fn run(kind: TransformKind, values: Vec<i64>, line_break: bool) -> Result<()> {
    let input: Sequence<i64> = values.into_iter().collect();
    let output = apply(kind, &input)?;
    log::debug!("{kind:?}: {} values in, {} out", input.size(), output.size());

    let mut printer = PrintVisitor::new(io::stdout().lock(), line_break);
    output.visit(&mut printer);
    printer
        .finish()
        .with_context(|| "Failed to write output")?
        .flush()?;
    Ok(())
}

/// Applies `kind` to `input`.
///
/// The transform runs on `i128` values; an output value outside the `i64`
/// range is reported as an error.
pub fn apply(kind: TransformKind, input: &Sequence<i64>) -> Result<Sequence<i64>> {
    let wide = widen(input);
    let output = match kind {
        TransformKind::RunningAverage => wide.accumulate(&mut RunningAverage).into_sequence(),
        TransformKind::Diff => wide.accumulate(&mut Diff).into_sequence(),
        TransformKind::Collect => wide.accumulate(&mut Collect).build(),
    };
    narrow(&output).with_context(|| format!("{kind:?} result is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(kind: TransformKind, input: &[i64]) -> Result<Vec<i64>> {
        let input: Sequence<i64> = input.iter().copied().collect();
        Ok(apply(kind, &input)?.iter().copied().collect())
    }

    #[test]
    fn test_apply() {
        let input = [10, 20, 30];
        assert_eq!(values(TransformKind::RunningAverage, &input).unwrap(), [10, 15, 25]);
        assert_eq!(values(TransformKind::Diff, &input).unwrap(), [0, 10, 10]);
        assert_eq!(values(TransformKind::Collect, &input).unwrap(), [10, 20, 30]);
    }

    #[test]
    fn test_apply_extreme_values() {
        let input = [i64::MAX, i64::MAX, i64::MIN];
        assert_eq!(
            values(TransformKind::RunningAverage, &input).unwrap(),
            [i64::MAX, i64::MAX, 0]
        );
        assert_eq!(values(TransformKind::Collect, &input).unwrap(), input);
    }

    #[test]
    fn test_apply_diff_out_of_range() {
        let err = values(TransformKind::Diff, &[i64::MIN, i64::MAX]).unwrap_err();
        assert!(err.to_string().contains("Diff result is out of range"));
    }
}
