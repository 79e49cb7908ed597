use anyhow::{Context, Result};
use std::io::{self, Write};

use chainfold_sequence::sequence::Sequence;
use chainfold_sequence::transform::Average;

use crate::commands::widen;

pub fn run(values: Vec<i64>) -> Result<()> {
    let input: Sequence<i64> = values.into_iter().collect();
    let mut out = io::stdout().lock();
    write_average(&mut out, &input)?;
    out.flush()?;
    Ok(())
}

/// Writes the count, sum and integer average of `input`.
///
/// The sum is accumulated as `i128`, so it cannot overflow for `i64` input.
pub fn write_average<W: Write + ?Sized>(out: &mut W, input: &Sequence<i64>) -> Result<()> {
    let sum_count = widen(input).accumulate(&mut Average);
    let average = sum_count
        .average()
        .with_context(|| "Failed to compute average")?;
    let average = i64::try_from(average)
        .with_context(|| format!("Average {average} does not fit in i64"))?;
    writeln!(
        out,
        "count: {}\tsum: {}\taverage: {}",
        sum_count.count(),
        sum_count.sum(),
        average
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn average_of(values: &[i64]) -> Result<String> {
        let input: Sequence<i64> = values.iter().copied().collect();
        let mut out = Vec::new();
        write_average(&mut out, &input)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_write_average() {
        assert_eq!(
            average_of(&[1, 2, 3, 4]).unwrap(),
            "count: 4\tsum: 10\taverage: 2\n"
        );
    }

    #[test]
    fn test_write_average_large_values() {
        let out = average_of(&[i64::MAX, i64::MAX]).unwrap();
        assert_eq!(
            out,
            format!("count: 2\tsum: {}\taverage: {}\n", 2 * i128::from(i64::MAX), i64::MAX)
        );
    }

    #[test]
    fn test_write_average_empty() {
        let err = average_of(&[]).unwrap_err();
        assert!(err.to_string().contains("Failed to compute average"));
        assert!(format!("{err:#}").contains("requires at least one element"));
    }
}
