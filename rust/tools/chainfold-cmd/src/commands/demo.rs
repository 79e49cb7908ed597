use anyhow::{Context, Result};
use std::io::{self, Write};

use chainfold_sequence::printer::write_columns;
use chainfold_sequence::random::{RandomSequenceOptions, generate_random_sequence};
use chainfold_sequence::transform::{Diff, RunningAverage};

use crate::commands::widen;

pub fn run(count: usize, max: i64, seed: Option<u64>) -> Result<()> {
    let mut options = RandomSequenceOptions::default()
        .with_count(count)
        .with_max(max);
    if let Some(seed) = seed {
        options = options.with_seed(seed);
    }

    let mut out = io::stdout().lock();
    write_demo(&mut out, &options)?;
    out.flush()?;
    Ok(())
}

/// Generates a random sequence and writes it next to its running average,
/// first difference and running average of the difference.
///
/// Transforms run on `i128` values, so no input below `i64::MAX` can overflow.
pub fn write_demo<W: Write + ?Sized>(out: &mut W, options: &RandomSequenceOptions) -> Result<()> {
    let input = generate_random_sequence(options).with_context(|| {
        format!(
            "Failed to generate {} values below {}",
            options.count, options.max
        )
    })?;
    let input = widen(&input);
    let running_average = input.accumulate(&mut RunningAverage);
    let diff = input.accumulate(&mut Diff);
    let diff_average = diff.sequence().accumulate(&mut RunningAverage);
    log::info!("transformed {} random values", input.size());

    write_columns(
        out,
        &[
            &input,
            running_average.sequence(),
            diff.sequence(),
            diff_average.sequence(),
        ],
    )
    .with_context(|| "Failed to write columns")?;
    Ok(())
}
