//! Text output for sequences.

use std::fmt::Display;
use std::io::{self, Write};

use crate::sequence::{Iter, Sequence};
use crate::visitor::Visitor;

/// A [`Visitor`] that writes every element as `"{value}, "`.
///
/// With `line_break` set, each element is followed by a newline; otherwise all
/// elements share one line, terminated on completion.
///
/// Visitor callbacks cannot return errors, so the first I/O error is kept and
/// reported by [`PrintVisitor::finish`]. Output stops after an error.
pub struct PrintVisitor<W> {
    out: W,
    line_break: bool,
    error: Option<io::Error>,
}

impl<W: Write> PrintVisitor<W> {
    pub fn new(out: W, line_break: bool) -> PrintVisitor<W> {
        PrintVisitor {
            out,
            line_break,
            error: None,
        }
    }

    /// Returns the writer, or the first error encountered while printing.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl<T, W> Visitor<T> for PrintVisitor<W>
where
    T: Display,
    W: Write,
{
    fn on_element(&mut self, value: &T) {
        if self.error.is_some() {
            return;
        }
        let result = if self.line_break {
            writeln!(self.out, "{value}, ")
        } else {
            write!(self.out, "{value}, ")
        };
        self.record(result);
    }

    fn on_complete(&mut self) {
        if self.error.is_some() || self.line_break {
            return;
        }
        let result = writeln!(self.out);
        self.record(result);
    }
}

/// Writes `sequences` side by side, one row per position.
///
/// Each row is the row index followed by the element at that position from
/// every sequence that still has one. Shorter sequences stop contributing once
/// exhausted; writing ends when no sequence has an element left.
pub fn write_columns<T, W>(out: &mut W, sequences: &[&Sequence<T>]) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    let mut cursors: Vec<Iter<'_, T>> = sequences.iter().map(|s| s.iter()).collect();
    let mut row = 0usize;
    loop {
        let values: Vec<&T> = cursors.iter_mut().filter_map(Iterator::next).collect();
        if values.is_empty() {
            break;
        }
        write!(out, "{row}:\t")?;
        for value in values {
            write!(out, "{value}\t")?;
        }
        writeln!(out)?;
        row += 1;
    }
    log::debug!("wrote {row} rows for {} sequences", sequences.len());
    Ok(())
}
