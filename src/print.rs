//! Diagnostic rendering of sequences.

use std::fmt;

/// Displays the elements of a slice separated by single spaces.
#[derive(Debug, Clone, Copy)]
pub struct Spaced<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();

        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for val in iter {
                write!(f, " {val}")?;
            }
        }

        Ok(())
    }
}

pub fn format_spaced<T: fmt::Display>(v: &[T]) -> String {
    Spaced(v).to_string()
}
