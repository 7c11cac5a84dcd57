use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{insertion, selection, Result, SortError};

/// Runtime selection between the sort implementations of this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Insertion,
    Selection,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Insertion, Strategy::Selection];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Insertion => "insertion",
            Strategy::Selection => "selection",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(&self) -> bool {
        match self {
            Strategy::Insertion => true,
            Strategy::Selection => false,
        }
    }

    pub fn sort<T: Ord>(&self, v: &mut [T]) {
        match self {
            Strategy::Insertion => insertion::sort(v),
            Strategy::Selection => selection::sort(v),
        }
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Strategy::Insertion => insertion::sort_by(v, compare),
            Strategy::Selection => selection::sort_by(v, compare),
        }
    }

    pub fn sort_len<T: Ord>(&self, v: &mut [T], len: usize) -> Result<()> {
        match self {
            Strategy::Insertion => insertion::sort_len(v, len),
            Strategy::Selection => selection::sort_len(v, len),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::UnknownStrategy(s.to_owned()))
    }
}
