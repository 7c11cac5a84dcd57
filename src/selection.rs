//! Selection sort.
//!
//! Repeatedly selects the minimum of the unsorted suffix and swaps it to the front of that
//! suffix. Always performs exactly `n * (n - 1) / 2` comparisons and at most `n - 1` exchanges.
//! The long range exchange can move an element past others equal to it, so the sort is unstable.

use std::cmp::Ordering;

use crate::Result;

sort_impl!("textbook_selection_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the first `len` elements of `v`, leaving the rest untouched.
///
/// Fails without touching `v` if `len` is larger than `v.len()`.
pub fn sort_len<T>(v: &mut [T], len: usize) -> Result<()>
where
    T: Ord,
{
    crate::check_len(len, v.len())?;
    tracing::trace!(len, "selection sort");

    sort(&mut v[..len]);
    Ok(())
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Invariant: v[..i] is sorted and holds the i smallest elements.
    for i in 0..v.len() {
        let min = min_index(&v[i..], is_less) + i;

        if min != i {
            v.swap(i, min);
        }
    }
}

/// Index of the first occurrence of the minimum of `v`, `0` for an empty slice.
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min = 0;

    // Strict comparison keeps the first occurrence.
    for j in 1..v.len() {
        if is_less(&v[j], &v[min]) {
            min = j;
        }
    }

    min
}
