//! Insertion sort.
//!
//! Grows a sorted prefix one element at a time. Each new element is moved left by adjacent swaps
//! until its left neighbour is not greater than it. Equal elements never cross, so the sort is
//! stable. Quadratic in the worst case, linear on already sorted input.

use std::cmp::Ordering;

use crate::Result;

sort_impl!("textbook_insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the first `len` elements of `v`, leaving the rest untouched.
///
/// Fails without touching `v` if `len` is larger than `v.len()`.
pub fn sort_len<T>(v: &mut [T], len: usize) -> Result<()>
where
    T: Ord,
{
    crate::check_len(len, v.len())?;
    tracing::trace!(len, "insertion sort");

    sort(&mut v[..len]);
    Ok(())
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Invariant: v[..i] is sorted.
    for i in 1..v.len() {
        let mut j = i;

        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
