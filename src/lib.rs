//! Insertion sort and selection sort over mutable slices.
//!
//! Both strategies implement [`sort_test_tools::Sort`], so they can be driven through the shared
//! test suite and the benchmarks interchangeably. [`Strategy`] picks one at runtime.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod insertion;
pub mod print;
pub mod selection;
pub mod strategy;

pub use error::{Result, SortError};
pub use strategy::Strategy;

/// Checks that `len` elements fit into a sequence of `capacity` elements.
fn check_len(len: usize, capacity: usize) -> Result<()> {
    if len > capacity {
        tracing::debug!(len, capacity, "rejecting sort of out of bounds prefix");
        return Err(SortError::InvalidArgument { len, capacity });
    }

    Ok(())
}
