/// A sort implementation the shared suite and the benchmarks can drive.
///
/// Implementations whose `name` contains `"unstable"` are not expected to preserve the relative
/// order of equal elements, the suite skips its stability check for them.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
