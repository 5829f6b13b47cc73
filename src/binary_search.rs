//! Iterative binary search over a sorted slice.

use std::cmp::Ordering;

/// Searches `sorted` for `key` by repeated bisection, returning the index of a matching
/// element or `None` when no element matches.
///
/// `sorted` must be in ascending order. This is not checked: on unsorted input the result is
/// unspecified, though the search still terminates without panicking. When several elements
/// equal `key`, the index returned is whichever one the bisection reaches first, which is not
/// necessarily the lowest.
///
/// # Examples
///
/// ```
/// use ds_classics::binary_search::search;
///
/// let sorted = [2, 5, 8, 12, 16, 23];
/// assert_eq!(search(&sorted, &16), Some(4));
/// assert_eq!(search(&sorted, &99), None);
/// assert_eq!(search::<i32>(&[], &1), None);
/// ```
pub fn search<T: Ord>(sorted: &[T], key: &T) -> Option<usize> {
    // The window is `low..high`. The midpoint matches the inclusive-bounds `(low + high) / 2`.
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - 1 - low) / 2;
        match sorted[mid].cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
