use std::cmp::Ordering;

use crate::Comparator;

/// Repeated adjacent-pair passes, swapping on `Greater`. The outer loop exits
/// early the first time an inner pass makes no swap, so already-sorted input
/// costs one O(n) pass. Stable.
pub fn sort<T: Ord>(data: &mut [T], cmp: &Comparator<T>) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if cmp.compare(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
