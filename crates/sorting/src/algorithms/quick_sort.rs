use std::cmp::Ordering;

use crate::Comparator;

/// Quick sort with the Lomuto partition scheme: the last element is the
/// pivot, strictly smaller elements are swapped left of a running boundary,
/// then the pivot lands at the boundary and both sides recurse. Not stable,
/// and deliberately quadratic on sorted or reverse-sorted input — the naive
/// last-element pivot is part of the contract, not an oversight to fix.
pub fn sort<T: Ord>(data: &mut [T], cmp: &Comparator<T>) {
    if data.len() > 1 {
        quick_sort(data, cmp, 0, data.len() - 1);
    }
}

fn quick_sort<T: Ord>(data: &mut [T], cmp: &Comparator<T>, low: usize, high: usize) {
    if low < high {
        let p = partition(data, cmp, low, high);
        if p > low {
            quick_sort(data, cmp, low, p - 1);
        }
        quick_sort(data, cmp, p + 1, high);
    }
}

fn partition<T: Ord>(data: &mut [T], cmp: &Comparator<T>, low: usize, high: usize) -> usize {
    let mut i = low;
    for j in low..high {
        if cmp.compare(&data[j], &data[high]) == Ordering::Less {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, high);
    i
}
