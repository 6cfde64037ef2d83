use std::cmp::Ordering;

use crate::Comparator;

/// Top-down merge sort: split at `(l + r) / 2`, recurse on `[l, m]` and
/// `[m + 1, r]`, merge through temporary copies of both halves. Ties take the
/// left element first, so equal keys keep their input order. O(n log n) for
/// every input.
pub fn sort<T: Ord + Clone>(data: &mut [T], cmp: &Comparator<T>) {
    if data.len() < 2 {
        return;
    }
    merge_sort(data, cmp, 0, data.len() - 1);
}

fn merge_sort<T: Ord + Clone>(data: &mut [T], cmp: &Comparator<T>, l: usize, r: usize) {
    if l < r {
        let m = (l + r) / 2;
        merge_sort(data, cmp, l, m);
        merge_sort(data, cmp, m + 1, r);
        merge(data, cmp, l, m, r);
    }
}

fn merge<T: Ord + Clone>(data: &mut [T], cmp: &Comparator<T>, l: usize, m: usize, r: usize) {
    let left = data[l..=m].to_vec();
    let right = data[m + 1..=r].to_vec();

    let mut i = 0;
    let mut j = 0;
    for k in l..=r {
        let take_left = if i < left.len() && j < right.len() {
            // `<=` keeps the merge stable.
            cmp.compare(&left[i], &right[j]) != Ordering::Greater
        } else {
            i < left.len()
        };

        if take_left {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
    }
}
