use std::cmp::Ordering;

use crate::Comparator;

/// Classic shift-insert: walk left from each key past every strictly greater
/// element, then rotate the key into the hole. Stable; O(n) on sorted input.
pub fn sort<T: Ord>(data: &mut [T], cmp: &Comparator<T>) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && cmp.compare(&data[j - 1], &data[i]) == Ordering::Greater {
            j -= 1;
        }
        data[j..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::sort;
    use crate::Comparator;

    #[test]
    fn sorts_in_place() {
        let mut data = vec![9, 1, 4, 2, 8, 2];
        sort(&mut data, &Comparator::Natural);
        assert_eq!(data, [1, 2, 2, 4, 8, 9]);
    }

    #[test]
    fn reverse_sorted_worst_case() {
        let mut data: Vec<i32> = (0..64).rev().collect();
        sort(&mut data, &Comparator::Natural);
        let expected: Vec<i32> = (0..64).collect();
        assert_eq!(data, expected);
    }
}
