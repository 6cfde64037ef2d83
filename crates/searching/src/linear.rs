use std::cmp::Ordering;

/// O(n) scan; index of the first element equal to `target` under natural
/// order.
pub fn linear_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    linear_search_by(data, target, T::cmp)
}

/// O(n) scan under a caller-supplied total order.
pub fn linear_search_by<T>(
    data: &[T],
    target: &T,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Option<usize> {
    data.iter()
        .position(|item| cmp(item, target) == Ordering::Equal)
}
