use std::cmp::Ordering;

/// Binary search over input sorted ascending by natural order.
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    binary_search_by(data, target, T::cmp)
}

/// Binary search over input sorted ascending under `cmp`.
///
/// Half-open `[lo, hi)` bounds with the unbiased midpoint; the window
/// strictly shrinks every iteration, so the loop terminates with either a
/// matching index or proof of absence. If several elements compare equal to
/// `target`, any one of their indices may be returned.
pub fn binary_search_by<T>(
    data: &[T],
    target: &T,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Option<usize> {
    let mut lo = 0;
    let mut hi = data.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&data[mid], target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}
