use crate::{CloneUnsupported, Comparator, SortKind, algorithms};

/// A sort algorithm variant plus its completion flag.
///
/// The flag becomes true after every [`sort`](Self::sort) call, including for
/// empty and one-element input: completion records that a sort attempt ran,
/// not that anything moved.
///
/// Equality is structural over `(kind, completed)`, so two fresh algorithms
/// of the same kind compare equal.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct SortAlgorithm {
    kind: SortKind,
    completed: bool,
}

impl SortAlgorithm {
    pub fn new(kind: SortKind) -> Self {
        Self {
            kind,
            completed: false,
        }
    }

    pub fn kind(&self) -> SortKind {
        self.kind
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn set_complete(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Sorts `data` in place into non-descending order under `cmp`, then
    /// marks the algorithm complete unconditionally.
    pub fn sort<T: Ord + Clone>(&mut self, data: &mut [T], cmp: &Comparator<T>) {
        match self.kind {
            SortKind::Bubble => algorithms::bubble_sort::sort(data, cmp),
            SortKind::Insertion => algorithms::insertion_sort::sort(data, cmp),
            SortKind::Merge => algorithms::merge_sort::sort(data, cmp),
            SortKind::Quick => algorithms::quick_sort::sort(data, cmp),
        }
        self.completed = true;
    }

    /// Independent copy with its own completion flag. Built-in kinds always
    /// succeed; the `Result` keeps clone failure a propagated error rather
    /// than a swallowed one.
    pub fn try_clone(&self) -> Result<Self, CloneUnsupported> {
        Ok(Self {
            kind: self.kind,
            completed: self.completed,
        })
    }
}

impl Default for SortAlgorithm {
    /// The default engine is quick sort.
    fn default() -> Self {
        Self::new(SortKind::Quick)
    }
}

#[cfg(test)]
mod tests {
    use super::SortAlgorithm;
    use crate::{Comparator, SortKind};

    #[test]
    fn completion_is_unconditional() {
        for input in [vec![], vec![1], vec![2, 1]] {
            let mut algo = SortAlgorithm::new(SortKind::Bubble);
            assert!(!algo.is_complete());
            let mut data = input.clone();
            algo.sort(&mut data, &Comparator::Natural);
            assert!(algo.is_complete(), "input={input:?}");
        }
    }

    #[test]
    fn structural_equality_over_kind_and_flag() {
        // Equality considers observable state only, so two fresh instances
        // of the same kind compare equal.
        let a = SortAlgorithm::new(SortKind::Merge);
        let b = SortAlgorithm::new(SortKind::Merge);
        assert_eq!(a, b);

        let mut c = SortAlgorithm::new(SortKind::Merge);
        c.set_complete(true);
        assert_ne!(a, c);
        assert_ne!(a, SortAlgorithm::new(SortKind::Quick));
    }

    #[test]
    fn try_clone_is_independent() {
        let mut original = SortAlgorithm::new(SortKind::Insertion);
        let clone = original.try_clone().unwrap();
        assert_eq!(original, clone);

        original.set_complete(true);
        assert!(!clone.is_complete());
    }

    #[test]
    fn default_is_quick() {
        assert_eq!(SortAlgorithm::default().kind(), SortKind::Quick);
    }
}
