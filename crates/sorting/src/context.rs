use std::slice;

use crate::{CloneUnsupported, Comparator, SortAlgorithm};

/// Couples a sequence with a sort algorithm and a comparison strategy.
///
/// The algorithm and comparator can be swapped at runtime; swapping resets
/// nothing, so the caller owns consistency. A context whose algorithm is
/// already complete stays sorted-as-is: [`sort`](Self::sort) is a no-op until
/// the completion flag is cleared or a fresh algorithm is installed.
#[derive(Debug)]
pub struct SortContext<T> {
    items: Vec<T>,
    algorithm: SortAlgorithm,
    compare: Comparator<T>,
}

impl<T> SortContext<T> {
    pub fn new(items: Vec<T>, algorithm: SortAlgorithm, compare: Comparator<T>) -> Self {
        Self {
            items,
            algorithm,
            compare,
        }
    }

    /// Context over `items` with the default engine and natural order.
    pub fn with_items(items: Vec<T>) -> Self {
        Self::new(items, SortAlgorithm::default(), Comparator::Natural)
    }

    /// Fresh context adopting a snapshot's state wholesale.
    pub fn from_snapshot(snapshot: Memento<T>) -> Self {
        let mut context = Self::new(Vec::new(), SortAlgorithm::default(), Comparator::Natural);
        context.restore(snapshot);
        context
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn comparator(&self) -> &Comparator<T> {
        &self.compare
    }

    pub fn set_comparator(&mut self, compare: Comparator<T>) {
        self.compare = compare;
    }

    pub fn algorithm(&self) -> &SortAlgorithm {
        &self.algorithm
    }

    pub fn algorithm_mut(&mut self) -> &mut SortAlgorithm {
        &mut self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = algorithm;
    }

    /// Forward-only, read-only pass over the current items. The view borrows
    /// the context shared, so mutation through it does not compile.
    pub fn iter(&self) -> Items<'_, T> {
        Items {
            inner: self.items.iter(),
        }
    }

    /// Replaces items, algorithm, and comparator from the snapshot. The
    /// snapshot's algorithm instance is adopted as-is (moved, not re-cloned)
    /// and its completion flag is forced to the value recorded at snapshot
    /// time.
    pub fn restore(&mut self, snapshot: Memento<T>) {
        let Memento {
            items,
            mut algorithm,
            compare,
            completed,
        } = snapshot;
        algorithm.set_complete(completed);
        self.items = items;
        self.algorithm = algorithm;
        self.compare = compare;
    }
}

impl<T: Ord + Clone> SortContext<T> {
    /// Runs the held algorithm over the held items, unless a previous run
    /// already completed.
    pub fn sort(&mut self) {
        if !self.algorithm.is_complete() {
            self.algorithm.sort(&mut self.items, &self.compare);
        }
    }

    /// Point-in-time snapshot: items deep-copied, algorithm deep-cloned with
    /// its completion flag recorded, comparator shared by reference.
    pub fn snapshot(&self) -> Result<Memento<T>, CloneUnsupported> {
        Ok(Memento {
            items: self.items.clone(),
            algorithm: self.algorithm.try_clone()?,
            compare: self.compare.clone(),
            completed: self.algorithm.is_complete(),
        })
    }

    /// Independent copy of the whole context. A failed algorithm clone
    /// propagates to the caller.
    pub fn deep_clone(&self) -> Result<Self, CloneUnsupported> {
        Ok(Self {
            items: self.items.clone(),
            algorithm: self.algorithm.try_clone()?,
            compare: self.compare.clone(),
        })
    }
}

/// Immutable snapshot of a context's state, produced by
/// [`SortContext::snapshot`] and consumed by [`SortContext::restore`].
#[derive(Debug)]
pub struct Memento<T> {
    items: Vec<T>,
    algorithm: SortAlgorithm,
    compare: Comparator<T>,
    completed: bool,
}

impl<T> Memento<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}

/// Borrowed single-pass view over a context's items.
#[derive(Debug)]
pub struct Items<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Items<'_, T> {}
