use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Comparison strategy: either the element type's natural `Ord` order or a
/// caller-supplied total order.
///
/// Custom orders are held behind an `Arc`, so cloning a comparator shares the
/// same function rather than copying it.
pub enum Comparator<T> {
    Natural,
    Custom(Arc<dyn Fn(&T, &T) -> Ordering>),
}

impl<T> Comparator<T> {
    pub fn custom(f: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn is_natural(&self) -> bool {
        matches!(self, Self::Natural)
    }
}

impl<T: Ord> Comparator<T> {
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Self::Natural => a.cmp(b),
            Self::Custom(f) => f(a, b),
        }
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural => Self::Natural,
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
        }
    }
}

impl<T> Default for Comparator<T> {
    fn default() -> Self {
        Self::Natural
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => f.write_str("Natural"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
