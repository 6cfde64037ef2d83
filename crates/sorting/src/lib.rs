mod algorithm;
pub mod algorithms;
mod compare;
mod context;
mod error;
mod factory;

use std::fmt;

pub use algorithm::SortAlgorithm;
pub use compare::Comparator;
pub use context::{Items, Memento, SortContext};
pub use error::CloneUnsupported;
pub use factory::{ContextCreator, make_algorithm, make_algorithm_by_name};

/// Closed set of sort algorithm variants. The default engine, used wherever
/// no kind is given, is [`Quick`](SortKind::Quick).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortKind {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

pub const ALL_KINDS: [SortKind; 4] = [
    SortKind::Bubble,
    SortKind::Insertion,
    SortKind::Merge,
    SortKind::Quick,
];

pub fn all_kinds() -> &'static [SortKind] {
    &ALL_KINDS
}

pub fn kind_name(kind: SortKind) -> &'static str {
    match kind {
        SortKind::Bubble => "BubbleSort",
        SortKind::Insertion => "InsertionSort",
        SortKind::Merge => "MergeSort",
        SortKind::Quick => "QuickSort",
    }
}

impl SortKind {
    /// Inverse of [`kind_name`]; display names only.
    pub fn from_name(name: &str) -> Option<SortKind> {
        ALL_KINDS.iter().copied().find(|&kind| kind_name(kind) == name)
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(kind_name(*self))
    }
}
