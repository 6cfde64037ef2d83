use thiserror::Error;

/// Deep-cloning a context or taking a snapshot could not produce an
/// independent copy of the underlying algorithm.
///
/// Every built-in [`SortKind`](crate::SortKind) clones successfully; callers
/// still see `Result` on the cloning operations so a failure is propagated,
/// never swallowed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("sort algorithm `{algorithm}` does not support cloning")]
pub struct CloneUnsupported {
    pub algorithm: &'static str,
}
