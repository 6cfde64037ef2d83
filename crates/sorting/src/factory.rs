use crate::{Comparator, SortAlgorithm, SortContext, SortKind};

/// Fresh algorithm instance for a kind tag.
pub fn make_algorithm(kind: SortKind) -> SortAlgorithm {
    SortAlgorithm::new(kind)
}

/// Display-name lookup. Names that match no kind fall back to the default
/// engine (quick sort) rather than failing.
pub fn make_algorithm_by_name(name: &str) -> SortAlgorithm {
    match SortKind::from_name(name) {
        Some(kind) => SortAlgorithm::new(kind),
        None => SortAlgorithm::default(),
    }
}

type AlgorithmStep = Box<dyn Fn(SortKind) -> SortAlgorithm>;
type ComparatorStep<T> = Box<dyn Fn() -> Comparator<T>>;
type AssembleStep<T> = Box<dyn Fn(Vec<T>, SortAlgorithm, Comparator<T>) -> SortContext<T>>;

/// Builds contexts from a kind tag and raw items through three independently
/// swappable creation steps: algorithm-for-kind, default comparator, and
/// final assembly. Override any step to change how contexts are put together
/// without touching the others.
pub struct ContextCreator<T> {
    algorithm_step: AlgorithmStep,
    comparator_step: ComparatorStep<T>,
    assemble_step: AssembleStep<T>,
}

impl<T: 'static> ContextCreator<T> {
    pub fn new() -> Self {
        Self {
            algorithm_step: Box::new(make_algorithm),
            comparator_step: Box::new(|| Comparator::Natural),
            assemble_step: Box::new(SortContext::new),
        }
    }

    pub fn with_algorithm_step(mut self, step: impl Fn(SortKind) -> SortAlgorithm + 'static) -> Self {
        self.algorithm_step = Box::new(step);
        self
    }

    pub fn with_comparator_step(mut self, step: impl Fn() -> Comparator<T> + 'static) -> Self {
        self.comparator_step = Box::new(step);
        self
    }

    pub fn with_assemble_step(
        mut self,
        step: impl Fn(Vec<T>, SortAlgorithm, Comparator<T>) -> SortContext<T> + 'static,
    ) -> Self {
        self.assemble_step = Box::new(step);
        self
    }

    pub fn make_context(&self, kind: SortKind, items: Vec<T>) -> SortContext<T> {
        (self.assemble_step)(items, (self.algorithm_step)(kind), (self.comparator_step)())
    }
}

impl<T: 'static> Default for ContextCreator<T> {
    fn default() -> Self {
        Self::new()
    }
}
