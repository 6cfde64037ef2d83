use rand::Rng;
use rand::seq::SliceRandom;

const DEFAULT_MAKER_LEN: usize = 20;
const RANDOM_MIN: i64 = 1;
const RANDOM_MAX: i64 = 1000;

/// Chainable builder for integer lists, used to feed sort and search inputs.
///
/// The maker methods (`random`, `sorted`) only fill an empty backing list, so
/// explicitly pushed items win over generated ones. Each `_with` variant
/// takes a caller-seeded RNG for deterministic output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntListBuilder {
    items: Vec<i64>,
    maker_len: usize,
}

impl Default for IntListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntListBuilder {
    pub fn new() -> Self {
        Self::with_len(DEFAULT_MAKER_LEN)
    }

    /// Builder whose maker methods generate `maker_len` items.
    pub fn with_len(maker_len: usize) -> Self {
        Self {
            items: Vec::new(),
            maker_len,
        }
    }

    /// Fills an empty list with uniform values in `1..=1000`.
    pub fn random(self) -> Self {
        let mut rng = rand::rng();
        self.random_with(&mut rng)
    }

    pub fn random_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        if self.items.is_empty() {
            self.items = (0..self.maker_len)
                .map(|_| rng.random_range(RANDOM_MIN..=RANDOM_MAX))
                .collect();
        }
        self
    }

    /// Fills an empty list with `1..=maker_len` in ascending order.
    pub fn sorted(mut self) -> Self {
        if self.items.is_empty() {
            self.items = (1..=self.maker_len as i64).collect();
        }
        self
    }

    pub fn push(mut self, item: i64) -> Self {
        self.items.push(item);
        self
    }

    pub fn extend(mut self, items: impl IntoIterator<Item = i64>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn shuffle(self) -> Self {
        let mut rng = rand::rng();
        self.shuffle_with(&mut rng)
    }

    pub fn shuffle_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.items.shuffle(rng);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> Vec<i64> {
        self.items
    }
}
