//! Effect batching for the host runtime.

/// An ordered bundle of effects handed to the runtime in one go.
///
/// Batching preserves order and never deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<E> {
    effects: Vec<E>,
}

impl<E> Batch<E> {
    pub fn none() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    pub fn single(effect: E) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    /// Merges several batches into one, keeping the order of each.
    pub fn batch<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Batch<E>>,
    {
        Self {
            effects: batches.into_iter().flat_map(|b| b.effects).collect(),
        }
    }

    pub fn map<F2, F>(self, f: F) -> Batch<F2>
    where
        F: FnMut(E) -> F2,
    {
        Batch {
            effects: self.effects.into_iter().map(f).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Unbatches into the effects in dispatch order.
    pub fn into_effects(self) -> Vec<E> {
        self.effects
    }
}

impl<E> Default for Batch<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E> FromIterator<E> for Batch<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for Batch<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}
