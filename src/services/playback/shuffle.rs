use rand::Rng;
use rand::seq::SliceRandom;

/// A pre-shuffled permutation of catalog indices.
///
/// Shuffled advancement walks this permutation cyclically instead of the
/// catalog order, so repeated `Next` still visits every track exactly once
/// per cycle and `Previous` retraces the same path.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ShuffleOrder {
    order: Vec<usize>,
}

impl ShuffleOrder {
    /// Build a shuffled permutation of `0..len`.
    pub(crate) fn generate<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);
        Self { order }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Index after `current` in shuffle order, wrapping at the end.
    ///
    /// An absent or stale `current` (not in the permutation, e.g. after a
    /// catalog change raced a toggle) restarts at the permutation head.
    pub(crate) fn next_after(&self, current: Option<usize>) -> Option<usize> {
        self.step(current, 1)
    }

    /// Index before `current` in shuffle order, wrapping at the start.
    pub(crate) fn previous_before(&self, current: Option<usize>) -> Option<usize> {
        self.step(current, self.order.len().saturating_sub(1))
    }

    fn step(&self, current: Option<usize>, offset: usize) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }

        let Some(position) = current.and_then(|index| {
            self.order
                .iter()
                .position(|candidate| *candidate == index)
        }) else {
            return self.order.first().copied();
        };

        let len = self.order.len();
        Some(self.order[(position + offset) % len])
    }
}
