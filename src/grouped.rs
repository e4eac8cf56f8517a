use std::cmp::Ordering;

use crate::{ChooseError, Combinations};

/// A multiset canonicalized into ascending groups of equal values.
///
/// Every group stores one canonical value and how many equal elements the
/// input contained. The set also precomputes, for each group position, how
/// many elements sit at or after that position; the advance algorithm uses
/// these capacities to decide whether a partial selection can still be
/// completed.
///
/// A `GroupedSet` is immutable once built and can back any number of
/// [`Combinations`] and cursors at the same time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedSet<T> {
    /// Canonical value of each group, strictly ascending.
    values: Vec<T>,
    /// Multiplicity of each group, always at least 1.
    counts: Vec<usize>,
    /// `at_or_after[g]` = sum of `counts[g..]`. Non-increasing, and
    /// `at_or_after[0]` equals the total element count.
    at_or_after: Vec<usize>,
    total: usize,
}

impl<T: Ord> GroupedSet<T> {
    /// Groups `elements` under the natural order of `T`.
    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::with_comparator(elements, |a, b| a.cmp(b))
    }
}

impl<T> GroupedSet<T> {
    /// Groups `elements` under an explicit total order. Two elements belong
    /// to the same group iff `compare` reports them equal; the group keeps
    /// the first-seen element of each equal run as its canonical value.
    pub fn with_comparator<I, F>(elements: I, mut compare: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted: Vec<T> = elements.into_iter().collect();
        // Stable, so the first occurrence of each equal run survives as the
        // representative.
        sorted.sort_by(&mut compare);

        let mut values: Vec<T> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for v in sorted {
            match values.last() {
                Some(last) if compare(last, &v) == Ordering::Equal => {
                    *counts.last_mut().unwrap() += 1;
                }
                _ => {
                    values.push(v);
                    counts.push(1);
                }
            }
        }

        // One pass from the highest group down.
        let mut at_or_after = vec![0; counts.len()];
        let mut total = 0;
        for g in (0..counts.len()).rev() {
            total += counts[g];
            at_or_after[g] = total;
        }

        GroupedSet { values, counts, at_or_after, total }
    }

    /// Total number of elements, counting duplicates.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct groups.
    pub fn groups(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Canonical value of group `group`.
    pub fn value(&self, group: usize) -> &T {
        &self.values[group]
    }

    /// How many equal elements group `group` holds.
    pub fn multiplicity(&self, group: usize) -> usize {
        self.counts[group]
    }

    /// How many elements sit in groups `group..`.
    pub fn capacity_at_or_after(&self, group: usize) -> usize {
        self.at_or_after[group]
    }

    /// Iterate over `(canonical value, multiplicity)` pairs in ascending
    /// order.
    pub fn iter_groups(&self) -> impl Iterator<Item = (&T, usize)> {
        self.values.iter().zip(self.counts.iter().copied())
    }

    /// Shorthand for [`Combinations::new`] over this set.
    pub fn combinations(&self, choose: usize) -> Result<Combinations<'_, T>, ChooseError> {
        Combinations::new(self, choose)
    }
}
