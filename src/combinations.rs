use std::fmt;

use crate::{Cursor, GroupedSet};

/// Returned when a spec asks to choose more elements than the set holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChooseError {
    pub choose: usize,
    pub total: usize,
}

impl fmt::Display for ChooseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot choose {} elements out of {}", self.choose, self.total)
    }
}

impl std::error::Error for ChooseError {}

/// "Choose `choose` elements from this [`GroupedSet`]", as a reusable
/// immutable descriptor.
///
/// Each traversal request ([`cursor`], [`iter`] or `(&spec).into_iter()`)
/// allocates a fresh [`Cursor`], so independent traversals over one spec
/// never interfere.
///
/// ```
/// use combinations::GroupedSet;
///
/// let set = GroupedSet::new([0, 1, 1, 2]);
/// let spec = set.combinations(3).unwrap();
/// let all: Vec<Vec<i32>> = spec.iter().collect();
/// assert_eq!(all, [vec![0, 1, 1], vec![0, 1, 2], vec![1, 1, 2]]);
/// ```
///
/// [`cursor`]: Combinations::cursor
/// [`iter`]: Combinations::iter
#[derive(Clone, Copy, Debug)]
pub struct Combinations<'a, T> {
    set: &'a GroupedSet<T>,
    choose: usize,
}

impl<'a, T> Combinations<'a, T> {
    /// Fails with [`ChooseError`] if `choose` exceeds the total element
    /// count of `set` (duplicates included).
    pub fn new(set: &'a GroupedSet<T>, choose: usize) -> Result<Self, ChooseError> {
        if choose > set.total() {
            Err(ChooseError { choose, total: set.total() })
        } else {
            Ok(Combinations { set, choose })
        }
    }

    pub fn choose(&self) -> usize {
        self.choose
    }

    pub fn elements(&self) -> &'a GroupedSet<T> {
        self.set
    }

    /// Start an independent traversal. The cursor begins before the first
    /// combination; call [`Cursor::advance`] to reach it.
    pub fn cursor(&self) -> Cursor<'a, T> {
        Cursor::new(self.set, self.choose)
    }

    /// Iterator over all combinations, smallest first. Each call starts
    /// from a freshly initialized cursor.
    pub fn iter(&self) -> Iter<'a, T>
    where
        T: Clone,
    {
        Iter { cursor: self.cursor() }
    }
}

impl<'a, T: Clone> IntoIterator for &Combinations<'a, T> {
    type Item = Vec<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the combinations of one spec, in ascending
/// lexicographic order. Wraps a private [`Cursor`].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.current()
        } else {
            None
        }
    }
}
