use crate::GroupedSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    BeforeStart,
    OnElement,
    Exhausted,
}

/// A stateful walk over the distinct combinations of a [`Combinations`]
/// spec, one combination per successful [`advance`].
///
/// The cursor never touches raw element indices. Each slot holds a group
/// position of the underlying [`GroupedSet`], and `occupancy` tracks how
/// many slots sit at each group. A candidate move is accepted only if the
/// landed group is not already saturated and the elements at or after it
/// can still seat every slot from the moved one rightwards; that capacity
/// test is what makes every emitted combination distinct without ever
/// comparing output tuples.
///
/// Invariants while a combination is readable: `slots` is non-decreasing,
/// `occupancy[g] <= multiplicity(g)` for every group, and the occupancies
/// sum to the choose count.
///
/// [`Combinations`]: crate::Combinations
/// [`advance`]: Cursor::advance
#[derive(Clone, Debug)]
pub struct Cursor<'a, T> {
    set: &'a GroupedSet<T>,
    /// Group position of each chosen element. A slot may sit one past the
    /// last group in the middle of a carry; it never does between advances.
    slots: Vec<usize>,
    /// How many slots currently point at each group.
    occupancy: Vec<usize>,
    state: State,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(set: &'a GroupedSet<T>, choose: usize) -> Self {
        debug_assert!(choose <= set.total());
        Cursor {
            set,
            slots: vec![0; choose],
            occupancy: vec![0; set.groups()],
            state: State::BeforeStart,
        }
    }

    /// Move to the next combination. Returns `false` once the space is
    /// exhausted; further calls keep returning `false` until [`reset`].
    ///
    /// [`reset`]: Cursor::reset
    pub fn advance(&mut self) -> bool {
        match self.state {
            State::BeforeStart => {
                self.seed();
                debug_assert!(self.check_invariants());
                self.state = State::OnElement;
                true
            }
            State::OnElement => {
                let ok = !self.slots.is_empty()
                    && self.advance_slot(self.slots.len() - 1, self.set.groups());
                if ok {
                    debug_assert!(self.check_invariants());
                } else {
                    self.state = State::Exhausted;
                }
                ok
            }
            State::Exhausted => false,
        }
    }

    /// Return to the state before the first combination. A full replay
    /// after a reset reproduces the same sequence.
    pub fn reset(&mut self) {
        self.slots.fill(0);
        self.occupancy.fill(0);
        self.state = State::BeforeStart;
    }

    /// Group position of each chosen element, non-decreasing. `None` unless
    /// the cursor is on a combination.
    pub fn positions(&self) -> Option<&[usize]> {
        match self.state {
            State::OnElement => Some(&self.slots),
            _ => None,
        }
    }

    /// Snapshot of the current combination as canonical values, sorted
    /// ascending. `None` before the first [`advance`] and after exhaustion;
    /// callers are expected to gate reads on the result of `advance`.
    ///
    /// [`advance`]: Cursor::advance
    pub fn current(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.positions().map(|slots| slots.iter().map(|&g| self.set.value(g).clone()).collect())
    }

    /// Place every slot as far left as possible: fill each group up to its
    /// multiplicity before starting on the next. This is the smallest
    /// combination in lexicographic order.
    fn seed(&mut self) {
        let mut group = 0;
        let mut used = 0;
        for slot in 0..self.slots.len() {
            debug_assert!(group < self.set.groups());
            self.slots[slot] = group;
            self.occupancy[group] += 1;
            used += 1;
            if used == self.set.multiplicity(group) {
                group += 1;
                used = 0;
            }
        }
    }

    /// Move `slot` to `pos`, keeping `occupancy` in sync. Either side may
    /// transiently be one past the last group during a carry.
    fn place(&mut self, slot: usize, pos: usize) {
        let old = self.slots[slot];
        if old < self.occupancy.len() {
            self.occupancy[old] -= 1;
        }
        self.slots[slot] = pos;
        if pos < self.occupancy.len() {
            self.occupancy[pos] += 1;
        }
    }

    fn is_full(&self, group: usize) -> bool {
        self.occupancy[group] == self.set.multiplicity(group)
    }

    /// True if the groups at or after `slot`'s position hold enough
    /// elements to seat `slot` and every slot to its right.
    fn fits_remaining(&self, slot: usize) -> bool {
        self.set.capacity_at_or_after(self.slots[slot]) >= self.slots.len() - slot
    }

    /// The rightmost-first carry. Try to move `slot` one group to the
    /// right; the landing is accepted when it stays below `do_not_reach`,
    /// no other slot already sits there, and the remaining capacity check
    /// passes. Otherwise carry into the slot to the left (bounded by our
    /// rejected landing) and slide back to the smallest position that is
    /// open next to the new left neighbour. Recursion depth is bounded by
    /// the choose count.
    fn advance_slot(&mut self, slot: usize, do_not_reach: usize) -> bool {
        self.place(slot, self.slots[slot] + 1);
        let landed = self.slots[slot];
        if landed < do_not_reach && self.occupancy[landed] == 1 && self.fits_remaining(slot) {
            return true;
        }
        // Blocked. The leftmost slot has nowhere to carry to, so the whole
        // enumeration is over.
        if slot == 0 {
            return false;
        }
        if !self.advance_slot(slot - 1, landed) {
            return false;
        }
        // We must end up at least one group left of the rejected landing.
        if self.is_full(landed - 1) {
            return false;
        }
        // Slide left until the next group down is full or holds a slot.
        loop {
            let pos = self.slots[slot];
            self.place(slot, pos - 1);
            let pos = self.slots[slot];
            if self.occupancy[pos] != 1 {
                break;
            }
            debug_assert!(pos > 0);
            if self.is_full(pos - 1) {
                break;
            }
        }
        true
    }

    // Holds whenever the cursor is on a combination; slots may sit off the
    // edge in the middle of a carry.
    fn check_invariants(&self) -> bool {
        self.slots.windows(2).all(|w| w[0] <= w[1])
            && (0..self.set.groups()).all(|g| self.occupancy[g] <= self.set.multiplicity(g))
            && self.occupancy.iter().sum::<usize>() == self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::GroupedSet;

    fn collect_all<T: Clone + Ord>(elements: Vec<T>, choose: usize) -> Vec<Vec<T>> {
        let set = GroupedSet::new(elements);
        let spec = set.combinations(choose).unwrap();
        let mut cursor = spec.cursor();
        let mut out = Vec::new();
        while cursor.advance() {
            out.push(cursor.current().unwrap());
        }
        out
    }

    #[test]
    fn distinct_values() {
        let all = collect_all(vec![0, 1, 2, 3], 3);
        assert_eq!(all, [vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]);
    }

    #[test]
    fn one_duplicate() {
        let all = collect_all(vec![0, 1, 1, 2], 3);
        assert_eq!(all, [vec![0, 1, 1], vec![0, 1, 2], vec![1, 1, 2]]);
    }

    #[test]
    fn two_duplicate_pairs() {
        let all = collect_all(vec![0, 1, 1, 2, 2, 3], 3);
        assert_eq!(all.len(), 10);
        assert_eq!(all.first().unwrap(), &[0, 1, 1]);
        assert_eq!(all.last().unwrap(), &[2, 2, 3]);
    }

    #[test]
    fn choose_zero_of_empty() {
        let all = collect_all(Vec::<u32>::new(), 0);
        assert_eq!(all, [Vec::<u32>::new()]);
    }

    #[test]
    fn choose_zero_of_nonempty() {
        let all = collect_all(vec![4, 4, 5], 0);
        assert_eq!(all, [Vec::<i32>::new()]);
    }

    #[test]
    fn choose_all() {
        let all = collect_all(vec![2, 0, 1, 1], 4);
        assert_eq!(all, [vec![0, 1, 1, 2]]);
    }

    #[test]
    fn case_insensitive_groups() {
        let set = GroupedSet::with_comparator(["a", "A", "b", "c"], |x, y| {
            x.to_lowercase().cmp(&y.to_lowercase())
        });
        let spec = set.combinations(2).unwrap();
        let mut cursor = spec.cursor();
        let mut out = Vec::new();
        while cursor.advance() {
            out.push(cursor.current().unwrap());
        }
        // "A" collapses into the "a" group, so {a, a} is a valid selection
        // and every tuple uses the canonical representative.
        assert_eq!(out, [vec!["a", "a"], vec!["a", "b"], vec!["a", "c"], vec!["b", "c"]]);
    }

    #[test]
    fn reads_gated_on_state() {
        let set = GroupedSet::new([1, 2]);
        let spec = set.combinations(1).unwrap();
        let mut cursor = spec.cursor();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.positions(), None);
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Some(vec![1]));
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), None);
        // Exhaustion is absorbing.
        assert!(!cursor.advance());
        assert_eq!(cursor.positions(), None);
    }

    #[test]
    fn snapshots_are_independent() {
        let set = GroupedSet::new([0, 1, 1]);
        let spec = set.combinations(2).unwrap();
        let mut cursor = spec.cursor();
        assert!(cursor.advance());
        let first = cursor.current().unwrap();
        assert!(cursor.advance());
        assert_eq!(first, [0, 1]);
    }

    #[test]
    fn reset_replays_identically() {
        let set = GroupedSet::new([0, 1, 1, 2, 2, 3]);
        let spec = set.combinations(3).unwrap();
        let mut cursor = spec.cursor();
        let mut first_run = Vec::new();
        while cursor.advance() {
            first_run.push(cursor.current().unwrap());
        }
        cursor.reset();
        let mut second_run = Vec::new();
        while cursor.advance() {
            second_run.push(cursor.current().unwrap());
        }
        assert_eq!(first_run, second_run);
    }

    #[test]
    fn reset_midway() {
        let set = GroupedSet::new([0, 1, 2, 3]);
        let spec = set.combinations(2).unwrap();
        let mut cursor = spec.cursor();
        assert!(cursor.advance());
        assert!(cursor.advance());
        cursor.reset();
        assert_eq!(cursor.current(), None);
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Some(vec![0, 1]));
    }

    #[test]
    fn positions_are_group_indices() {
        let set = GroupedSet::new([5, 5, 9]);
        let spec = set.combinations(2).unwrap();
        let mut cursor = spec.cursor();
        assert!(cursor.advance());
        assert_eq!(cursor.positions(), Some(&[0, 0][..]));
        assert!(cursor.advance());
        assert_eq!(cursor.positions(), Some(&[0, 1][..]));
    }
}
