//! Lazy enumeration of the distinct combinations of a multiset.
//!
//! Given a finite collection of values, possibly with repeats, this crate
//! walks every distinct way of choosing `r` of them, in ascending
//! lexicographic order, one combination at a time. Selections that differ
//! only in which physical duplicate they picked count once. The full result
//! set is never materialized, and no emitted tuples are ever compared
//! against each other; duplicates are skipped by reasoning about group
//! capacities instead.
//!
//! The pieces are
//! - [`GroupedSet`], the input canonicalized into ascending groups of equal
//!   values with precomputed suffix capacities,
//! - [`Combinations`], the immutable "choose `r` from this set" descriptor,
//! - [`Cursor`], the per-traversal state advanced one combination at a
//!   time, wrapped by the [`Iter`] iterator,
//! - [`generate`], random multisets for benchmarks and tests.
//!
//! Example usage:
//! ```
//! use combinations::GroupedSet;
//!
//! let set = GroupedSet::new(["pear", "apple", "apple"]);
//! let pairs: Vec<Vec<&str>> = set.combinations(2).unwrap().iter().collect();
//! assert_eq!(pairs, [
//!     vec!["apple", "apple"],
//!     vec!["apple", "pear"],
//! ]);
//! ```
//!
//! `GroupedSet` and `Combinations` are immutable and freely shared, also
//! across threads; each `Cursor` owns its own state, so concurrent
//! traversals of one spec never interfere.
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod combinations;
mod cursor;
pub mod generate;
mod grouped;

pub use crate::{
    combinations::{ChooseError, Combinations, Iter},
    cursor::Cursor,
    grouped::GroupedSet,
};
