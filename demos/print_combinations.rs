//! Prints a few enumerations to show the API.

use combinations::GroupedSet;

fn main() {
    // Plain choose-3 over distinct integers.
    let set = GroupedSet::new([1, 2, 3, 4, 5]);
    println!("choose 3 of [1, 2, 3, 4, 5]:");
    for combination in &set.combinations(3).unwrap() {
        println!("  {combination:?}");
    }

    // A caller-supplied order: case-insensitive, so "alpha" and "ALPHA"
    // collapse into one group of multiplicity 2.
    let words = GroupedSet::with_comparator(["alpha", "ALPHA", "beta", "gamma"], |a, b| {
        a.to_lowercase().cmp(&b.to_lowercase())
    });
    println!("choose 2, case-insensitive:");
    for combination in &words.combinations(2).unwrap() {
        println!("  {combination:?}");
    }

    // One grouped set shared by every choose count.
    let set = GroupedSet::new([1, 2, 3, 4, 5]);
    for choose in 0..=set.total() {
        let count = set.combinations(choose).unwrap().iter().count();
        println!("choose {choose}: {count} combinations");
    }
}
