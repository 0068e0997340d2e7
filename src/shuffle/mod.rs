//! # Maximum-distance grouped shuffle
//!
//! Re-orders a sequence of items tagged with a group key (tracks tagged with
//! their album) so that items sharing a group end up as far apart as
//! possible, while keeping the exact multiset of items.
//!
//! The shuffle runs in two pure steps:
//!
//! 1. [`rank::assign`] looks only at the group keys and decides which group
//!    occupies each output position (1-based), walking the groups from the
//!    most to the least frequent and spreading each group over evenly sized
//!    bins of the position range. Successive groups scan the bins in
//!    alternating direction.
//! 2. [`materialize::materialize`] takes the concrete items per group and
//!    fills every position by popping the last remaining item of the assigned
//!    group, after which [`materialize::validate`] checks that the output is a
//!    permutation of the input.
//!
//! ```text
//! [(item, group), ...] --groups--> rank::assign --> Assignment
//!          |                                           |
//!          +--------group_items--> materialize <-------+
//!                                       |
//!                                   validate --> Vec<item>
//! ```
//!
//! [`distance_shuffle`] wires both steps together and is what the CLI uses.
//!
//! ## Bin strategies
//!
//! [`BinStrategy::FullRange`] splits the whole position range for every
//! group. It gives the widest spacing but can starve a late group when all
//! positions of some of its bins are already taken; the resulting
//! [`Assignment`] is then incomplete and materialization fails with
//! [`ShuffleError::UnassignedPosition`]. [`BinStrategy::Unassigned`] only
//! splits positions that are still free, which always yields a complete
//! assignment.

mod error;
pub mod materialize;
pub mod rank;

use std::hash::Hash;

pub use error::ShuffleError;
pub use materialize::{group_items, materialize, validate};
pub use rank::{Assignment, BinStrategy, assign, multiplicities, split_even};

/// Shuffles `(item, group)` pairs so that items of the same group are spread
/// over the whole output.
///
/// Returns the re-ordered items, or a [`ShuffleError`] when the assignment
/// could not place every item or the result is not a permutation of the
/// input. An empty input yields an empty output.
///
/// The result only depends on the input order and the strategy, so repeated
/// calls with the same arguments return the same sequence.
pub fn distance_shuffle<T, G>(
    pairs: &[(T, G)],
    strategy: BinStrategy,
) -> Result<Vec<T>, ShuffleError>
where
    T: Eq + Hash + Clone,
    G: Eq + Hash + Clone,
{
    let groups: Vec<G> = pairs.iter().map(|(_, group)| group.clone()).collect();
    let items: Vec<T> = pairs.iter().map(|(item, _)| item.clone()).collect();

    let assignment = rank::assign(&groups, strategy);
    let shuffled = materialize::materialize(group_items(pairs), &assignment)?;
    materialize::validate(&items, &shuffled)?;

    Ok(shuffled)
}
