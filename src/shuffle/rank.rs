use std::{collections::HashMap, fmt, hash::Hash, str::FromStr};

/// How the position range is split into bins for each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinStrategy {
    /// Split the entire position range for every group. Widest spacing, but a
    /// late group can end up with fewer positions than items.
    #[default]
    FullRange,
    /// Split only the positions that are still unassigned. Every group always
    /// receives exactly as many positions as it has items.
    Unassigned,
}

impl BinStrategy {
    /// Every strategy, in the order they are tried by default.
    pub const ALL: [BinStrategy; 2] = [BinStrategy::FullRange, BinStrategy::Unassigned];
}

impl fmt::Display for BinStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinStrategy::FullRange => write!(f, "full-range"),
            BinStrategy::Unassigned => write!(f, "unassigned"),
        }
    }
}

impl FromStr for BinStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "full-range" | "full" => Ok(BinStrategy::FullRange),
            "unassigned" | "remaining" => Ok(BinStrategy::Unassigned),
            other => Err(format!(
                "invalid value '{other}' (expected one of: {})",
                BinStrategy::ALL.map(|s| s.to_string()).join(", ")
            )),
        }
    }
}

/// Position to group mapping produced by [`assign`].
///
/// Positions are 1-based. A slot is `None` only when
/// [`BinStrategy::FullRange`] starved a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<G> {
    slots: Vec<Option<G>>,
}

impl<G> Assignment<G> {
    /// Number of positions, equal to the number of input items.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` for the assignment of an empty input.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Group at the 1-based `position`, if assigned.
    pub fn get(&self, position: usize) -> Option<&G> {
        position
            .checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .and_then(Option::as_ref)
    }

    /// Iterates `(position, group)` in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&G>)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (index + 1, slot.as_ref()))
    }

    /// `true` when every position has a group.
    ///
    /// Always holds for [`BinStrategy::Unassigned`]. An incomplete assignment
    /// cannot be materialized.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// 1-based positions left without a group, ascending.
    pub fn unassigned(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, group)| group.is_none())
            .map(|(position, _)| position)
            .collect()
    }

    /// 1-based positions assigned to `group`, ascending.
    ///
    /// # Example
    ///
    /// ```
    /// let assignment = assign(&['X', 'X', 'Y', 'Y'], BinStrategy::FullRange);
    /// assert_eq!(assignment.positions_of(&'X'), vec![1, 3]);
    /// ```
    pub fn positions_of(&self, group: &G) -> Vec<usize>
    where
        G: PartialEq,
    {
        self.iter()
            .filter(|(_, g)| *g == Some(group))
            .map(|(position, _)| position)
            .collect()
    }
}

/// Counts every distinct group and orders them by descending count.
///
/// Groups with the same count keep the order in which they first appear in
/// `groups`.
pub fn multiplicities<G: Eq + Hash + Clone>(groups: &[G]) -> Vec<(G, usize)> {
    let mut index: HashMap<&G, usize> = HashMap::new();
    let mut counts: Vec<(G, usize)> = Vec::new();

    for group in groups {
        match index.get(group) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(group, counts.len());
                counts.push((group.clone(), 1));
            }
        }
    }

    // sort_by is stable, first-seen order survives for ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Splits `seq` into `count` contiguous bins whose lengths differ by at most
/// one. The leading bins take the remainder, so `[1, 2, 3, 4, 5]` split in two
/// gives `[1, 2, 3]` and `[4, 5]`. When `count` exceeds the length the
/// trailing bins are empty.
pub fn split_even<T>(seq: &[T], count: usize) -> Vec<&[T]> {
    if count == 0 {
        return Vec::new();
    }

    let base = seq.len() / count;
    let extra = seq.len() % count;

    let mut bins = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let len = base + usize::from(i < extra);
        bins.push(&seq[start..start + len]);
        start += len;
    }

    bins
}

/// Assigns a group to every output position so repeated groups are spread
/// apart.
///
/// Groups are visited from the most to the least frequent. For a group with
/// multiplicity `m` the position list is split into `m` bins and the group
/// takes the first free position of each bin. The scan direction flips after
/// every group.
///
/// # Arguments
///
/// * `groups` - Group key of every input item, in input order
/// * `strategy` - Which positions are split into bins for each group
///
/// # Returns
///
/// The [`Assignment`] of all `groups.len()` positions. With
/// [`BinStrategy::FullRange`] it may be incomplete; check
/// [`Assignment::is_complete`] or let materialization report the gap.
pub fn assign<G: Eq + Hash + Clone>(groups: &[G], strategy: BinStrategy) -> Assignment<G> {
    let positions: Vec<usize> = (1..=groups.len()).collect();
    let mut slots: Vec<Option<G>> = vec![None; groups.len()];
    let mut reverse = false;

    for (group, multiplicity) in multiplicities(groups) {
        let mut pool: Vec<usize> = match strategy {
            BinStrategy::FullRange => positions.clone(),
            BinStrategy::Unassigned => positions
                .iter()
                .copied()
                .filter(|&position| slots[position - 1].is_none())
                .collect(),
        };
        if reverse {
            pool.reverse();
        }

        for bin in split_even(&pool, multiplicity) {
            if let Some(&position) = bin.iter().find(|&&p| slots[p - 1].is_none()) {
                slots[position - 1] = Some(group.clone());
            }
        }

        reverse = !reverse;
    }

    Assignment { slots }
}
