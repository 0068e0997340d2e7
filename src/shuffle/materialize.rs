use std::{collections::HashMap, hash::Hash};

use super::{Assignment, ShuffleError};

/// Collects the items of every group, keeping their input order.
pub fn group_items<T, G>(pairs: &[(T, G)]) -> HashMap<G, Vec<T>>
where
    T: Clone,
    G: Eq + Hash + Clone,
{
    let mut grouped: HashMap<G, Vec<T>> = HashMap::new();
    for (item, group) in pairs {
        grouped.entry(group.clone()).or_default().push(item.clone());
    }
    grouped
}

/// Builds the output sequence by walking the positions of `assignment` in
/// ascending order and popping the last remaining item of the assigned group.
///
/// # Errors
///
/// - [`ShuffleError::UnassignedPosition`] if a position has no group
/// - [`ShuffleError::UnknownGroup`] if a group has no item list at all
/// - [`ShuffleError::GroupExhausted`] if a group runs out of items
/// - [`ShuffleError::LeftoverItems`] if items remain once every position is filled
pub fn materialize<T, G>(
    mut items_by_group: HashMap<G, Vec<T>>,
    assignment: &Assignment<G>,
) -> Result<Vec<T>, ShuffleError>
where
    G: Eq + Hash,
{
    let mut output = Vec::with_capacity(assignment.len());

    for (position, group) in assignment.iter() {
        let group = group.ok_or(ShuffleError::UnassignedPosition { position })?;
        let items = items_by_group
            .get_mut(group)
            .ok_or(ShuffleError::UnknownGroup { position })?;
        let item = items
            .pop()
            .ok_or(ShuffleError::GroupExhausted { position })?;
        output.push(item);
    }

    let count: usize = items_by_group.values().map(Vec::len).sum();
    if count > 0 {
        return Err(ShuffleError::LeftoverItems { count });
    }

    Ok(output)
}

/// Checks that `output` holds exactly the items of `input`, duplicates
/// included.
pub fn validate<T: Eq + Hash>(input: &[T], output: &[T]) -> Result<(), ShuffleError> {
    if input.len() != output.len() {
        return Err(ShuffleError::LengthMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }

    let mut balance: HashMap<&T, isize> = HashMap::new();
    for item in input {
        *balance.entry(item).or_default() += 1;
    }
    for item in output {
        *balance.entry(item).or_default() -= 1;
    }

    if balance.values().any(|&n| n != 0) {
        return Err(ShuffleError::ItemMismatch);
    }

    Ok(())
}
