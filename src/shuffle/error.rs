use thiserror::Error;

/// Integrity faults raised while turning an assignment into a track order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShuffleError {
    #[error("position {position} was not assigned to any group")]
    UnassignedPosition { position: usize },

    #[error("position {position} is assigned to a group without any items")]
    UnknownGroup { position: usize },

    #[error("position {position} is assigned to a group whose items are already used up")]
    GroupExhausted { position: usize },

    #[error("{count} item(s) were not placed in the shuffled sequence")]
    LeftoverItems { count: usize },

    #[error("shuffled sequence has {actual} items, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("shuffled sequence does not contain the same items as the input")]
    ItemMismatch,
}
