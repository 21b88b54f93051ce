use crate::{PlayerId, EMPTY};

/// One cell of the board
///
/// The streak fields hold the length of the same-owner run ending at this
/// slot in each direction. They are only meaningful while the slot is
/// occupied.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Slot {
    pub owner: PlayerId,
    pub streak_horizontal: usize,
    pub streak_vertical: usize,
    pub streak_diagonal: usize,
}

impl Slot {
    pub fn empty() -> Self {
        Self::owned_by(EMPTY)
    }

    pub fn owned_by(owner: PlayerId) -> Self {
        Self {
            owner,
            streak_horizontal: 0,
            streak_vertical: 0,
            streak_diagonal: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owner == EMPTY
    }

    /// Whether both slots hold a token of the same player
    pub fn same_owner(&self, other: &Slot) -> bool {
        !self.is_empty() && self.owner == other.owner
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::empty()
    }
}
