use crate::PlayerId;

/// Fixed rotation of players `1..=players_count`
///
/// Only the index of the player about to act is stored; the player who
/// acted last is always the one before it in the rotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TurnOrder {
    players_count: u32,
    // 0-based index of the player about to act
    next: u32,
}

impl TurnOrder {
    /// `players_count` must be at least 1, which `EngineConfig::validate` ensures
    pub fn new(players_count: u32) -> Self {
        Self {
            players_count,
            next: 0,
        }
    }

    /// The player about to act
    pub fn current_player_id(&self) -> PlayerId {
        self.next + 1
    }

    /// The player who acted last, or the last player of the rotation before
    /// anyone has moved
    pub fn previous_player_id(&self) -> PlayerId {
        if self.next == 0 {
            self.players_count
        } else {
            self.next
        }
    }

    /// Hands the turn on, returning the player whose turn it was
    pub fn advance(&mut self) -> PlayerId {
        let acting = self.current_player_id();
        self.next = (self.next + 1) % self.players_count;
        acting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_players() {
        let order = TurnOrder::new(2);
        assert_eq!(order.current_player_id(), 1);
        assert_eq!(order.previous_player_id(), 2);
    }

    #[test]
    fn test_two_players_alternate() {
        let mut order = TurnOrder::new(2);
        let acting: Vec<_> = (0..5).map(|_| order.advance()).collect();
        assert_eq!(acting, vec![1, 2, 1, 2, 1]);
        assert_eq!(order.current_player_id(), 2);
        assert_eq!(order.previous_player_id(), 1);
    }

    #[test]
    fn test_three_player_rotation() {
        let mut order = TurnOrder::new(3);
        assert_eq!(order.advance(), 1);
        assert_eq!(order.current_player_id(), 2);
        assert_eq!(order.previous_player_id(), 1);
        assert_eq!(order.advance(), 2);
        assert_eq!(order.advance(), 3);
        assert_eq!(order.current_player_id(), 1);
        assert_eq!(order.previous_player_id(), 3);
    }

    #[test]
    fn test_largest_rotation() {
        let mut order = TurnOrder::new(u32::MAX);
        assert_eq!(order.previous_player_id(), u32::MAX);
        assert_eq!(order.advance(), 1);
        assert_eq!(order.advance(), 2);
        assert_eq!(order.current_player_id(), 3);
        assert_eq!(order.previous_player_id(), 2);
    }

    #[test]
    fn test_single_player() {
        let mut order = TurnOrder::new(1);
        assert_eq!(order.previous_player_id(), 1);
        assert_eq!(order.advance(), 1);
        assert_eq!(order.advance(), 1);
        assert_eq!(order.current_player_id(), 1);
    }
}
