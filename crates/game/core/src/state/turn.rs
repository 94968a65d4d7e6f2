use super::Team;

/// Turn counter and the side currently in control.
///
/// Only the engine's turn-advance operation mutates this state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Starts at 1 and grows by exactly one per turn change.
    pub turn_number: u32,
    pub active_team: Team,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            turn_number: 1,
            active_team: Team::Controlled,
        }
    }

    pub fn is_controlled_turn(&self) -> bool {
        self.active_team == Team::Controlled
    }

    pub(crate) fn advance(&mut self) {
        self.turn_number += 1;
        self.active_team = self.active_team.opponent();
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
