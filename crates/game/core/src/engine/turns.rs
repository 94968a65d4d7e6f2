use crate::event::BattleEvent;

use super::BattleEngine;

impl BattleEngine<'_> {
    /// Passes control to the other side.
    ///
    /// The turn counter grows by one and `TurnChanged` fires; then every unit
    /// of the side now acting gets its budget refilled.
    pub fn advance_turn(&mut self) {
        self.state.turn.advance();
        let turn = self.state.turn;
        self.emit(BattleEvent::TurnChanged {
            turn_number: turn.turn_number,
            active_team: turn.active_team,
        });

        let maximum = self.state.config.units.max_action_points;
        let mut refilled = Vec::new();
        for unit in self.state.units.iter_mut() {
            if unit.team() == turn.active_team {
                unit.refill_points(maximum);
                refilled.push(unit.id());
            }
        }
        for unit in refilled {
            self.emit(BattleEvent::ActionPointsChanged {
                unit,
                points: maximum,
            });
        }
    }
}
