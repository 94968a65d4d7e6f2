use crate::action::{ActionError, ActionKind, TacticalAction};
use crate::event::BattleEvent;
use crate::grid::GridCoordinate;
use crate::state::UnitId;

use super::{BattleEngine, Controller, InFlightAction};

impl BattleEngine<'_> {
    /// Validates and starts an action for `unit`.
    ///
    /// Checks run in order: nothing in flight, unit alive, unit's side is
    /// acting, unit carries the action, target is legal, budget covers the
    /// cost. On success the budget is charged and the action installed in one
    /// step; on failure nothing changes.
    pub fn request_action(
        &mut self,
        unit: UnitId,
        kind: ActionKind,
        target: GridCoordinate,
        controller: Controller,
    ) -> Result<(), ActionError> {
        if self.state.in_flight.is_some() {
            return Err(ActionError::Busy);
        }

        let state = &*self.state;
        let actor = state.unit(unit).ok_or(ActionError::UnitNotFound(unit))?;
        let active = state.turn.active_team;
        if actor.team() != active {
            return Err(ActionError::NotUnitsTurn {
                unit,
                team: actor.team(),
                active,
            });
        }

        let action = actor
            .action(kind)
            .ok_or(ActionError::ActionUnavailable { unit, kind })?;
        if !action.is_valid_target(actor, target, state, &self.env) {
            return Err(ActionError::InvalidTarget { kind, target });
        }

        let required = action.point_cost(actor);
        let available = actor.action_points();
        if available < required {
            return Err(ActionError::InsufficientPoints {
                required,
                available,
            });
        }

        let progress = action.begin(actor, target, state)?;
        if !self.try_spend(unit, kind) {
            return Err(ActionError::InsufficientPoints {
                required,
                available,
            });
        }

        self.state.in_flight = Some(InFlightAction {
            unit,
            target,
            controller,
            progress,
        });
        self.emit(BattleEvent::ActionStarted { unit, kind, target });
        self.emit(BattleEvent::BusyChanged { busy: true });
        Ok(())
    }
}
