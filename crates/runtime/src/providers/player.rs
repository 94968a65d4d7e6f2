//! Selection state for the human-controlled side.
//!
//! Input devices are out of scope: whatever front end drives the game calls
//! these methods directly. Requests themselves go through
//! [`crate::Simulation::submit`].

use tactics_core::{ActionError, ActionKind, BattleState, TacticalAction, Team, UnitId};

use crate::error::{Result, RuntimeError};

#[derive(Clone, Debug)]
pub struct PlayerController {
    team: Team,
    selected_unit: Option<UnitId>,
    selected_action: Option<ActionKind>,
}

impl PlayerController {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            selected_unit: None,
            selected_action: None,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn selected_unit(&self) -> Option<UnitId> {
        self.selected_unit
    }

    pub fn selected_action(&self) -> Option<ActionKind> {
        self.selected_action
    }

    /// Selects one of the side's own units and its move action (or its first
    /// action when it cannot move).
    pub fn select_unit(&mut self, state: &BattleState, unit: UnitId) -> Result<()> {
        if state.is_busy() {
            return Err(RuntimeError::Busy);
        }
        let combatant = state
            .unit(unit)
            .ok_or(ActionError::UnitNotFound(unit))?;
        if combatant.team() != self.team {
            return Err(RuntimeError::NotSelectable {
                unit,
                team: self.team,
            });
        }

        self.selected_unit = Some(unit);
        self.selected_action = combatant
            .action(ActionKind::Move)
            .or_else(|| combatant.actions().first())
            .map(|action| action.kind());
        Ok(())
    }

    pub fn select_action(&mut self, state: &BattleState, kind: ActionKind) -> Result<()> {
        if state.is_busy() {
            return Err(RuntimeError::Busy);
        }
        let unit = self.selected_unit.ok_or(RuntimeError::NoUnitSelected)?;
        let combatant = state
            .unit(unit)
            .ok_or(ActionError::UnitNotFound(unit))?;
        if combatant.action(kind).is_none() {
            return Err(ActionError::ActionUnavailable { unit, kind }.into());
        }

        self.selected_action = Some(kind);
        Ok(())
    }

    /// The unit and action a submitted target applies to.
    pub fn selection(&self) -> Result<(UnitId, ActionKind)> {
        let unit = self.selected_unit.ok_or(RuntimeError::NoUnitSelected)?;
        let kind = self.selected_action.ok_or(RuntimeError::NoActionSelected)?;
        Ok((unit, kind))
    }

    /// Drops the selection if it points at a unit that just died.
    pub fn on_unit_died(&mut self, unit: UnitId) {
        if self.selected_unit == Some(unit) {
            self.selected_unit = None;
            self.selected_action = None;
        }
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(Team::Controlled)
    }
}
