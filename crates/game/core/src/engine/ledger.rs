use crate::action::{ActionKind, TacticalAction};
use crate::event::BattleEvent;
use crate::state::UnitId;

use super::BattleEngine;

impl BattleEngine<'_> {
    /// Whether `unit` carries `kind` and can pay for it now.
    pub fn can_afford(&self, unit: UnitId, kind: ActionKind) -> bool {
        self.state
            .unit(unit)
            .and_then(|combatant| combatant.action(kind).map(|action| combatant.can_afford(action)))
            .unwrap_or(false)
    }

    /// Deducts the cost of `kind` from `unit`'s budget. Leaves the budget
    /// untouched and returns `false` when it does not cover the cost.
    pub fn try_spend(&mut self, unit: UnitId, kind: ActionKind) -> bool {
        let Some(combatant) = self.state.units.get_mut(unit) else {
            return false;
        };
        let Some(cost) = combatant.action(kind).map(|action| action.point_cost(combatant)) else {
            return false;
        };
        if combatant.action_points() < cost {
            return false;
        }

        combatant.spend_points(cost);
        let points = combatant.action_points();
        self.emit(BattleEvent::ActionPointsChanged { unit, points });
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::env::BattleEnv;
    use crate::grid::GridCoordinate;
    use crate::state::{BattleState, Team};

    use super::*;

    #[test]
    fn unaffordable_spend_changes_nothing() {
        let mut state = BattleState::new(GameConfig::default()).unwrap();
        let mut engine = BattleEngine::new(&mut state, BattleEnv::open());
        let id = engine
            .spawn_unit(Team::Controlled, GridCoordinate::new(1, 1), &[])
            .unwrap();
        let _ = engine.state.drain_events();

        assert!(engine.try_spend(id, ActionKind::Spin));
        assert!(engine.try_spend(id, ActionKind::Shoot));
        assert!(!engine.can_afford(id, ActionKind::Move));
        assert!(!engine.try_spend(id, ActionKind::Move));

        assert_eq!(state.unit(id).unwrap().action_points(), 0);
        assert_eq!(state.drain_events().len(), 2);
    }

    #[test]
    fn missing_action_is_never_affordable() {
        let mut state = BattleState::new(GameConfig::default()).unwrap();
        let mut engine = BattleEngine::new(&mut state, BattleEnv::open());
        let id = engine
            .spawn_unit(Team::Controlled, GridCoordinate::new(1, 1), &[ActionKind::Move])
            .unwrap();

        assert!(!engine.can_afford(id, ActionKind::Grenade));
        assert!(!engine.try_spend(id, ActionKind::Grenade));
        assert_eq!(state.unit(id).unwrap().action_points(), 2);
    }
}
