//! Per-unit candidate selection.

use tactics_core::{
    ActionKind, AiActionCandidate, BattleEnv, BattleState, CombatUnit, TacticalAction,
};

/// Best action/target pair found for a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredChoice {
    pub kind: ActionKind,
    pub candidate: AiActionCandidate,
}

/// Candidate selector for one unit.
///
/// Evaluates the unit's action set in order, skipping actions it cannot
/// afford, and scores every valid target of the rest.
///
/// # Determinism
///
/// Scoring is pure. In case of a tie the first pair seen wins, so the same
/// state always yields the same choice.
pub struct ActionSelector;

impl ActionSelector {
    pub fn select(
        unit: &CombatUnit,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> Option<ScoredChoice> {
        let mut best: Option<ScoredChoice> = None;

        for action in unit.actions() {
            if !unit.can_afford(action) {
                continue;
            }

            let kind = action.kind();
            for target in action.valid_targets(unit, state, env) {
                let candidate = action.score_candidate(unit, target, state, env);
                if best.is_none_or(|current| candidate.score > current.candidate.score) {
                    best = Some(ScoredChoice { kind, candidate });
                }
            }
        }

        match &best {
            Some(choice) => tracing::debug!(
                "Unit {}: best action = {} at {} (score={})",
                unit.id(),
                choice.kind,
                choice.candidate.target,
                choice.candidate.score
            ),
            None => tracing::debug!("Unit {}: no affordable action with a target", unit.id()),
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use tactics_core::{BattleMap, GameConfig, GridCoordinate, Team, UnitId, UnitSpawn};

    use super::*;

    fn c(x: i32, z: i32) -> GridCoordinate {
        GridCoordinate::new(x, z)
    }

    #[test]
    fn shooting_outranks_repositioning() {
        let map = BattleMap::open(10, 10)
            .with_spawn(UnitSpawn::new(Team::Opposing, c(5, 5)))
            .with_spawn(UnitSpawn::new(Team::Controlled, c(5, 8)));
        let state = BattleState::from_map(GameConfig::default(), &map).unwrap();
        let unit = state.unit(UnitId(0)).unwrap();

        let choice = ActionSelector::select(unit, &state, &BattleEnv::open()).unwrap();

        assert_eq!(choice.kind, ActionKind::Shoot);
        assert_eq!(choice.candidate, AiActionCandidate { target: c(5, 8), score: 100 });
    }

    #[test]
    fn without_enemies_first_zero_score_wins() {
        let map = BattleMap::open(10, 10).with_spawn(UnitSpawn::new(Team::Opposing, c(5, 5)));
        let state = BattleState::from_map(GameConfig::default(), &map).unwrap();
        let unit = state.unit(UnitId(0)).unwrap();

        let choice = ActionSelector::select(unit, &state, &BattleEnv::open()).unwrap();

        // Move comes first in the action set and its first target is the
        // corner of the search box.
        assert_eq!(choice.kind, ActionKind::Move);
        assert_eq!(choice.candidate, AiActionCandidate { target: c(1, 5), score: 0 });
    }

    #[test]
    fn nothing_to_choose_without_targets() {
        let spawn = UnitSpawn::new(Team::Opposing, c(1, 1)).with_actions([ActionKind::Shoot]);
        let map = BattleMap::open(4, 4).with_spawn(spawn);
        let state = BattleState::from_map(GameConfig::default(), &map).unwrap();
        let unit = state.unit(UnitId(0)).unwrap();

        assert!(ActionSelector::select(unit, &state, &BattleEnv::open()).is_none());
    }
}
