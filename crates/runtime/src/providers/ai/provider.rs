//! Turn sequencing for AI-controlled sides.

use tactics_core::config::AiConfig;
use tactics_core::{
    ActionCompletion, ActionKind, BattleEngine, BattleEnv, BattleState, Controller,
    GridCoordinate, Team, UnitId,
};

use super::selector::ActionSelector;

/// Where the engine is within its side's turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AiPhase {
    /// The other side is acting.
    Waiting,
    /// Counting down before the next step.
    TakingTurn { timer: f32 },
    /// An action it requested is in flight.
    Busy,
}

/// Outcome of one engine tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiStep {
    Idle,
    Acted {
        unit: UnitId,
        kind: ActionKind,
        target: GridCoordinate,
    },
    /// No unit can act further; the caller should advance the turn.
    EndTurn,
}

/// Greedy decision engine for one side.
///
/// On every turn of its side it captures the side's units in registration
/// order and works through them with a cursor. The current unit keeps acting
/// on its best choice until it has none left; then the cursor moves on.
/// Every step is re-entered from a completion, after a pacing delay.
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    team: Team,
    pacing: AiConfig,
    phase: AiPhase,
    order: Vec<UnitId>,
    cursor: usize,
}

impl DecisionEngine {
    pub fn new(team: Team, pacing: AiConfig) -> Self {
        Self {
            team,
            pacing,
            phase: AiPhase::Waiting,
            order: Vec::new(),
            cursor: 0,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn phase(&self) -> AiPhase {
        self.phase
    }

    /// Arms the engine when its side gains control and parks it otherwise.
    pub fn on_turn_changed(&mut self, state: &BattleState) {
        if state.turn().active_team != self.team {
            self.phase = AiPhase::Waiting;
            return;
        }

        self.order = state.units().team_ids(self.team);
        self.cursor = 0;
        self.phase = AiPhase::TakingTurn {
            timer: self.pacing.turn_start_delay_secs,
        };
        tracing::debug!(
            "AI {} taking turn {} with {} units",
            self.team,
            state.turn().turn_number,
            self.order.len()
        );
    }

    /// Resumes sequencing after an action this engine requested finished.
    pub fn on_action_complete(&mut self, completion: &ActionCompletion) {
        if completion.controller == Controller::Ai && self.phase == AiPhase::Busy {
            self.phase = AiPhase::TakingTurn {
                timer: self.pacing.action_delay_secs,
            };
        }
    }

    pub fn tick(&mut self, state: &mut BattleState, env: BattleEnv<'_>, dt: f32) -> AiStep {
        let AiPhase::TakingTurn { timer } = self.phase else {
            return AiStep::Idle;
        };
        if state.turn().active_team != self.team {
            self.phase = AiPhase::Waiting;
            return AiStep::Idle;
        }

        let timer = timer - dt;
        if timer > 0.0 || state.is_busy() {
            self.phase = AiPhase::TakingTurn {
                timer: timer.max(0.0),
            };
            return AiStep::Idle;
        }

        while let Some(&unit) = self.order.get(self.cursor) {
            let Some(combatant) = state.unit(unit) else {
                self.cursor += 1;
                continue;
            };
            let Some(choice) = ActionSelector::select(combatant, state, &env) else {
                self.cursor += 1;
                continue;
            };

            let target = choice.candidate.target;
            let mut engine = BattleEngine::new(state, env);
            match engine.request_action(unit, choice.kind, target, Controller::Ai) {
                Ok(()) => {
                    self.phase = AiPhase::Busy;
                    return AiStep::Acted {
                        unit,
                        kind: choice.kind,
                        target,
                    };
                }
                Err(err) => {
                    tracing::warn!("AI request for unit {} rejected: {}", unit, err);
                    self.cursor += 1;
                }
            }
        }

        self.phase = AiPhase::Waiting;
        AiStep::EndTurn
    }
}
