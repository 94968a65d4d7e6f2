//! Fixed-step simulation driver.
//!
//! [`Simulation`] owns the battle state and everything that acts on it. Each
//! [`Simulation::tick`] runs, in order:
//! 1. the action in flight, routing its completion to the requester
//! 2. the decision engine of the side that holds the turn
//! 3. the event drain: log, publish on the bus, return to the caller

use tactics_core::{
    ActionKind, BattleEngine, BattleEnv, BattleEvent, BattleMap, BattleState, Controller,
    GameConfig, GridCoordinate, Team, UnitId,
};

use crate::error::{Result, RuntimeError};
use crate::events::EventBus;
use crate::oracle::ObstacleSight;
use crate::providers::{AiStep, DecisionEngine, PlayerController};

pub struct Simulation {
    state: BattleState,
    sight: ObstacleSight,
    bus: EventBus,
    player: PlayerController,
    ai: Vec<DecisionEngine>,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn decision_engines(&self) -> &[DecisionEngine] {
        &self.ai
    }

    pub fn env(&self) -> BattleEnv<'_> {
        BattleEnv::new(&self.sight)
    }

    /// Winning side once the other one has no units left.
    pub fn winner(&self) -> Option<Team> {
        let units = self.state.units();
        match (units.count(Team::Controlled), units.count(Team::Opposing)) {
            (0, 0) => None,
            (_, 0) => Some(Team::Controlled),
            (0, _) => Some(Team::Opposing),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        let units = self.state.units();
        units.count(Team::Controlled) == 0 || units.count(Team::Opposing) == 0
    }

    pub fn select_unit(&mut self, unit: UnitId) -> Result<()> {
        self.player.select_unit(&self.state, unit)
    }

    pub fn select_action(&mut self, kind: ActionKind) -> Result<()> {
        self.player.select_action(&self.state, kind)
    }

    /// Requests the selected action against `target` for the player side.
    pub fn submit(&mut self, target: GridCoordinate) -> Result<()> {
        let (unit, kind) = self.player.selection()?;
        self.request_action(unit, kind, target)
    }

    /// Player request path. Rejected while busy or outside the player's turn.
    pub fn request_action(
        &mut self,
        unit: UnitId,
        kind: ActionKind,
        target: GridCoordinate,
    ) -> Result<()> {
        let team = self.player.team();
        if self.state.turn().active_team != team {
            tracing::warn!("Rejected {} for unit {}: not the {} turn", kind, unit, team);
            return Err(RuntimeError::NotPlayersTurn { team });
        }

        let env = BattleEnv::new(&self.sight);
        BattleEngine::new(&mut self.state, env)
            .request_action(unit, kind, target, Controller::Player)
            .map_err(|err| {
                tracing::warn!("Rejected {} for unit {} at {}: {}", kind, unit, target, err);
                RuntimeError::from(err)
            })
    }

    /// Ends the player side's turn.
    pub fn end_turn(&mut self) -> Result<()> {
        let team = self.player.team();
        if self.state.is_busy() {
            return Err(RuntimeError::Busy);
        }
        if self.state.turn().active_team != team {
            return Err(RuntimeError::NotPlayersTurn { team });
        }

        self.advance_turn();
        Ok(())
    }

    /// Advances the simulation by `dt` seconds and returns the events it
    /// produced, in emission order. The same events go out on the bus.
    pub fn tick(&mut self, dt: f32) -> Vec<BattleEvent> {
        let env = BattleEnv::new(&self.sight);
        if let Some(completion) = BattleEngine::new(&mut self.state, env).tick(dt) {
            tracing::debug!(
                "Completed {} for unit {} ({})",
                completion.kind,
                completion.unit,
                completion.controller
            );
            for engine in &mut self.ai {
                engine.on_action_complete(&completion);
            }
        }

        let active = self.state.turn().active_team;
        let mut end_turn = false;
        for engine in self.ai.iter_mut().filter(|engine| engine.team() == active) {
            match engine.tick(&mut self.state, BattleEnv::new(&self.sight), dt) {
                AiStep::Idle => {}
                AiStep::Acted { unit, kind, target } => {
                    tracing::debug!("AI {} chose {} for unit {} at {}", active, kind, unit, target);
                }
                AiStep::EndTurn => end_turn = true,
            }
        }
        if end_turn && !self.is_over() {
            self.advance_turn();
        }

        self.flush_events()
    }

    fn advance_turn(&mut self) {
        BattleEngine::new(&mut self.state, BattleEnv::new(&self.sight)).advance_turn();
        for engine in &mut self.ai {
            engine.on_turn_changed(&self.state);
        }
    }

    fn flush_events(&mut self) -> Vec<BattleEvent> {
        let events = self.state.drain_events();
        for event in &events {
            log_event(event);
            if let BattleEvent::UnitDied { unit, .. } = event {
                self.player.on_unit_died(*unit);
            }
            self.bus.publish(event.clone());
        }
        events
    }
}

fn log_event(event: &BattleEvent) {
    match event {
        BattleEvent::TurnChanged {
            turn_number,
            active_team,
        } => tracing::info!("Turn {} begins for the {} side", turn_number, active_team),
        BattleEvent::ActionStarted { unit, kind, target } => {
            tracing::info!("Unit {} starts {} at {}", unit, kind, target)
        }
        BattleEvent::ActionCompleted { unit, kind } => {
            tracing::info!("Unit {} completed {}", unit, kind)
        }
        BattleEvent::UnitDied { unit, team, at } => {
            tracing::info!("Unit {} ({}) died at {}", unit, team, at)
        }
        BattleEvent::UnitDamaged {
            unit,
            amount,
            health,
        } => tracing::info!(
            "Unit {} took {} damage ({}/{})",
            unit,
            amount,
            health.current,
            health.maximum
        ),
        other => match other.unit() {
            Some(unit) => tracing::debug!("Unit {}: {:?}", unit, other),
            None => tracing::debug!("{:?}", other),
        },
    }
}

/// Builder for [`Simulation`].
///
/// The opposing side is AI-driven by default; autoplay adds a second
/// decision engine for the controlled side.
pub struct SimulationBuilder {
    config: GameConfig,
    map: Option<BattleMap>,
    autoplay: bool,
    bus_capacity: usize,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            map: None,
            autoplay: false,
            bus_capacity: 256,
        }
    }
}

impl SimulationBuilder {
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn map(mut self, map: BattleMap) -> Self {
        self.map = Some(map);
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn bus_capacity(mut self, capacity: usize) -> Self {
        self.bus_capacity = capacity.max(1);
        self
    }

    pub fn build(self) -> Result<Simulation> {
        let map = self.map.ok_or(RuntimeError::MissingMap)?;
        let pacing = self.config.ai;
        let state = BattleState::from_map(self.config, &map).map_err(RuntimeError::InitialState)?;
        let sight = ObstacleSight::from_state(&state);

        let mut ai = Vec::new();
        if self.autoplay {
            ai.push(DecisionEngine::new(Team::Controlled, pacing));
        }
        ai.push(DecisionEngine::new(Team::Opposing, pacing));
        for engine in &mut ai {
            engine.on_turn_changed(&state);
        }

        tracing::info!(
            "Battle ready: {}x{} grid, {} units, {} sight blockers",
            map.width,
            map.height,
            state.units().len(),
            sight.len()
        );

        Ok(Simulation {
            state,
            sight,
            bus: EventBus::with_capacity(self.bus_capacity),
            player: PlayerController::default(),
            ai,
        })
    }
}
