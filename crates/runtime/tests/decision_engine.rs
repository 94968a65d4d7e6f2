use tactics_core::config::AiConfig;
use tactics_core::{
    ActionKind, BattleEngine, BattleEnv, BattleMap, BattleState, GameConfig, GridCoordinate,
    Team, UnitId, UnitSpawn,
};
use tactics_runtime::{AiPhase, AiStep, DecisionEngine};

fn c(x: i32, z: i32) -> GridCoordinate {
    GridCoordinate::new(x, z)
}

fn opposing_turn(map: BattleMap) -> (BattleState, DecisionEngine) {
    let mut state = BattleState::from_map(GameConfig::default(), &map).unwrap();
    BattleEngine::new(&mut state, BattleEnv::open()).advance_turn();
    let _ = state.drain_events();

    let mut ai = DecisionEngine::new(Team::Opposing, AiConfig::default());
    ai.on_turn_changed(&state);
    (state, ai)
}

fn finish_action(state: &mut BattleState, ai: &mut DecisionEngine) {
    let mut engine = BattleEngine::new(state, BattleEnv::open());
    for _ in 0..10_000 {
        if let Some(done) = engine.tick(0.05) {
            ai.on_action_complete(&done);
            return;
        }
    }
    panic!("action never completed");
}

#[test]
fn waits_before_first_step_then_shoots() {
    let map = BattleMap::open(10, 10)
        .with_spawn(UnitSpawn::new(Team::Opposing, c(5, 5)))
        .with_spawn(UnitSpawn::new(Team::Controlled, c(5, 8)));
    let (mut state, mut ai) = opposing_turn(map);
    assert_eq!(ai.phase(), AiPhase::TakingTurn { timer: 2.0 });

    assert_eq!(ai.tick(&mut state, BattleEnv::open(), 1.5), AiStep::Idle);
    assert_eq!(
        ai.tick(&mut state, BattleEnv::open(), 0.5),
        AiStep::Acted {
            unit: UnitId(0),
            kind: ActionKind::Shoot,
            target: c(5, 8),
        }
    );
    assert_eq!(ai.phase(), AiPhase::Busy);
    assert_eq!(ai.tick(&mut state, BattleEnv::open(), 10.0), AiStep::Idle);

    finish_action(&mut state, &mut ai);
    assert_eq!(ai.phase(), AiPhase::TakingTurn { timer: 0.5 });
    assert_eq!(ai.tick(&mut state, BattleEnv::open(), 0.25), AiStep::Idle);
    assert!(matches!(
        ai.tick(&mut state, BattleEnv::open(), 0.25),
        AiStep::Acted { kind: ActionKind::Shoot, .. }
    ));
    finish_action(&mut state, &mut ai);

    assert_eq!(ai.tick(&mut state, BattleEnv::open(), 0.5), AiStep::EndTurn);
    assert_eq!(ai.phase(), AiPhase::Waiting);
    assert_eq!(state.unit(UnitId(1)).unwrap().health().current, 20);
}

#[test]
fn spends_every_point_before_moving_on() {
    let map = BattleMap::open(10, 10)
        .with_spawn(UnitSpawn::new(Team::Opposing, c(0, 0)).with_actions([ActionKind::Spin]))
        .with_spawn(UnitSpawn::new(Team::Opposing, c(9, 9)).with_actions([ActionKind::Spin]));
    let (mut state, mut ai) = opposing_turn(map);

    let mut acted = Vec::new();
    let mut dt = 2.0;
    loop {
        match ai.tick(&mut state, BattleEnv::open(), dt) {
            AiStep::Acted { unit, .. } => {
                acted.push(unit);
                finish_action(&mut state, &mut ai);
            }
            AiStep::EndTurn => break,
            AiStep::Idle => {}
        }
        dt = 0.5;
    }

    assert_eq!(acted, vec![UnitId(0), UnitId(0), UnitId(1), UnitId(1)]);
    assert!(state.units().iter().all(|unit| unit.action_points() == 0));
}

#[test]
fn units_killed_mid_turn_are_skipped() {
    let map = BattleMap::open(10, 10)
        .with_spawn(UnitSpawn::new(Team::Opposing, c(0, 0)).with_actions([ActionKind::Spin]))
        .with_spawn(UnitSpawn::new(Team::Opposing, c(9, 9)).with_actions([ActionKind::Spin]));
    let (mut state, mut ai) = opposing_turn(map);
    let _ = BattleEngine::new(&mut state, BattleEnv::open()).damage(UnitId(0), 500);

    assert_eq!(
        ai.tick(&mut state, BattleEnv::open(), 2.0),
        AiStep::Acted {
            unit: UnitId(1),
            kind: ActionKind::Spin,
            target: c(9, 9),
        }
    );
}

#[test]
fn stays_idle_during_other_sides_turn() {
    let map = BattleMap::open(4, 4).with_spawn(UnitSpawn::new(Team::Opposing, c(0, 0)));
    let mut state = BattleState::from_map(GameConfig::default(), &map).unwrap();
    let mut ai = DecisionEngine::new(Team::Opposing, AiConfig::default());
    ai.on_turn_changed(&state);

    assert_eq!(ai.phase(), AiPhase::Waiting);
    assert_eq!(ai.tick(&mut state, BattleEnv::open(), 100.0), AiStep::Idle);
}
