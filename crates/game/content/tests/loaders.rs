use std::fs;
use std::path::PathBuf;

use tactics_content::{ConfigLoader, MapLoader};
use tactics_core::{BattleState, GridCoordinate, Team, TerrainKind};

fn bundled(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../client/data")
        .join(name)
}

#[test]
fn loads_files_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("game.toml");
    let map_path = dir.path().join("arena.ron");
    fs::write(&config_path, "[units]\nmax_action_points = 3\n").unwrap();
    fs::write(
        &map_path,
        "(dimensions: (5, 5), tiles: [(2, 2, wall)], units: [(team: opposing, at: (4, 4))])",
    )
    .unwrap();

    let config = ConfigLoader::load(&config_path).unwrap();
    let map = MapLoader::load(&map_path).unwrap();
    let state = BattleState::from_map(config, &map).unwrap();

    assert_eq!(state.terrain_at(GridCoordinate::new(2, 2)), TerrainKind::Wall);
    let unit = state.units().team(Team::Opposing).next().unwrap();
    assert_eq!(unit.action_points(), 3);
    assert_eq!(unit.coordinate(), GridCoordinate::new(4, 4));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ron");

    let err = MapLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.ron"));
}

#[test]
fn bundled_content_builds_a_battle() {
    let config = ConfigLoader::load(&bundled("game.toml")).unwrap();
    let map = MapLoader::load(&bundled("skirmish.ron")).unwrap();
    let state = BattleState::from_map(config, &map).unwrap();

    assert_eq!(state.units().count(Team::Controlled), 3);
    assert_eq!(state.units().count(Team::Opposing), 3);
    assert_eq!(state.sight_blockers().count(), 6);
}
