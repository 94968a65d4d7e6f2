use crate::action::{ActionKind, ActionStatus};
use crate::event::BattleEvent;
use crate::state::UnitId;

use super::{BattleEngine, Controller};

/// Report of an action that finished during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionCompletion {
    pub unit: UnitId,
    pub kind: ActionKind,
    pub controller: Controller,
}

impl BattleEngine<'_> {
    /// Advances the action in flight by `dt` seconds.
    ///
    /// After the action's own side effects, each unit whose world position
    /// now rounds to a different cell is moved in the occupancy grid. The
    /// completion is reported last, so consumers observe the final state.
    pub fn tick(&mut self, dt: f32) -> Option<ActionCompletion> {
        let mut flight = self.state.in_flight.take()?;
        let status = flight.progress.advance(self, flight.unit, dt);
        self.sync_coordinates();

        match status {
            ActionStatus::Running => {
                self.state.in_flight = Some(flight);
                None
            }
            ActionStatus::Complete => {
                let kind = flight.kind();
                self.emit(BattleEvent::ActionCompleted {
                    unit: flight.unit,
                    kind,
                });
                self.emit(BattleEvent::BusyChanged { busy: false });
                Some(ActionCompletion {
                    unit: flight.unit,
                    kind,
                    controller: flight.controller,
                })
            }
        }
    }

    fn sync_coordinates(&mut self) {
        let layout = self.state.layout;
        let moves: Vec<_> = self
            .state
            .units
            .iter()
            .filter_map(|unit| {
                let nearest = layout.to_coordinate(unit.position());
                (nearest != unit.coordinate() && layout.in_bounds(nearest))
                    .then_some((unit.id(), unit.coordinate(), nearest))
            })
            .collect();

        for (id, from, to) in moves {
            if let Some(unit) = self.state.units.get_mut(id) {
                unit.set_coordinate(to);
            }
            self.state
                .occupancy
                .move_unit(id, from, to, &mut self.state.events);
        }
    }
}
