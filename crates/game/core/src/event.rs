//! Notifications the rules emit for presentation layers.
//!
//! The core never calls observers directly. Every mutation appends a
//! [`BattleEvent`] to the state's [`EventQueue`], and the driver drains the
//! queue once per tick. Events for one mutation are pushed after the state
//! change they describe, so a consumer reading the state sees the result.

use crate::action::ActionKind;
use crate::grid::GridCoordinate;
use crate::state::{Health, Team, UnitId};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    UnitSpawned {
        unit: UnitId,
        team: Team,
        at: GridCoordinate,
    },
    UnitMoved {
        unit: UnitId,
        from: GridCoordinate,
        to: GridCoordinate,
    },
    UnitDamaged {
        unit: UnitId,
        /// Health actually lost after clamping.
        amount: u32,
        health: Health,
    },
    /// Fired once, right before the unit leaves the roster.
    UnitDied {
        unit: UnitId,
        team: Team,
        at: GridCoordinate,
    },
    ActionPointsChanged {
        unit: UnitId,
        points: u32,
    },
    ActionStarted {
        unit: UnitId,
        kind: ActionKind,
        target: GridCoordinate,
    },
    ActionCompleted {
        unit: UnitId,
        kind: ActionKind,
    },
    BusyChanged {
        busy: bool,
    },
    TurnChanged {
        turn_number: u32,
        active_team: Team,
    },
    ShotFired {
        attacker: UnitId,
        target: UnitId,
    },
    GrenadeExploded {
        at: GridCoordinate,
    },
}

impl BattleEvent {
    /// Unit the event is about, if any.
    pub fn unit(&self) -> Option<UnitId> {
        match self {
            BattleEvent::UnitSpawned { unit, .. }
            | BattleEvent::UnitMoved { unit, .. }
            | BattleEvent::UnitDamaged { unit, .. }
            | BattleEvent::UnitDied { unit, .. }
            | BattleEvent::ActionPointsChanged { unit, .. }
            | BattleEvent::ActionStarted { unit, .. }
            | BattleEvent::ActionCompleted { unit, .. } => Some(*unit),
            BattleEvent::ShotFired { attacker, .. } => Some(*attacker),
            BattleEvent::BusyChanged { .. }
            | BattleEvent::TurnChanged { .. }
            | BattleEvent::GrenadeExploded { .. } => None,
        }
    }
}

/// FIFO buffer of pending events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventQueue {
    pending: Vec<BattleEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: BattleEvent) {
        self.pending.push(event);
    }

    /// Removes and returns every pending event in emission order.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[BattleEvent] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shots_belong_to_the_attacker() {
        let shot = BattleEvent::ShotFired {
            attacker: UnitId(3),
            target: UnitId(7),
        };
        let turn = BattleEvent::TurnChanged {
            turn_number: 2,
            active_team: Team::Opposing,
        };

        assert_eq!(shot.unit(), Some(UnitId(3)));
        assert_eq!(turn.unit(), None);
        assert_eq!(BattleEvent::BusyChanged { busy: true }.unit(), None);
    }

    #[test]
    fn queue_drains_in_push_order() {
        let mut queue = EventQueue::default();
        queue.push(BattleEvent::BusyChanged { busy: true });
        queue.push(BattleEvent::BusyChanged { busy: false });
        assert_eq!(queue.pending().len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0], BattleEvent::BusyChanged { busy: true });
        assert!(queue.is_empty());
    }
}
