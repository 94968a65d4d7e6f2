//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tactics_core::BattleEvent;
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Unit lifecycle, movement, health and budget changes
    Unit,
    /// Action start/completion, busy flag, shots and explosions
    Action,
    /// Turn changes
    Turn,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Unit, Topic::Action, Topic::Turn];

    pub fn of(event: &BattleEvent) -> Topic {
        match event {
            BattleEvent::UnitSpawned { .. }
            | BattleEvent::UnitMoved { .. }
            | BattleEvent::UnitDamaged { .. }
            | BattleEvent::UnitDied { .. }
            | BattleEvent::ActionPointsChanged { .. } => Topic::Unit,
            BattleEvent::ActionStarted { .. }
            | BattleEvent::ActionCompleted { .. }
            | BattleEvent::BusyChanged { .. }
            | BattleEvent::ShotFired { .. }
            | BattleEvent::GrenadeExploded { .. } => Topic::Action,
            BattleEvent::TurnChanged { .. } => Topic::Turn,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Events within a topic arrive in emission order.
#[derive(Clone)]
pub struct EventBus {
    unit: broadcast::Sender<BattleEvent>,
    action: broadcast::Sender<BattleEvent>,
    turn: broadcast::Sender<BattleEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            unit: broadcast::channel(capacity).0,
            action: broadcast::channel(capacity).0,
            turn: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<BattleEvent> {
        match topic {
            Topic::Unit => &self.unit,
            Topic::Action => &self.action,
            Topic::Turn => &self.turn,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: BattleEvent) {
        let topic = Topic::of(&event);
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> Vec<(Topic, broadcast::Receiver<BattleEvent>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tactics_core::{GridCoordinate, Team, UnitId};

    use super::*;

    #[test]
    fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut units = bus.subscribe(Topic::Unit);
        let mut turns = bus.subscribe(Topic::Turn);

        bus.publish(BattleEvent::UnitSpawned {
            unit: UnitId(0),
            team: Team::Controlled,
            at: GridCoordinate::new(1, 1),
        });
        bus.publish(BattleEvent::TurnChanged {
            turn_number: 2,
            active_team: Team::Opposing,
        });
        bus.publish(BattleEvent::BusyChanged { busy: true });

        assert!(matches!(units.try_recv(), Ok(BattleEvent::UnitSpawned { .. })));
        assert!(units.try_recv().is_err());
        assert!(matches!(
            turns.try_recv(),
            Ok(BattleEvent::TurnChanged { turn_number: 2, .. })
        ));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(BattleEvent::BusyChanged { busy: false });
    }
}
