use std::collections::BTreeMap;

use super::{CombatUnit, Team, UnitId};

/// Living units keyed by id.
///
/// Ids are handed out monotonically, so iteration order is registration
/// order. Dead units are removed and never reappear.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitRoster {
    units: BTreeMap<UnitId, CombatUnit>,
    next_id: u32,
}

impl UnitRoster {
    pub(crate) fn allocate_id(&mut self) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn insert(&mut self, unit: CombatUnit) {
        let _ = self.units.insert(unit.id(), unit);
    }

    pub(crate) fn remove(&mut self, id: UnitId) -> Option<CombatUnit> {
        self.units.remove(&id)
    }

    pub(crate) fn get_mut(&mut self, id: UnitId) -> Option<&mut CombatUnit> {
        self.units.get_mut(&id)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CombatUnit> {
        self.units.values_mut()
    }

    pub fn get(&self, id: UnitId) -> Option<&CombatUnit> {
        self.units.get(&id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatUnit> {
        self.units.values()
    }

    /// Units of `team` in registration order.
    pub fn team(&self, team: Team) -> impl Iterator<Item = &CombatUnit> {
        self.units.values().filter(move |unit| unit.team() == team)
    }

    pub fn team_ids(&self, team: Team) -> Vec<UnitId> {
        self.team(team).map(CombatUnit::id).collect()
    }

    pub fn count(&self, team: Team) -> usize {
        self.team(team).count()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
