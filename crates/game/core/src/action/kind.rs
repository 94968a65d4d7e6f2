/// Behaviors a unit can carry, in the order the standard set evaluates them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    /// Walk a path to a reachable free cell.
    Move,
    /// Rotate a full turn in place.
    Spin,
    /// Ranged attack against a visible enemy.
    Shoot,
    /// Area attack thrown at any cell in range.
    Grenade,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_are_snake_case() {
        assert_eq!(ActionKind::Grenade.to_string(), "grenade");
        assert_eq!(ActionKind::Move.as_str(), "move");
        assert_eq!(ActionKind::from_str("SHOOT").unwrap(), ActionKind::Shoot);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let kinds: Vec<_> = ActionKind::iter().collect();
        assert_eq!(
            kinds,
            vec![ActionKind::Move, ActionKind::Spin, ActionKind::Shoot, ActionKind::Grenade]
        );
    }
}
