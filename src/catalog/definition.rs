//! Catalog item definitions - static ammunition and wall data.
//!
//! Definitions are immutable once registered. What a combatant currently has
//! selected lives on the `Combatant`, never here.

use serde::{Deserialize, Serialize};

/// Identifier of an ammunition definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AmmunitionId(pub u16);

impl AmmunitionId {
    /// Create a new ammunition ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for AmmunitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ammunition({})", self.0)
    }
}

/// Identifier of a wall definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallId(pub u16);

impl WallId {
    /// Create a new wall ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for WallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wall({})", self.0)
    }
}

/// An attack item.
///
/// ```
/// use rust_duel::catalog::{Ammunition, AmmunitionId};
///
/// let bolt = Ammunition::new(AmmunitionId::new(1), "Crossbow Bolt", 20, 15)
///     .with_icon("bolt.png");
///
/// assert_eq!(bolt.damage, 20);
/// assert_eq!(bolt.icon, "bolt.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ammunition {
    /// Unique identifier.
    pub id: AmmunitionId,

    /// Display name.
    pub name: String,

    /// Damage dealt before wall mitigation.
    pub damage: u32,

    /// Point cost to fire.
    pub cost: u32,

    /// Icon asset key for presentation layers.
    pub icon: String,
}

impl Ammunition {
    /// Create an ammunition definition with no icon.
    #[must_use]
    pub fn new(id: AmmunitionId, name: impl Into<String>, damage: u32, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
            cost,
            icon: String::new(),
        }
    }

    /// Set the icon (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// A defense item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// Unique identifier.
    pub id: WallId,

    /// Display name.
    pub name: String,

    /// Damage absorbed from each incoming attack.
    pub defense: u32,

    /// Point cost to raise.
    pub cost: u32,

    /// Icon asset key for presentation layers.
    pub icon: String,
}

impl Wall {
    /// Create a wall definition with no icon.
    #[must_use]
    pub fn new(id: WallId, name: impl Into<String>, defense: u32, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            defense,
            cost,
            icon: String::new(),
        }
    }

    /// Set the icon (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        assert_eq!(AmmunitionId::new(4).raw(), 4);
        assert_eq!(format!("{}", AmmunitionId::new(4)), "Ammunition(4)");
        assert_eq!(WallId::new(2).raw(), 2);
        assert_eq!(format!("{}", WallId::new(2)), "Wall(2)");
    }

    #[test]
    fn test_wall_builder() {
        let wall = Wall::new(WallId::new(1), "Palisade", 10, 10).with_icon("palisade.png");

        assert_eq!(wall.name, "Palisade");
        assert_eq!(wall.defense, 10);
        assert_eq!(wall.cost, 10);
        assert_eq!(wall.icon, "palisade.png");
    }

    #[test]
    fn test_ammunition_serialization() {
        let ammo = Ammunition::new(AmmunitionId::new(2), "Arrow", 20, 20).with_icon("arrow.png");
        let json = serde_json::to_string(&ammo).unwrap();
        let deserialized: Ammunition = serde_json::from_str(&json).unwrap();

        assert_eq!(ammo, deserialized);
    }
}
