//! Catalog of ammunition and wall definitions.
//!
//! The `Catalog` is built once and never mutated. Lookups are O(1) through an
//! id index; listing preserves registration order so presentation layers get
//! a stable item order.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::definition::{Ammunition, AmmunitionId, Wall, WallId};
use crate::core::Selection;
use crate::error::{CombatError, Result};

/// Errors raised while assembling a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{0} registered twice")]
    DuplicateAmmunition(AmmunitionId),

    #[error("{0} registered twice")]
    DuplicateWall(WallId),
}

/// Immutable lookup table of ammunition and walls.
///
/// ## Example
///
/// ```
/// use rust_duel::catalog::{Ammunition, AmmunitionId, Catalog, Wall, WallId};
///
/// let catalog = Catalog::builder()
///     .with_ammunition(Ammunition::new(AmmunitionId::new(1), "Stone", 10, 10))
///     .with_wall(Wall::new(WallId::new(1), "Palisade", 10, 10))
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.lookup_ammunition(AmmunitionId::new(1)).unwrap().damage, 10);
/// assert!(catalog.lookup_wall(WallId::new(9)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    ammunition: Vec<Ammunition>,
    walls: Vec<Wall>,
    ammunition_index: FxHashMap<AmmunitionId, usize>,
    wall_index: FxHashMap<WallId, usize>,
}

impl Catalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The process-wide default catalog.
    ///
    /// Built on first access and shared read-only afterwards.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(standard_catalog)
    }

    /// Look up an ammunition definition.
    #[must_use]
    pub fn lookup_ammunition(&self, id: AmmunitionId) -> Option<&Ammunition> {
        self.ammunition_index.get(&id).map(|&i| &self.ammunition[i])
    }

    /// Look up a wall definition.
    #[must_use]
    pub fn lookup_wall(&self, id: WallId) -> Option<&Wall> {
        self.wall_index.get(&id).map(|&i| &self.walls[i])
    }

    /// All ammunition in registration order.
    #[must_use]
    pub fn all_ammunition(&self) -> &[Ammunition] {
        &self.ammunition
    }

    /// All walls in registration order.
    #[must_use]
    pub fn all_walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Resolve an ammunition selection.
    ///
    /// `Selection::None` resolves to `Ok(None)`; an id missing from the
    /// catalog is `UnknownAmmunition`.
    pub fn resolve_ammunition(&self, selection: Selection<AmmunitionId>) -> Result<Option<&Ammunition>> {
        match selection {
            Selection::None => Ok(None),
            Selection::Item(id) => self
                .lookup_ammunition(id)
                .map(Some)
                .ok_or(CombatError::UnknownAmmunition(id)),
        }
    }

    /// Resolve a wall selection.
    pub fn resolve_wall(&self, selection: Selection<WallId>) -> Result<Option<&Wall>> {
        match selection {
            Selection::None => Ok(None),
            Selection::Item(id) => self
                .lookup_wall(id)
                .map(Some)
                .ok_or(CombatError::UnknownWall(id)),
        }
    }

    /// Total point cost of an ammunition and wall selection.
    pub fn selection_cost(
        &self,
        ammunition: Selection<AmmunitionId>,
        wall: Selection<WallId>,
    ) -> Result<u32> {
        let ammunition_cost = self.resolve_ammunition(ammunition)?.map_or(0, |a| a.cost);
        let wall_cost = self.resolve_wall(wall)?.map_or(0, |w| w.cost);
        Ok(ammunition_cost.saturating_add(wall_cost))
    }
}

/// Builder for a `Catalog`.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    ammunition: Vec<Ammunition>,
    walls: Vec<Wall>,
}

impl CatalogBuilder {
    /// Add an ammunition definition.
    #[must_use]
    pub fn with_ammunition(mut self, ammunition: Ammunition) -> Self {
        self.ammunition.push(ammunition);
        self
    }

    /// Add a wall definition.
    #[must_use]
    pub fn with_wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    /// Build the catalog, rejecting duplicate ids.
    pub fn build(self) -> std::result::Result<Catalog, CatalogError> {
        let mut ammunition_index = FxHashMap::default();
        for (i, ammunition) in self.ammunition.iter().enumerate() {
            if ammunition_index.insert(ammunition.id, i).is_some() {
                return Err(CatalogError::DuplicateAmmunition(ammunition.id));
            }
        }

        let mut wall_index = FxHashMap::default();
        for (i, wall) in self.walls.iter().enumerate() {
            if wall_index.insert(wall.id, i).is_some() {
                return Err(CatalogError::DuplicateWall(wall.id));
            }
        }

        Ok(Catalog {
            ammunition: self.ammunition,
            walls: self.walls,
            ammunition_index,
            wall_index,
        })
    }
}

fn standard_catalog() -> Catalog {
    let ammunition = [
        (1, "Stone", 10, 10, "ammo/stone.png"),
        (2, "Arrow Volley", 20, 20, "ammo/arrows.png"),
        (3, "Fire Pot", 30, 30, "ammo/fire_pot.png"),
        (4, "Cannonball", 50, 45, "ammo/cannonball.png"),
    ];
    let walls = [
        (1, "Wooden Palisade", 10, 10, "walls/palisade.png"),
        (2, "Stone Wall", 20, 20, "walls/stone.png"),
        (3, "Iron Rampart", 35, 30, "walls/iron.png"),
    ];

    let mut builder = Catalog::builder();
    for (id, name, damage, cost, icon) in ammunition {
        builder = builder.with_ammunition(Ammunition::new(AmmunitionId::new(id), name, damage, cost).with_icon(icon));
    }
    for (id, name, defense, cost, icon) in walls {
        builder = builder.with_wall(Wall::new(WallId::new(id), name, defense, cost).with_icon(icon));
    }

    // Ids above are literal and distinct, so this cannot fail.
    builder.build().unwrap_or_default()
}
