//! Catalog: ammunition and wall definitions.
//!
//! ## Key Types
//!
//! - `AmmunitionId` / `WallId`: Identifiers for catalog entries
//! - `Ammunition`: Attack item (damage, cost)
//! - `Wall`: Defense item (defense, cost)
//! - `Catalog`: Immutable lookup table, with a process-wide default
//!
//! Looking up an unknown id yields `None`; that is a different outcome from a
//! combatant making no selection, which is modeled by `Selection::None`.

pub mod definition;
pub mod registry;

pub use definition::{Ammunition, AmmunitionId, Wall, WallId};
pub use registry::{Catalog, CatalogBuilder, CatalogError};
