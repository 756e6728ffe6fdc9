//! Combatant identification and per-combatant storage.
//!
//! ## CombatantId
//!
//! A duel always has exactly two combatants, distinguished by position.
//! `CombatantId::First` and `CombatantId::Second` are the only values, and
//! each one's turn opponent is simply the other.
//!
//! ## Pair
//!
//! Fixed two-slot storage indexed by `CombatantId`. There is no way to add
//! or remove a slot.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Position of a combatant within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombatantId {
    First,
    Second,
}

impl CombatantId {
    /// Both positions, in listing order.
    pub const ALL: [CombatantId; 2] = [CombatantId::First, CombatantId::Second];

    /// Get the 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CombatantId::First => 0,
            CombatantId::Second => 1,
        }
    }

    /// Get the position for a slot index, if valid.
    ///
    /// ```
    /// use rust_duel::core::CombatantId;
    ///
    /// assert_eq!(CombatantId::from_index(1), Some(CombatantId::Second));
    /// assert_eq!(CombatantId::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(CombatantId::First),
            1 => Some(CombatantId::Second),
            _ => None,
        }
    }

    /// The other combatant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            CombatantId::First => CombatantId::Second,
            CombatantId::Second => CombatantId::First,
        }
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatantId::First => write!(f, "First combatant"),
            CombatantId::Second => write!(f, "Second combatant"),
        }
    }
}

/// Per-combatant storage with exactly two slots.
///
/// ## Example
///
/// ```
/// use rust_duel::core::{CombatantId, Pair};
///
/// let mut health: Pair<u32> = Pair::with_value(100);
/// health[CombatantId::Second] = 70;
///
/// assert_eq!(health[CombatantId::First], 100);
/// assert_eq!(health[CombatantId::Second], 70);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<T> {
    data: [T; 2],
}

impl<T> Pair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(CombatantId) -> T) -> Self {
        Self {
            data: [factory(CombatantId::First), factory(CombatantId::Second)],
        }
    }

    /// Create a pair from values in listing order.
    #[must_use]
    pub const fn from_array(data: [T; 2]) -> Self {
        Self { data }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a combatant's entry.
    #[must_use]
    pub fn get(&self, combatant: CombatantId) -> &T {
        &self.data[combatant.index()]
    }

    /// Get a mutable reference to a combatant's entry.
    pub fn get_mut(&mut self, combatant: CombatantId) -> &mut T {
        &mut self.data[combatant.index()]
    }

    /// Iterate over (CombatantId, &T) pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &T)> {
        CombatantId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (CombatantId, &mut T) pairs in listing order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CombatantId, &mut T)> {
        CombatantId::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Transform both entries.
    pub fn map<U>(self, mut f: impl FnMut(CombatantId, T) -> U) -> Pair<U> {
        let [first, second] = self.data;
        Pair {
            data: [f(CombatantId::First, first), f(CombatantId::Second, second)],
        }
    }

    /// Borrow the entries in listing order.
    #[must_use]
    pub fn as_array(&self) -> &[T; 2] {
        &self.data
    }

    /// Consume the pair, returning entries in listing order.
    #[must_use]
    pub fn into_array(self) -> [T; 2] {
        self.data
    }
}

impl<T: Default> Default for Pair<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<CombatantId> for Pair<T> {
    type Output = T;

    fn index(&self, combatant: CombatantId) -> &Self::Output {
        self.get(combatant)
    }
}

impl<T> IndexMut<CombatantId> for Pair<T> {
    fn index_mut(&mut self, combatant: CombatantId) -> &mut Self::Output {
        self.get_mut(combatant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_id_basics() {
        assert_eq!(CombatantId::First.index(), 0);
        assert_eq!(CombatantId::Second.index(), 1);
        assert_eq!(CombatantId::First.opponent(), CombatantId::Second);
        assert_eq!(CombatantId::Second.opponent(), CombatantId::First);
        assert_eq!(format!("{}", CombatantId::First), "First combatant");
    }

    #[test]
    fn test_combatant_id_from_index() {
        for id in CombatantId::ALL {
            assert_eq!(CombatantId::from_index(id.index()), Some(id));
        }
        assert_eq!(CombatantId::from_index(7), None);
    }

    #[test]
    fn test_pair_new() {
        let pair: Pair<usize> = Pair::new(|c| c.index() * 10);

        assert_eq!(pair[CombatantId::First], 0);
        assert_eq!(pair[CombatantId::Second], 10);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair: Pair<i32> = Pair::default();

        pair[CombatantId::First] = 5;
        *pair.get_mut(CombatantId::Second) += 3;

        assert_eq!(pair.into_array(), [5, 3]);
    }

    #[test]
    fn test_pair_iter_order() {
        let pair = Pair::from_array(["a", "b"]);
        let entries: Vec<_> = pair.iter().collect();

        assert_eq!(entries, vec![(CombatantId::First, &"a"), (CombatantId::Second, &"b")]);
    }

    #[test]
    fn test_pair_map() {
        let pair = Pair::from_array([2u32, 3u32]);
        let doubled = pair.map(|_, v| v * 2);

        assert_eq!(doubled.as_array(), &[4, 6]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair = Pair::from_array([1u32, 2u32]);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: Pair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
