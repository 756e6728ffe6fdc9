//! Bot policies that pick a combatant's selections for a turn.
//!
//! Policies only ever propose affordable selections, so a turn built from
//! them never fails with `InsufficientPoints`.

use smallvec::SmallVec;

use crate::catalog::{AmmunitionId, Catalog, WallId};
use crate::core::{CombatantId, GameRng, Selection, Session, TurnAction};

/// Ammunition/wall pair a combatant could stage.
pub type Loadout = (Selection<AmmunitionId>, Selection<WallId>);

/// Strategy choosing a turn action for one seat.
pub trait CombatPolicy: Send {
    /// Choose the action `seat` submits for the session's current turn.
    fn choose(&mut self, session: &Session, seat: CombatantId, catalog: &Catalog, rng: &mut GameRng) -> TurnAction;

    /// Name for reports and logs.
    fn name(&self) -> &'static str;
}

/// Every loadout `seat` can pay for this turn, including empty selections.
///
/// Ordered by ammunition then wall, in catalog order, starting with
/// `(None, None)`.
pub fn affordable_loadouts(session: &Session, seat: CombatantId, catalog: &Catalog) -> SmallVec<[Loadout; 16]> {
    let points = session.combatant(seat).points;

    let ammunition = std::iter::once((Selection::None, 0)).chain(
        catalog
            .all_ammunition()
            .iter()
            .map(|ammo| (Selection::Item(ammo.id), ammo.cost)),
    );

    let mut loadouts = SmallVec::new();
    for (ammo, ammo_cost) in ammunition {
        let walls = std::iter::once((Selection::None, 0))
            .chain(catalog.all_walls().iter().map(|wall| (Selection::Item(wall.id), wall.cost)));
        for (wall, wall_cost) in walls {
            if ammo_cost.saturating_add(wall_cost) <= points {
                loadouts.push((ammo, wall));
            }
        }
    }
    loadouts
}

fn action_for(seat: CombatantId, (ammunition, wall): Loadout) -> TurnAction {
    TurnAction {
        combatant: seat,
        ammunition,
        wall,
    }
}

/// Never selects anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassivePolicy;

impl CombatPolicy for PassivePolicy {
    fn choose(&mut self, _session: &Session, seat: CombatantId, _catalog: &Catalog, _rng: &mut GameRng) -> TurnAction {
        TurnAction::new(seat)
    }

    fn name(&self) -> &'static str {
        "passive"
    }
}

/// Uniformly random affordable loadout.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl CombatPolicy for RandomPolicy {
    fn choose(&mut self, session: &Session, seat: CombatantId, catalog: &Catalog, rng: &mut GameRng) -> TurnAction {
        let loadouts = affordable_loadouts(session, seat, catalog);
        let loadout = rng.choose(&loadouts).copied().unwrap_or_default();
        action_for(seat, loadout)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Spends on the hardest-hitting ammunition it can afford, then the
/// strongest wall the remaining points cover.
///
/// Ties on damage or defense go to the cheaper item.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl CombatPolicy for GreedyPolicy {
    fn choose(&mut self, session: &Session, seat: CombatantId, catalog: &Catalog, _rng: &mut GameRng) -> TurnAction {
        let mut budget = session.combatant(seat).points;
        let mut action = TurnAction::new(seat);

        let ammo = catalog
            .all_ammunition()
            .iter()
            .filter(|ammo| ammo.damage > 0 && ammo.cost <= budget)
            .max_by(|a, b| a.damage.cmp(&b.damage).then(b.cost.cmp(&a.cost)));
        if let Some(ammo) = ammo {
            budget -= ammo.cost;
            action = action.with_ammunition(ammo.id);
        }

        let wall = catalog
            .all_walls()
            .iter()
            .filter(|wall| wall.defense > 0 && wall.cost <= budget)
            .max_by(|a, b| a.defense.cmp(&b.defense).then(b.cost.cmp(&a.cost)));
        if let Some(wall) = wall {
            action = action.with_wall(wall.id);
        }

        action
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CombatantConfig, SessionConfig, SessionId};
    use crate::session::SessionLifecycle;

    fn session_with_points(points: u32) -> Session {
        let combatant = CombatantConfig::default().with_points(points);
        SessionLifecycle::start(SessionId::new(1), &SessionConfig::duel(combatant, combatant)).unwrap()
    }

    #[test]
    fn test_affordable_loadouts_respect_points() {
        let catalog = Catalog::standard();
        let session = session_with_points(20);

        let loadouts = affordable_loadouts(&session, CombatantId::First, catalog);

        assert_eq!(loadouts[0], (Selection::None, Selection::None));
        for (ammo, wall) in &loadouts {
            assert!(catalog.selection_cost(*ammo, *wall).unwrap() <= 20);
        }
        assert!(loadouts.contains(&(Selection::Item(AmmunitionId::new(1)), Selection::Item(WallId::new(1)))));
        assert!(!loadouts.contains(&(Selection::Item(AmmunitionId::new(3)), Selection::None)));
    }

    #[test]
    fn test_broke_combatant_only_passes() {
        let catalog = Catalog::standard();
        let session = session_with_points(0);

        let loadouts = affordable_loadouts(&session, CombatantId::Second, catalog);
        assert_eq!(loadouts.len(), 1);

        let mut rng = GameRng::new(3);
        let action = RandomPolicy.choose(&session, CombatantId::Second, catalog, &mut rng);
        assert_eq!(action, TurnAction::new(CombatantId::Second));
    }

    #[test]
    fn test_greedy_spends_on_attack_first() {
        let catalog = Catalog::standard();
        let session = session_with_points(60);
        let mut rng = GameRng::new(0);

        let action = GreedyPolicy.choose(&session, CombatantId::First, catalog, &mut rng);

        // Cannonball (45) leaves 15, enough for the palisade.
        assert_eq!(action.ammunition, Selection::Item(AmmunitionId::new(4)));
        assert_eq!(action.wall, Selection::Item(WallId::new(1)));
    }

    #[test]
    fn test_random_policy_is_deterministic() {
        let catalog = Catalog::standard();
        let session = session_with_points(100);

        let picks = |seed| {
            let mut rng = GameRng::new(seed);
            (0..8)
                .map(|_| RandomPolicy.choose(&session, CombatantId::First, catalog, &mut rng))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_passive_policy() {
        let catalog = Catalog::standard();
        let session = session_with_points(100);
        let mut rng = GameRng::new(0);

        let action = PassivePolicy.choose(&session, CombatantId::First, catalog, &mut rng);
        assert!(action.ammunition.is_none());
        assert!(action.wall.is_none());
        assert_eq!(PassivePolicy.name(), "passive");
    }
}
