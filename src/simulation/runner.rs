//! Drives whole matches between two policies.
//!
//! Matches go through the public session lifecycle: each seat's choice is
//! staged with `select_ammunition`/`select_wall`, then submitted as a turn.
//! Given the same seed, policies, and catalog a match replays exactly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy::CombatPolicy;
use crate::catalog::Catalog;
use crate::core::{CombatantId, GameRng, Pair, Session, SessionConfig, SessionId, TurnAction};
use crate::error::Result;
use crate::rules::EndResult;
use crate::session::SessionLifecycle;

/// Configuration for simulated matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Base seed. Match `i` of a series uses `seed + i`.
    pub seed: u64,

    /// Turns after which a match is ended explicitly, for sessions
    /// without a turn limit.
    pub max_turns: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { seed: 0, max_turns: 50 }
    }
}

impl SimulationConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the explicit end point.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// A finished match.
#[derive(Clone, Debug)]
pub struct MatchReport {
    /// Final session state, journal included.
    pub session: Session,

    /// Frozen end result.
    pub outcome: EndResult,
}

/// Aggregate over a series of matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Matches played.
    pub matches: u32,

    /// Wins per seat.
    pub wins: Pair<u32>,

    /// Mean turns per match.
    pub average_turns: f64,
}

/// Plays matches between two seated policies.
pub struct MatchRunner {
    policies: Pair<Box<dyn CombatPolicy>>,
    config: SimulationConfig,
}

impl MatchRunner {
    /// Seat `first` and `second`.
    pub fn new(first: Box<dyn CombatPolicy>, second: Box<dyn CombatPolicy>, config: SimulationConfig) -> Self {
        Self {
            policies: Pair::from_array([first, second]),
            config,
        }
    }

    /// The simulation configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play one match with the given seed.
    pub fn run(&mut self, session_config: &SessionConfig, catalog: &Catalog, seed: u64) -> Result<MatchReport> {
        let mut session = SessionLifecycle::start(SessionId::new(seed), session_config)?;
        let root = GameRng::new(seed);
        let mut seat_rngs = Pair::new(|seat| root.for_context(&seat.to_string()));

        while session.is_active() && session.turns_played() < self.config.max_turns {
            for seat in CombatantId::ALL {
                let choice = self.policies[seat].choose(&session, seat, catalog, &mut seat_rngs[seat]);
                SessionLifecycle::select_ammunition(&mut session, seat, choice.ammunition, catalog)?;
                SessionLifecycle::select_wall(&mut session, seat, choice.wall, catalog)?;
            }

            let turn = session.current_turn();
            let actions = session.combatants().as_array().each_ref().map(TurnAction::from_combatant);
            SessionLifecycle::play_turn(&mut session, turn, &actions, catalog)?;
        }

        let outcome = SessionLifecycle::end(&mut session);
        debug!(
            seed = root.seed(),
            first = self.policies[CombatantId::First].name(),
            second = self.policies[CombatantId::Second].name(),
            winner = %outcome.winner,
            turns = outcome.turns_played,
            "match finished"
        );

        Ok(MatchReport { session, outcome })
    }

    /// Play `count` matches, seeding match `i` with `config.seed + i`.
    pub fn run_series(&mut self, session_config: &SessionConfig, catalog: &Catalog, count: u32) -> Result<SeriesSummary> {
        let mut summary = SeriesSummary::default();
        let mut total_turns = 0u64;

        for i in 0..count {
            let seed = self.config.seed.wrapping_add(u64::from(i));
            let report = self.run(session_config, catalog, seed)?;
            summary.wins[report.outcome.winner] += 1;
            summary.matches += 1;
            total_turns += u64::from(report.outcome.turns_played);
        }

        if summary.matches > 0 {
            summary.average_turns = total_turns as f64 / f64::from(summary.matches);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionStatus;
    use crate::rules::TerminationReason;
    use crate::simulation::{GreedyPolicy, PassivePolicy, RandomPolicy};

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new().with_seed(7).with_max_turns(3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_turns, 3);
    }

    #[test]
    fn test_greedy_beats_passive() {
        let mut runner = MatchRunner::new(
            Box::new(GreedyPolicy),
            Box::new(PassivePolicy),
            SimulationConfig::default(),
        );

        let report = runner.run(&SessionConfig::default(), Catalog::standard(), 1).unwrap();

        assert_eq!(report.outcome.winner, CombatantId::First);
        assert_eq!(report.session.status(), SessionStatus::Completed);
        assert_eq!(report.session.combatant(CombatantId::First).total_damage_dealt, report.outcome.stats[0].total_damage_dealt);
    }

    #[test]
    fn test_turn_limit_ends_match() {
        let mut runner = MatchRunner::new(
            Box::new(PassivePolicy),
            Box::new(PassivePolicy),
            SimulationConfig::default(),
        );

        let report = runner
            .run(&SessionConfig::default().with_turn_limit(3), Catalog::standard(), 0)
            .unwrap();

        assert_eq!(report.outcome.reason, TerminationReason::TurnLimit);
        assert_eq!(report.outcome.turns_played, 3);
        assert_eq!(report.outcome.winner, CombatantId::First);
    }

    #[test]
    fn test_max_turns_ends_unlimited_match() {
        let mut runner = MatchRunner::new(
            Box::new(PassivePolicy),
            Box::new(PassivePolicy),
            SimulationConfig::default().with_max_turns(4),
        );

        let report = runner
            .run(&SessionConfig::default().without_turn_limit(), Catalog::standard(), 0)
            .unwrap();

        assert_eq!(report.outcome.reason, TerminationReason::Ended);
        assert_eq!(report.session.turn_history().len(), 4);
    }

    #[test]
    fn test_series_is_reproducible() {
        let run = || {
            let mut runner = MatchRunner::new(
                Box::new(RandomPolicy),
                Box::new(RandomPolicy),
                SimulationConfig::default().with_seed(99),
            );
            runner.run_series(&SessionConfig::default(), Catalog::standard(), 10).unwrap()
        };

        let summary = run();
        assert_eq!(summary.matches, 10);
        assert_eq!(summary.wins[CombatantId::First] + summary.wins[CombatantId::Second], 10);
        assert_eq!(summary, run());
    }
}
