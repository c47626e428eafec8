use super::aggregator::{aggregate, AggregateStats, ChampionPlayCounts};
use super::catalog::ChampionCatalog;
use super::ranker::{SpiritChampionResult, SpiritRanker, DEFAULT_RUNNER_UPS};
use super::record::MatchRecord;
use super::resonance::ResonanceMatcher;
use super::traits::{score_traits, TraitScore};
use crate::error::EngineResult;
use serde::Serialize;
use tracing::info;

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceReport {
    pub games_analyzed: u32,
    pub stats: AggregateStats,
    pub traits: Vec<TraitScore>,
    pub champions_played: ChampionPlayCounts,
    pub spirit_champion: SpiritChampionResult,
}

impl ResonanceReport {
    /// The `n` highest trait scores; ties keep reporting order.
    pub fn top_traits(&self, n: usize) -> Vec<&TraitScore> {
        let mut sorted: Vec<&TraitScore> = self.traits.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }
}

/// Pure pipeline from match records to a spirit champion result.
///
/// Holds only a borrowed, immutable catalog, so one engine can serve any
/// number of independent analyses.
pub struct ResonanceEngine<'a> {
    catalog: &'a ChampionCatalog,
    runner_ups: usize,
}

impl<'a> ResonanceEngine<'a> {
    pub fn new(catalog: &'a ChampionCatalog) -> Self {
        ResonanceEngine {
            catalog,
            runner_ups: DEFAULT_RUNNER_UPS,
        }
    }

    pub fn with_runner_ups(mut self, runner_ups: usize) -> Self {
        self.runner_ups = runner_ups;
        self
    }

    pub fn catalog(&self) -> &ChampionCatalog {
        self.catalog
    }

    pub fn analyze(&self, matches: &[MatchRecord]) -> EngineResult<ResonanceReport> {
        let (stats, champions_played) = aggregate(matches)?;
        let traits = score_traits(&stats)?;

        let matcher = ResonanceMatcher::new(&traits, &champions_played, stats.total_games);
        let resonances = matcher.score_catalog(self.catalog)?;
        let spirit_champion = SpiritRanker::select(resonances, self.runner_ups)?;

        info!(
            "Spirit champion: {} ({:.0}% resonance, {}/3 slots) from {} games",
            spirit_champion.primary.champion,
            spirit_champion.primary.resonance_strength,
            spirit_champion.primary.slots_filled,
            stats.total_games
        );

        Ok(ResonanceReport {
            games_analyzed: stats.total_games,
            stats,
            traits,
            champions_played,
            spirit_champion,
        })
    }
}
