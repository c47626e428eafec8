use super::resonance::ChampionResonance;
use crate::error::{EngineError, EngineResult};
use serde::Serialize;
use std::cmp::Ordering;

/// Runner-ups reported alongside the primary unless configured otherwise.
pub const DEFAULT_RUNNER_UPS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiritChampionResult {
    pub primary: ChampionResonance,
    pub runner_ups: Vec<ChampionResonance>,
}

/// Descending ranking order: slots filled, strength, games played, then name ascending.
pub fn ranking_order(a: &ChampionResonance, b: &ChampionResonance) -> Ordering {
    b.slots_filled
        .cmp(&a.slots_filled)
        .then_with(|| b.resonance_strength.total_cmp(&a.resonance_strength))
        .then_with(|| b.games_played.cmp(&a.games_played))
        .then_with(|| a.champion.cmp(&b.champion))
}

pub struct SpiritRanker;

impl SpiritRanker {
    /// Ranks all scored champions and keeps the top one plus `runner_ups` more.
    pub fn select(
        mut resonances: Vec<ChampionResonance>,
        runner_ups: usize,
    ) -> EngineResult<SpiritChampionResult> {
        resonances.sort_by(ranking_order);

        let mut ranked = resonances.into_iter();
        let mut primary = ranked.next().ok_or_else(|| EngineError::CatalogIntegrity {
            champion: "<catalog>".to_string(),
            reason: "catalog has no champions".to_string(),
        })?;
        primary.rank = None;

        let runner_ups = ranked
            .take(runner_ups)
            .enumerate()
            .map(|(idx, mut resonance)| {
                resonance.rank = Some(idx + 1);
                resonance
            })
            .collect();

        Ok(SpiritChampionResult {
            primary,
            runner_ups,
        })
    }
}
