use super::aggregator::{play_rate, ChampionPlayCounts};
use super::catalog::{ChampionCatalog, ChampionSlotDefinition};
use super::traits::{Trait, TraitScore, MAX_SCORE, UNLOCK_THRESHOLD};
use crate::error::{EngineError, EngineResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Lower bound of `resonance_strength` per number of filled slots.
pub const SLOT_BAND_FLOORS: [f64; 4] = [0.0, 10.0, 40.0, 70.0];

/// Upper bound of `resonance_strength` per number of filled slots.
///
/// Bands never overlap, so 1 slot lands in 10-33, 2 slots in 40-67 and
/// 3 slots in 70-100.
pub const SLOT_BAND_CEILINGS: [f64; 4] = [0.0, 100.0 / 3.0, 200.0 / 3.0, 100.0];

/// Share of each band reserved for play rate. Trait quality fills the rest,
/// so a perfectly matched champion nobody played tops out halfway up its band.
pub const PLAY_SHARE: f64 = 0.5;

pub const MAX_RESONANCE: f64 = 100.0;

/// Play-rate thresholds (percent) for the play bonus tags.
pub const HIGH_PLAY_RATE: f64 = 25.0;
pub const MODERATE_PLAY_RATE: f64 = 15.0;
pub const LOW_PLAY_RATE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayBonus {
    None,
    Played,
    Low,
    Moderate,
    High,
}

impl PlayBonus {
    pub fn from_play(games_played: u32, play_rate: f64) -> Self {
        if games_played == 0 {
            PlayBonus::None
        } else if play_rate >= HIGH_PLAY_RATE {
            PlayBonus::High
        } else if play_rate >= MODERATE_PLAY_RATE {
            PlayBonus::Moderate
        } else if play_rate >= LOW_PLAY_RATE {
            PlayBonus::Low
        } else {
            PlayBonus::Played
        }
    }
}

impl fmt::Display for PlayBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayBonus::None => "None",
            PlayBonus::Played => "Played",
            PlayBonus::Low => "Low",
            PlayBonus::Moderate => "Moderate",
            PlayBonus::High => "High",
        };
        f.write_str(label)
    }
}

/// A filled slot: the player's trait score plus this champion's slot lore.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilledSlot {
    #[serde(flatten)]
    pub trait_score: TraitScore,
    pub slot_lore: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionResonance {
    pub champion: String,
    pub slots_filled: u8,
    pub trait_details: Vec<FilledSlot>,
    pub resonance_strength: f64,
    pub games_played: u32,
    pub play_rate: f64,
    pub play_bonus: PlayBonus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

impl ChampionResonance {
    pub fn matching_traits(&self) -> Vec<Trait> {
        self.trait_details
            .iter()
            .map(|slot| slot.trait_score.trait_id)
            .collect()
    }

    pub fn is_perfect(&self) -> bool {
        self.slots_filled == 3
    }

    /// Matched on playstyle alone, with no games on the champion.
    pub fn is_playstyle_match(&self) -> bool {
        self.games_played == 0
    }
}

fn band(slots_filled: usize) -> (f64, f64) {
    let slots = slots_filled.min(SLOT_BAND_CEILINGS.len() - 1);
    (SLOT_BAND_FLOORS[slots], SLOT_BAND_CEILINGS[slots])
}

/// Mean filled score rescaled so the unlock threshold is 0 and a perfect 10 is 1.
pub fn match_quality(filled_scores: &[u8]) -> f64 {
    if filled_scores.is_empty() {
        return 0.0;
    }
    let mean = filled_scores.iter().map(|&s| s as f64).sum::<f64>() / filled_scores.len() as f64;
    let span = (MAX_SCORE - UNLOCK_THRESHOLD) as f64;
    ((mean - UNLOCK_THRESHOLD as f64) / span).clamp(0.0, 1.0)
}

/// Strength from trait quality alone, before any play rate.
pub fn base_strength(filled_scores: &[u8]) -> f64 {
    let (floor, ceiling) = band(filled_scores.len());
    floor + (ceiling - floor) * (1.0 - PLAY_SHARE) * match_quality(filled_scores)
}

/// Base strength plus the band's play share scaled by `play_rate` (percent).
pub fn resonance_strength(filled_scores: &[u8], play_rate: f64) -> f64 {
    let (floor, ceiling) = band(filled_scores.len());
    let play = (play_rate / 100.0).clamp(0.0, 1.0);
    let bonus = (ceiling - floor) * PLAY_SHARE * play;
    (base_strength(filled_scores) + bonus).clamp(0.0, MAX_RESONANCE)
}

pub struct ResonanceMatcher<'a> {
    scores: HashMap<Trait, &'a TraitScore>,
    play_counts: &'a ChampionPlayCounts,
    total_games: u32,
}

impl<'a> ResonanceMatcher<'a> {
    pub fn new(
        traits: &'a [TraitScore],
        play_counts: &'a ChampionPlayCounts,
        total_games: u32,
    ) -> Self {
        let scores = traits.iter().map(|t| (t.trait_id, t)).collect();
        ResonanceMatcher {
            scores,
            play_counts,
            total_games,
        }
    }

    pub fn score_champion(
        &self,
        definition: &ChampionSlotDefinition,
    ) -> EngineResult<ChampionResonance> {
        let mut trait_details = Vec::new();
        for slot in &definition.slots {
            let score = self.scores.get(&slot.trait_id).ok_or_else(|| {
                EngineError::CatalogIntegrity {
                    champion: definition.name.clone(),
                    reason: format!("trait '{}' has no score", slot.trait_id),
                }
            })?;
            if score.is_unlocked() {
                trait_details.push(FilledSlot {
                    trait_score: (*score).clone(),
                    slot_lore: slot.lore.clone(),
                });
            }
        }

        let filled: Vec<u8> = trait_details.iter().map(|s| s.trait_score.score).collect();
        let games_played = self
            .play_counts
            .get(&definition.name)
            .map(|c| c.games)
            .unwrap_or(0);
        let play_rate = play_rate(games_played, self.total_games);

        Ok(ChampionResonance {
            champion: definition.name.clone(),
            slots_filled: trait_details.len() as u8,
            resonance_strength: resonance_strength(&filled, play_rate),
            trait_details,
            games_played,
            play_rate,
            play_bonus: PlayBonus::from_play(games_played, play_rate),
            rank: None,
        })
    }

    /// Scores every catalog champion, in catalog order.
    pub fn score_catalog(&self, catalog: &ChampionCatalog) -> EngineResult<Vec<ChampionResonance>> {
        catalog.iter().map(|def| self.score_champion(def)).collect()
    }
}
