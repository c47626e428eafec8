use super::aggregator::AggregateStats;
use crate::error::{EngineError, EngineResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// A score at or above this unlocks the champion slot bound to the trait.
pub const UNLOCK_THRESHOLD: u8 = 7;

/// The ten personality dimensions, in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trait {
    Protector,
    Tactician,
    Disciplined,
    Fearless,
    Resilient,
    Wanderer,
    Adaptive,
    Enlightened,
    Relentless,
    Healer,
}

type ScoringFn = fn(&AggregateStats) -> f64;

impl Trait {
    pub const ALL: [Trait; 10] = [
        Trait::Protector,
        Trait::Tactician,
        Trait::Disciplined,
        Trait::Fearless,
        Trait::Resilient,
        Trait::Wanderer,
        Trait::Adaptive,
        Trait::Enlightened,
        Trait::Relentless,
        Trait::Healer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Trait::Protector => "The Protector",
            Trait::Tactician => "The Tactician",
            Trait::Disciplined => "The Disciplined",
            Trait::Fearless => "The Fearless",
            Trait::Resilient => "The Resilient",
            Trait::Wanderer => "The Wanderer",
            Trait::Adaptive => "The Adaptive",
            Trait::Enlightened => "The Enlightened",
            Trait::Relentless => "The Relentless",
            Trait::Healer => "The Healer",
        }
    }

    /// Name without the article, e.g. `Protector`.
    pub fn id(self) -> &'static str {
        &self.name()[4..]
    }

    pub fn description(self) -> &'static str {
        match self {
            Trait::Protector => "Shield-bearer of allies, standing guard against the darkness",
            Trait::Tactician => "Master strategist who sees the battlefield's hidden patterns",
            Trait::Disciplined => "Unwavering dedication to perfecting your craft through endless practice",
            Trait::Fearless => "Warrior who charges into battle without hesitation or doubt",
            Trait::Resilient => "Indomitable spirit that endures through the harshest trials",
            Trait::Wanderer => "Lone traveler following their own path across the Rift",
            Trait::Adaptive => "Shapeshifter who thrives by embracing change and variety",
            Trait::Enlightened => "Seeker of perfect balance between aggression and restraint",
            Trait::Relentless => "Unstoppable force bound by singular purpose and determination",
            Trait::Healer => "Guardian spirit who mends wounds and lifts fallen allies",
        }
    }

    pub fn lore(self) -> &'static str {
        match self {
            Trait::Protector => "Like Braum with his unbreakable shield, you stand between danger and your companions",
            Trait::Tactician => "Like Swain's ravens, your sight stretches across Runeterra and reads every move before it lands",
            Trait::Disciplined => "Like Garen's devotion to Demacia, your discipline never wavers",
            Trait::Fearless => "Like Leona under the midday sun, you meet every fight head on",
            Trait::Resilient => "Like Sion, who would not stay dead, you get back up every time",
            Trait::Wanderer => "Like Yasuo on the road to redemption, you choose your own path",
            Trait::Adaptive => "Like Neeko who can become anyone, you wear every form with ease",
            Trait::Enlightened => "Like Karma weighing every action, you find harmony through restraint",
            Trait::Relentless => "Like Viego's endless pursuit, you never rest until the Nexus falls",
            Trait::Healer => "Like Soraka giving of herself, you keep your allies standing",
        }
    }

    pub fn data_source(self) -> &'static str {
        match self {
            Trait::Protector => "Based on: Assists per game (10+ is good), Damage taken (20k+ is good)",
            Trait::Tactician => "Based on: Vision score per minute (1.35+ is good), Wards placed (12+ is good)",
            Trait::Disciplined => "Based on: CS per game (190+ is good), Gold earned (11k+ is good)",
            Trait::Fearless => "Based on: Takedowns per game (12+ is good), First blood rate",
            Trait::Resilient => "Based on: Low death rate (under 4.5), Win rate (55%+), Comeback wins",
            Trait::Wanderer => "Based on: Solo kills per game, Kill-focused playstyle",
            Trait::Adaptive => "Based on: Champion pool size (5+ champs is good)",
            Trait::Enlightened => "Based on: KDA ratio (3.5+ is good), Win rate (55%+ is good)",
            Trait::Relentless => "Based on: Takedowns per game (15+ is good), Multikill frequency",
            Trait::Healer => "Based on: Assist/Kill ratio (high assists), Team-enabling plays",
        }
    }

    /// The formula for this trait. Raw output is unclamped.
    pub fn scorer(self) -> ScoringFn {
        match self {
            Trait::Protector => formulas::protector,
            Trait::Tactician => formulas::tactician,
            Trait::Disciplined => formulas::disciplined,
            Trait::Fearless => formulas::fearless,
            Trait::Resilient => formulas::resilient,
            Trait::Wanderer => formulas::wanderer,
            Trait::Adaptive => formulas::adaptive,
            Trait::Enlightened => formulas::enlightened,
            Trait::Relentless => formulas::relentless,
            Trait::Healer => formulas::healer,
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trait {
    type Err = String;

    /// Accepts "The Protector", "protector", "PROTECTOR".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let bare = wanted.strip_prefix("the ").unwrap_or(&wanted);
        Trait::ALL
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(bare))
            .ok_or_else(|| format!("unknown trait '{}'", s.trim()))
    }
}

impl Serialize for Trait {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Scoring formulas. Each is monotonic in the statistic it is named for.
pub mod formulas {
    use super::AggregateStats;

    /// Assists per game (70%) and damage soaked (30%).
    pub fn protector(stats: &AggregateStats) -> f64 {
        // 6 assists = 5pts, 10 = 7pts, 16 = 10pts
        let assist_score = 5.0 + (stats.assist_rate - 6.0) / 2.0;
        // 15k = 5pts, 20k = 6pts, 30k = 8pts
        let tank_score = 5.0 + (stats.avg_damage_taken / 1000.0 - 15.0) / 5.0;
        assist_score * 0.7 + tank_score * 0.3
    }

    /// Vision score per minute (60%) and wards placed (40%).
    pub fn tactician(stats: &AggregateStats) -> f64 {
        // 0.85/min = 5pts, 1.35 = 7pts, 2.1 = 10pts
        let vision_score = 5.0 + (stats.vision_per_minute - 0.85) * 4.0;
        // 8 wards = 5pts, 12 = 6.3pts, 20 = 9pts
        let ward_score = 5.0 + (stats.avg_wards_placed - 8.0) / 3.0;
        vision_score * 0.6 + ward_score * 0.4
    }

    /// Creep score (70%) and gold (30%).
    pub fn disciplined(stats: &AggregateStats) -> f64 {
        // 150cs = 5pts, 190 = 7pts, 250 = 10pts
        let cs_score = 5.0 + (stats.avg_cs - 150.0) / 20.0;
        // 9k = 5pts, 11k = 7.5pts
        let gold_score = 5.0 + (stats.avg_gold - 9000.0) / 800.0;
        cs_score * 0.7 + gold_score * 0.3
    }

    /// Takedowns per game plus first-blood frequency.
    pub fn fearless(stats: &AggregateStats) -> f64 {
        stats.kill_participation / 2.0 + stats.first_blood_rate * 10.0
    }

    /// Staying alive (60%), winning (30%) and clawing back lost games (10%).
    pub fn resilient(stats: &AggregateStats) -> f64 {
        let low_death_score = 10.0 - stats.death_rate * 0.8;
        let win_score = stats.win_rate / 10.0;
        let comeback_rate = if stats.total_games > 0 {
            stats.comeback_count as f64 / stats.total_games as f64
        } else {
            0.0
        };
        let comeback_score = 5.0 + comeback_rate * 10.0;
        low_death_score * 0.6 + win_score * 0.3 + comeback_score * 0.1
    }

    /// Solo kills per game and how much the player kills rather than assists.
    pub fn wanderer(stats: &AggregateStats) -> f64 {
        let kill_focus = stats.avg_kills / stats.assist_rate.max(1.0);
        stats.solo_kill_rate * 5.0 + kill_focus * 2.0
    }

    /// 1 champ = 1pt, 3 = 3.6pts, 5 = 6.2pts, 6 = 7.5pts, 8+ = 10pts.
    pub fn adaptive(stats: &AggregateStats) -> f64 {
        if stats.champion_pool_size <= 1 {
            1.0
        } else {
            1.0 + (stats.champion_pool_size - 1) as f64 * 1.3
        }
    }

    /// KDA (60%) and win rate (40%).
    ///
    /// 2.0 KDA at 50% is a 5, 3.5 KDA at 55% unlocks the slot.
    pub fn enlightened(stats: &AggregateStats) -> f64 {
        let kda_score = 5.0 + (stats.kda - 2.0) * 2.0;
        let win_score = 5.0 + (stats.win_rate - 50.0) / 5.0;
        kda_score * 0.6 + win_score * 0.4
    }

    /// Takedowns per game (15 per game = 10pts) plus multikill frequency.
    pub fn relentless(stats: &AggregateStats) -> f64 {
        stats.kill_participation / 15.0 * 10.0 + stats.multikill_rate * 5.0
    }

    /// Assist-to-kill ratio, topped up by raw assist volume.
    pub fn healer(stats: &AggregateStats) -> f64 {
        stats.assist_ratio * 3.0 + stats.assist_rate / 6.0
    }
}

/// Saturates a raw formula value into the score range. NaN maps to the floor.
pub fn normalize_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return MIN_SCORE;
    }
    raw.clamp(MIN_SCORE as f64, MAX_SCORE as f64).round() as u8
}

/// One scored trait with its display texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitScore {
    #[serde(rename = "name")]
    pub trait_id: Trait,
    pub score: u8,
    pub description: &'static str,
    pub lore: &'static str,
    pub data_source: &'static str,
}

impl TraitScore {
    pub fn new(trait_id: Trait, score: i64) -> EngineResult<Self> {
        if score < MIN_SCORE as i64 || score > MAX_SCORE as i64 {
            return Err(EngineError::ScoreOutOfRange {
                trait_name: trait_id.name().to_string(),
                score,
            });
        }
        Ok(TraitScore {
            trait_id,
            score: score as u8,
            description: trait_id.description(),
            lore: trait_id.lore(),
            data_source: trait_id.data_source(),
        })
    }

    pub fn is_unlocked(&self) -> bool {
        self.score >= UNLOCK_THRESHOLD
    }
}

/// Scores a single trait against the aggregate.
pub fn score_trait(trait_id: Trait, stats: &AggregateStats) -> EngineResult<TraitScore> {
    let raw = (trait_id.scorer())(stats);
    let score = normalize_score(raw);
    debug!("{}: raw {:.2} -> {}", trait_id, raw, score);
    TraitScore::new(trait_id, score as i64)
}

/// Scores all ten traits, in `Trait::ALL` order.
pub fn score_traits(stats: &AggregateStats) -> EngineResult<Vec<TraitScore>> {
    Trait::ALL
        .iter()
        .map(|&trait_id| score_trait(trait_id, stats))
        .collect()
}
