pub mod aggregator;
pub mod catalog;
pub mod engine;
pub mod ranker;
pub mod record;
pub mod resonance;
pub mod traits;

pub use aggregator::{aggregate, AggregateStats, ChampionPlayCount, ChampionPlayCounts, StatAggregator};
pub use catalog::{ChampionCatalog, ChampionSlot, ChampionSlotDefinition};
pub use engine::{ResonanceEngine, ResonanceReport};
pub use ranker::{SpiritChampionResult, SpiritRanker};
pub use record::{MatchRecord, MultikillCounts, Role};
pub use resonance::{ChampionResonance, FilledSlot, PlayBonus, ResonanceMatcher};
pub use traits::{score_traits, Trait, TraitScore, UNLOCK_THRESHOLD};
