use super::record::{MatchRecord, Role};
use crate::error::{EngineError, EngineResult};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionPlayCount {
    pub name: String,
    pub games: u32,
    pub wins: u32,
}

impl ChampionPlayCount {
    pub fn new(name: String) -> Self {
        ChampionPlayCount {
            name,
            games: 0,
            wins: 0,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Share of the analyzed games, in percent.
    pub fn play_rate(&self, total_games: u32) -> f64 {
        play_rate(self.games, total_games)
    }
}

pub fn play_rate(games_played: u32, total_games: u32) -> f64 {
    if total_games == 0 {
        0.0
    } else {
        (games_played as f64 / total_games as f64) * 100.0
    }
}

/// Per-account accumulations over one analyzed match set.
///
/// Rates are per game unless the name says otherwise. `death_rate` and
/// `assist_rate` are deaths and assists per game; `kill_participation` is
/// takedowns (kills + assists) per game; `win_rate` is a percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total_games: u32,
    pub wins: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_cs: u64,
    pub total_gold: u64,
    pub total_vision_score: u64,
    pub total_wards_placed: u64,
    pub total_damage_dealt: u64,
    pub total_damage_taken: u64,
    pub total_minutes: f64,
    pub first_bloods: u32,
    pub solo_kills: u32,
    pub multikill_games: u32,
    pub total_multikills: u32,
    pub comeback_count: u32,
    pub champion_pool_size: u32,
    pub primary_role: Role,

    pub avg_kills: f64,
    pub death_rate: f64,
    pub assist_rate: f64,
    pub avg_cs: f64,
    pub avg_gold: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_taken: f64,
    pub avg_vision_score: f64,
    pub avg_wards_placed: f64,
    pub avg_game_minutes: f64,
    pub vision_per_minute: f64,
    pub win_rate: f64,
    pub kda: f64,
    pub kill_participation: f64,
    pub assist_ratio: f64,
    pub solo_kill_rate: f64,
    pub first_blood_rate: f64,
    pub multikill_rate: f64,
}

/// Play counts keyed by champion name, ordered by name.
pub type ChampionPlayCounts = BTreeMap<String, ChampionPlayCount>;

/// Accumulates match records one at a time, then derives the aggregate.
#[derive(Debug, Default)]
pub struct StatAggregator {
    totals: AggregateStats,
    champions: HashMap<String, ChampionPlayCount>,
    roles: HashMap<Role, u32>,
}

impl StatAggregator {
    pub fn new() -> Self {
        StatAggregator::default()
    }

    pub fn add_match(&mut self, record: &MatchRecord) {
        let t = &mut self.totals;
        t.total_games += 1;
        if record.win {
            t.wins += 1;
        }
        t.kills += record.kills;
        t.deaths += record.deaths;
        t.assists += record.assists;
        t.total_cs += record.creep_score as u64;
        t.total_gold += record.gold_earned as u64;
        t.total_vision_score += record.vision_score as u64;
        t.total_wards_placed += record.wards_placed as u64;
        t.total_damage_dealt += record.damage_dealt;
        t.total_damage_taken += record.damage_taken;
        t.total_minutes += record.game_duration_secs as f64 / 60.0;
        t.solo_kills += record.solo_kills;
        t.total_multikills += record.multikills.total();
        if record.first_blood {
            t.first_bloods += 1;
        }
        if record.has_multikill() {
            t.multikill_games += 1;
        }
        if record.is_comeback() {
            t.comeback_count += 1;
        }

        let entry = self
            .champions
            .entry(record.champion.clone())
            .or_insert_with(|| ChampionPlayCount::new(record.champion.clone()));
        entry.games += 1;
        if record.win {
            entry.wins += 1;
        }

        *self.roles.entry(record.role).or_insert(0) += 1;
    }

    pub fn get_champion(&self, name: &str) -> Option<ChampionPlayCount> {
        self.champions.get(name).cloned()
    }

    /// Derives averages and rates. Fails with `InsufficientData` when no match was added.
    pub fn finish(self) -> EngineResult<(AggregateStats, ChampionPlayCounts)> {
        let mut stats = self.totals;
        if stats.total_games == 0 {
            return Err(EngineError::InsufficientData);
        }

        let games = stats.total_games as f64;
        stats.avg_kills = stats.kills as f64 / games;
        stats.death_rate = stats.deaths as f64 / games;
        stats.assist_rate = stats.assists as f64 / games;
        stats.avg_cs = stats.total_cs as f64 / games;
        stats.avg_gold = stats.total_gold as f64 / games;
        stats.avg_damage_dealt = stats.total_damage_dealt as f64 / games;
        stats.avg_damage_taken = stats.total_damage_taken as f64 / games;
        stats.avg_vision_score = stats.total_vision_score as f64 / games;
        stats.avg_wards_placed = stats.total_wards_placed as f64 / games;
        stats.avg_game_minutes = stats.total_minutes / games;
        stats.vision_per_minute = if stats.total_minutes > 0.0 {
            stats.total_vision_score as f64 / stats.total_minutes
        } else {
            0.0
        };
        stats.win_rate = stats.wins as f64 / games * 100.0;
        stats.kda = (stats.kills + stats.assists) as f64 / stats.deaths.max(1) as f64;
        stats.kill_participation = (stats.kills + stats.assists) as f64 / games;
        stats.assist_ratio = stats.assist_rate / stats.avg_kills.max(1.0);
        stats.solo_kill_rate = stats.solo_kills as f64 / games;
        stats.first_blood_rate = stats.first_bloods as f64 / games;
        stats.multikill_rate = stats.multikill_games as f64 / games;
        stats.champion_pool_size = self.champions.len() as u32;

        // Most games wins; ties go to the earlier lane in enum order.
        stats.primary_role = self
            .roles
            .iter()
            .max_by(|(ra, ca), (rb, cb)| ca.cmp(cb).then_with(|| rb.cmp(ra)))
            .map(|(role, _)| *role)
            .unwrap_or_default();

        let champions = self.champions.into_iter().collect();
        Ok((stats, champions))
    }
}

/// Reduces a match set into aggregate stats plus per-champion play counts.
pub fn aggregate(matches: &[MatchRecord]) -> EngineResult<(AggregateStats, ChampionPlayCounts)> {
    let mut aggregator = StatAggregator::new();
    for record in matches {
        aggregator.add_match(record);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(champion: &str, win: bool, k: u32, d: u32, a: u32) -> MatchRecord {
        let mut record = MatchRecord::new(champion, win);
        record.kills = k;
        record.deaths = d;
        record.assists = a;
        record.game_duration_secs = 30 * 60;
        record
    }

    #[test]
    fn empty_input_is_insufficient_data() {
        assert_eq!(aggregate(&[]), Err(EngineError::InsufficientData));
    }

    #[test]
    fn rates_are_per_game() {
        let mut first = game("Ahri", true, 6, 2, 8);
        first.vision_score = 30;
        first.role = Role::Middle;
        let mut second = game("Ahri", false, 2, 4, 4);
        second.vision_score = 30;
        second.role = Role::Middle;
        let third = game("Lux", true, 1, 6, 12);

        let (stats, champions) = aggregate(&[first, second, third]).unwrap();

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 2);
        assert!((stats.win_rate - 66.666).abs() < 0.01);
        assert!((stats.avg_kills - 3.0).abs() < 1e-9);
        assert!((stats.death_rate - 4.0).abs() < 1e-9);
        assert!((stats.kda - 33.0 / 12.0).abs() < 1e-9);
        assert!((stats.kill_participation - 11.0).abs() < 1e-9);
        assert!((stats.vision_per_minute - 60.0 / 90.0).abs() < 1e-9);
        assert_eq!(stats.champion_pool_size, 2);
        assert_eq!(stats.primary_role, Role::Middle);
        // Lux game: won with 6 deaths against 1 kill.
        assert_eq!(stats.comeback_count, 1);

        assert_eq!(champions["Ahri"].games, 2);
        assert_eq!(champions["Ahri"].wins, 1);
        assert!((champions["Lux"].play_rate(3) - 33.333).abs() < 0.01);
    }

    #[test]
    fn deathless_games_divide_kda_by_one() {
        let (stats, _) = aggregate(&[game("Janna", true, 1, 0, 20)]).unwrap();
        assert!((stats.kda - 21.0).abs() < 1e-9);
    }

    #[test]
    fn missing_durations_leave_vision_per_minute_at_zero() {
        let mut record = game("Braum", true, 0, 1, 10);
        record.game_duration_secs = 0;
        record.vision_score = 50;
        let (stats, _) = aggregate(&[record]).unwrap();
        assert_eq!(stats.vision_per_minute, 0.0);
        assert!((stats.avg_vision_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn play_rate_handles_zero_total() {
        assert_eq!(play_rate(3, 0), 0.0);
        assert!((play_rate(5, 20) - 25.0).abs() < 1e-9);
    }
}
