#![allow(dead_code)]

use runic_resonance::analysis::{MatchRecord, MultikillCounts, Role};

/// Builder for MatchRecord to keep scenarios readable.
pub struct MatchBuilder {
    record: MatchRecord,
}

impl MatchBuilder {
    pub fn new(champion: &str) -> Self {
        let mut record = MatchRecord::new(champion, true);
        record.game_duration_secs = 30 * 60;
        record.creep_score = 150;
        record.gold_earned = 9_000;
        record.damage_taken = 15_000;
        record.vision_score = 25;
        record.wards_placed = 8;
        MatchBuilder { record }
    }

    pub fn win(mut self, win: bool) -> Self {
        self.record.win = win;
        self
    }

    pub fn kda(mut self, kills: u32, deaths: u32, assists: u32) -> Self {
        self.record.kills = kills;
        self.record.deaths = deaths;
        self.record.assists = assists;
        self
    }

    pub fn vision(mut self, vision_score: u32, wards_placed: u32) -> Self {
        self.record.vision_score = vision_score;
        self.record.wards_placed = wards_placed;
        self
    }

    pub fn farm(mut self, creep_score: u32, gold: u32) -> Self {
        self.record.creep_score = creep_score;
        self.record.gold_earned = gold;
        self
    }

    pub fn damage_taken(mut self, damage: u64) -> Self {
        self.record.damage_taken = damage;
        self
    }

    pub fn doubles(mut self, count: u32) -> Self {
        self.record.multikills = MultikillCounts {
            double: count,
            ..MultikillCounts::default()
        };
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.record.role = role;
        self
    }

    pub fn build(self) -> MatchRecord {
        self.record
    }
}

/// A support game: few kills, lots of assists, heavy vision and soak.
pub fn support_game(champion: &str) -> MatchRecord {
    MatchBuilder::new(champion)
        .kda(1, 2, 18)
        .vision(80, 25)
        .farm(40, 9_000)
        .damage_taken(30_000)
        .role(Role::Utility)
        .build()
}

/// A miserable loss that unlocks nothing.
pub fn feeding_game(champion: &str) -> MatchRecord {
    MatchBuilder::new(champion)
        .win(false)
        .kda(0, 10, 0)
        .vision(5, 1)
        .farm(60, 5_000)
        .damage_taken(12_000)
        .build()
}
