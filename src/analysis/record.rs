use serde::Serialize;
use std::fmt;

/// Lane/position the player was assigned in a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
    #[default]
    Unknown,
}

impl Role {
    /// Parses Riot's `teamPosition` / `lane` values.
    pub fn from_position(position: &str) -> Self {
        match position.trim().to_ascii_uppercase().as_str() {
            "TOP" => Role::Top,
            "JUNGLE" => Role::Jungle,
            "MIDDLE" | "MID" => Role::Middle,
            "BOTTOM" | "BOT" | "ADC" => Role::Bottom,
            "UTILITY" | "SUPPORT" => Role::Utility,
            _ => Role::Unknown,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Middle => "Mid",
            Role::Bottom => "Bot",
            Role::Utility => "Support",
            Role::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MultikillCounts {
    pub double: u32,
    pub triple: u32,
    pub quadra: u32,
    pub penta: u32,
}

impl MultikillCounts {
    pub fn total(&self) -> u32 {
        self.double + self.triple + self.quadra + self.penta
    }
}

/// One played game for the analyzed account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub champion: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub vision_score: u32,
    pub wards_placed: u32,
    pub creep_score: u32,
    pub gold_earned: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub multikills: MultikillCounts,
    pub first_blood: bool,
    pub solo_kills: u32,
    pub role: Role,
    pub game_duration_secs: u64,
}

impl MatchRecord {
    pub fn new(champion: impl Into<String>, win: bool) -> Self {
        MatchRecord {
            champion: champion.into(),
            win,
            kills: 0,
            deaths: 0,
            assists: 0,
            vision_score: 0,
            wards_placed: 0,
            creep_score: 0,
            gold_earned: 0,
            damage_dealt: 0,
            damage_taken: 0,
            multikills: MultikillCounts::default(),
            first_blood: false,
            solo_kills: 0,
            role: Role::Unknown,
            game_duration_secs: 0,
        }
    }

    pub fn takedowns(&self) -> u32 {
        self.kills + self.assists
    }

    pub fn has_multikill(&self) -> bool {
        self.multikills.total() > 0
    }

    /// Won despite dying more often than killing.
    pub fn is_comeback(&self) -> bool {
        self.win && self.deaths > self.kills
    }
}
