use crate::analysis::record::{MatchRecord, MultikillCounts, Role};
use serde::Deserialize;

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
}

// Summoner V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub summoner_level: i64,
}

// Match V5 response
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds since patch 11.20; older matches report milliseconds.
    pub game_duration: i64,
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengesDto {
    pub solo_kills: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_name: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub vision_score: u32,
    #[serde(default)]
    pub wards_placed: u32,
    #[serde(default)]
    pub gold_earned: u32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: u64,
    #[serde(default)]
    pub total_damage_taken: u64,
    #[serde(default)]
    pub double_kills: u32,
    #[serde(default)]
    pub triple_kills: u32,
    #[serde(default)]
    pub quadra_kills: u32,
    #[serde(default)]
    pub penta_kills: u32,
    #[serde(default)]
    pub first_blood_kill: bool,
    #[serde(default)]
    pub team_position: String, // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY
    #[serde(default)]
    pub lane: String,
    #[serde(default)]
    pub challenges: Option<ChallengesDto>,
}

impl ParticipantDto {
    /// Riot's solo-kill counter when present; otherwise counts a kill-heavy game as one.
    pub fn solo_kills(&self) -> u32 {
        self.challenges
            .as_ref()
            .and_then(|c| c.solo_kills)
            .unwrap_or(u32::from(self.kills > self.assists))
    }

    pub fn role(&self) -> Role {
        let position = if self.team_position.is_empty() {
            &self.lane
        } else {
            &self.team_position
        };
        Role::from_position(position)
    }
}

impl MatchInfo {
    pub fn duration_secs(&self) -> u64 {
        let raw = self.game_duration.max(0) as u64;
        if self.game_end_timestamp.is_none() {
            raw / 1000
        } else {
            raw
        }
    }
}

impl MatchDto {
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }

    /// The analyzed player's view of this match, if they played in it.
    pub fn record_for(&self, puuid: &str) -> Option<MatchRecord> {
        let p = self.participant(puuid)?;
        Some(MatchRecord {
            champion: p.champion_name.clone(),
            win: p.win,
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            vision_score: p.vision_score,
            wards_placed: p.wards_placed,
            creep_score: p.total_minions_killed + p.neutral_minions_killed,
            gold_earned: p.gold_earned,
            damage_dealt: p.total_damage_dealt_to_champions,
            damage_taken: p.total_damage_taken,
            multikills: MultikillCounts {
                double: p.double_kills,
                triple: p.triple_kills,
                quadra: p.quadra_kills,
                penta: p.penta_kills,
            },
            first_blood: p.first_blood_kill,
            solo_kills: p.solo_kills(),
            role: p.role(),
            game_duration_secs: self.info.duration_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCH_JSON: &str = r#"{
        "metadata": { "matchId": "NA1_1", "participants": ["me", "them"] },
        "info": {
            "gameDuration": 1800,
            "gameEndTimestamp": 1700000000000,
            "queueId": 420,
            "participants": [
                {
                    "puuid": "me", "championName": "Braum", "win": true,
                    "kills": 1, "deaths": 2, "assists": 18,
                    "totalMinionsKilled": 30, "neutralMinionsKilled": 4,
                    "visionScore": 70, "wardsPlaced": 22, "goldEarned": 8000,
                    "totalDamageDealtToChampions": 6000, "totalDamageTaken": 26000,
                    "doubleKills": 0, "firstBloodKill": false,
                    "teamPosition": "UTILITY", "lane": "BOTTOM",
                    "challenges": { "soloKills": 0, "kda": 9.5 }
                },
                {
                    "puuid": "them", "championName": "Zed", "win": false,
                    "kills": 9, "deaths": 3, "assists": 2
                }
            ]
        }
    }"#;

    #[test]
    fn converts_the_players_participant() {
        let dto: MatchDto = serde_json::from_str(MATCH_JSON).unwrap();
        let record = dto.record_for("me").unwrap();
        assert_eq!(record.champion, "Braum");
        assert_eq!(record.creep_score, 34);
        assert_eq!(record.role, Role::Utility);
        assert_eq!(record.game_duration_secs, 1800);
        assert_eq!(record.solo_kills, 0);
        assert!(dto.record_for("nobody").is_none());
    }

    #[test]
    fn solo_kills_fall_back_without_challenges() {
        let dto: MatchDto = serde_json::from_str(MATCH_JSON).unwrap();
        let zed = dto.record_for("them").unwrap();
        assert_eq!(zed.solo_kills, 1);
        assert_eq!(zed.role, Role::Unknown);
    }

    #[test]
    fn account_and_summoner_ignore_extra_fields() {
        let account: AccountDto = serde_json::from_str(
            r#"{"puuid": "abc", "gameName": "Heimer", "tagLine": "EUW"}"#,
        )
        .unwrap();
        assert_eq!(account.puuid, "abc");

        let summoner: SummonerDto = serde_json::from_str(
            r#"{"puuid": "abc", "summonerLevel": 312, "profileIconId": 7}"#,
        )
        .unwrap();
        assert_eq!(summoner.summoner_level, 312);
    }

    #[test]
    fn legacy_durations_are_milliseconds() {
        let info = MatchInfo {
            game_duration: 1_500_000,
            game_end_timestamp: None,
            participants: Vec::new(),
        };
        assert_eq!(info.duration_secs(), 1500);
    }
}
