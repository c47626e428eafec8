// Riot API URL builders and region routing.

pub const ACCOUNT_HOST: &str = "americas";

/// Maps short region codes (`na`, `euw`, ...) to platform ids. Platform ids pass through.
pub fn platform_for(region: &str) -> String {
    let region = region.trim().to_ascii_lowercase();
    let platform = match region.as_str() {
        "na" => "na1",
        "euw" => "euw1",
        "eune" => "eun1",
        "kr" => "kr",
        "jp" => "jp1",
        "br" => "br1",
        "las" => "la2",
        "lan" => "la1",
        "oce" => "oc1",
        "tr" => "tr1",
        "ru" => "ru",
        other => return other.to_string(),
    };
    platform.to_string()
}

/// Regional routing value for match-v5 on a platform.
pub fn regional_routing(platform: &str) -> &'static str {
    match platform {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        _ => "americas",
    }
}

pub fn account_url(game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
        ACCOUNT_HOST, game_name, tag_line
    )
}

pub fn summoner_url(platform: &str, puuid: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
        platform, puuid
    )
}

pub fn match_ids_url(platform: &str, puuid: &str, count: usize, ranked_only: bool) -> String {
    let mut url = format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?count={}",
        regional_routing(platform),
        puuid,
        count
    );
    if ranked_only {
        url.push_str("&type=ranked");
    }
    url
}

pub fn match_url(platform: &str, match_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        regional_routing(platform),
        match_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("na", "na1", "americas")]
    #[case("EUW", "euw1", "europe")]
    #[case("eune", "eun1", "europe")]
    #[case("kr", "kr", "asia")]
    #[case("oce", "oc1", "sea")]
    #[case("las", "la2", "americas")]
    #[case("euw1", "euw1", "europe")]
    #[case("unknown", "unknown", "americas")]
    fn region_routing(#[case] region: &str, #[case] platform: &str, #[case] routing: &str) {
        assert_eq!(platform_for(region), platform);
        assert_eq!(regional_routing(&platform_for(region)), routing);
    }

    #[test]
    fn ranked_filter_is_optional() {
        assert!(match_ids_url("na1", "abc", 50, true).ends_with("count=50&type=ranked"));
        assert!(match_ids_url("na1", "abc", 50, false).ends_with("count=50"));
        assert!(match_url("kr", "KR_1").starts_with("https://asia."));
    }
}
