use crate::error::AppError;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::debug;

use super::endpoints;
use super::models::*;

const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => panic!("request quota must be non-zero"),
};

/// Upper bound Riot accepts for one match-id page.
pub const MAX_MATCH_IDS: usize = 100;

pub struct RiotApiClient {
    api_key: String,
    platform: String,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(api_key: impl Into<String>, region: &str) -> Self {
        RiotApiClient {
            api_key: api_key.into(),
            platform: endpoints::platform_for(region),
            rate_limiter: RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND)),
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    fn wait_for_quota(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(25));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        self.wait_for_quota();
        debug!("GET {}", url);

        let response = ureq::get(url)
            .set("User-Agent", concat!("runic_resonance/", env!("CARGO_PKG_VERSION")))
            .set("X-Riot-Token", &self.api_key)
            .call();

        match response {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string())),
            Err(ureq::Error::Status(429, _)) => Err(AppError::RateLimited),
            Err(ureq::Error::Status(404, _)) => Err(AppError::NotFound(strip_query(url))),
            Err(ureq::Error::Status(code, resp)) => Err(AppError::ApiError(format!(
                "{} returned {} {}",
                strip_query(url),
                code,
                resp.status_text()
            ))),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let body = self.execute_request(url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        let url = endpoints::account_url(game_name, tag_line);
        match self.get_json(&url) {
            Err(AppError::NotFound(_)) => Err(
                AppError::PlayerNotFound(format!("{}#{}", game_name, tag_line)),
            ),
            other => other,
        }
    }

    pub fn get_summoner(&self, puuid: &str) -> Result<SummonerDto, AppError> {
        self.get_json(&endpoints::summoner_url(&self.platform, puuid))
    }

    pub fn get_match_ids(
        &self,
        puuid: &str,
        count: usize,
        ranked_only: bool,
    ) -> Result<Vec<String>, AppError> {
        let count = count.min(MAX_MATCH_IDS);
        self.get_json(&endpoints::match_ids_url(
            &self.platform,
            puuid,
            count,
            ranked_only,
        ))
    }

    pub fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        self.get_json(&endpoints::match_url(&self.platform, match_id))
    }
}

fn strip_query(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_shortcut_resolves_to_platform() {
        let client = RiotApiClient::new("RGAPI-test", "euw");
        assert_eq!(client.platform(), "euw1");
    }

    #[test]
    fn query_string_is_not_echoed() {
        assert_eq!(
            strip_query("https://x/ids?count=5&type=ranked"),
            "https://x/ids"
        );
    }

    #[test]
    fn quota_allows_a_burst_without_waiting() {
        let client = RiotApiClient::new("RGAPI-test", "na1");
        for _ in 0..REQUESTS_PER_SECOND.get() {
            assert!(client.rate_limiter.check().is_ok());
        }
    }
}
