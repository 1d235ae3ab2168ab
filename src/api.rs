//! Synchronous client for the **Codeforces API**.
//!
//! Two read-only, unauthenticated methods are used:
//! - `user.ratedList` (every user who took part in a rated contest)
//! - `contest.standings` (ranked rows of one contest)
//!
//! ### Notes
//! - Every answer is wrapped in `{"status": "OK"|"FAILED", "comment", "result"}`.
//!   A `FAILED` envelope becomes [`Error::Api`] carrying the comment, even when it
//!   arrives with an HTTP 400.
//! - Standings are requested in a single oversized page; there is no pagination and no
//!   retry.
//!
//! Typical usage:
//! ```no_run
//! # use cf_contest_stats::{Client, StandingsScope};
//! let client = Client::default();
//! let standings = client.contest_standings(1552, StandingsScope::OfficialContestants)?;
//! println!("{} rows", standings.rows.len());
//! # Ok::<(), cf_contest_stats::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::models::{ApiResponse, Standings, User};
use log::{debug, info};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://codeforces.com/api";

/// Page size used to pull a whole standings table in one request.
pub const FULL_STANDINGS_COUNT: u32 = 1_000_000;

/// Which participants a standings request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingsScope {
    /// Every row, unofficial participants included, in one oversized page.
    All,
    /// Official contestants only (`participantTypes=CONTESTANT`).
    OfficialContestants,
}

impl StandingsScope {
    fn to_query(self) -> String {
        match self {
            StandingsScope::All => {
                format!("showUnofficial=true&count={}", FULL_STANDINGS_COUNT)
            }
            StandingsScope::OfficialContestants => {
                "showUnofficial=false&participantTypes=CONTESTANT".to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("reqwest client build")
    }
}

impl Client {
    /// Build a client for the API rooted at `base_url` (e.g. `https://codeforces.com/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(300)) // the rated list is tens of MB
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("cf-contest-stats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| Error::Http {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetch the rated-user list.
    ///
    /// ### Arguments
    /// - `active_only`: only users who took part in a rated contest recently.
    /// - `include_retired`: also return users who have not been online for a long time.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - JSON decoding error
    /// - API-level `FAILED` status
    pub fn rated_users(&self, active_only: bool, include_retired: bool) -> Result<Vec<User>> {
        let url = format!(
            "{}/user.ratedList?activeOnly={}&includeRetired={}",
            self.base_url, active_only, include_retired
        );
        let users: Vec<User> = self.get(&url)?;
        info!("fetched {} rated users", users.len());
        Ok(users)
    }

    /// Fetch the standings of `contest_id` for the given participant scope.
    pub fn contest_standings(&self, contest_id: u32, scope: StandingsScope) -> Result<Standings> {
        let url = format!(
            "{}/contest.standings?contestId={}&{}",
            self.base_url,
            contest_id,
            scope.to_query()
        );
        let standings: Standings = self.get(&url)?;
        info!(
            "fetched {} standings rows and {} problems for contest {}",
            standings.rows.len(),
            standings.problems.len(),
            contest_id
        );
        Ok(standings)
    }

    fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let http_err = |source: reqwest::Error| Error::Http {
            url: url.to_string(),
            source,
        };
        let resp = self.http.get(url).send().map_err(http_err)?;
        let status = resp.status();
        let body = resp.text().map_err(http_err)?;
        debug!("{} -> HTTP {} ({} bytes)", url, status, body.len());
        parse_response(url, status, &body)
    }
}

/// Decode an API answer given its HTTP status and raw body.
///
/// A `FAILED` envelope wins over the HTTP status so that the API's comment reaches the
/// user; a non-2xx answer without a usable envelope is reported as [`Error::HttpStatus`].
pub fn parse_response<T: DeserializeOwned>(url: &str, status: StatusCode, body: &str) -> Result<T> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) if !envelope.is_ok() => envelope.into_result(),
        Ok(envelope) if status.is_success() => envelope.into_result(),
        Err(e) if status.is_success() => Err(Error::Decode(e)),
        _ => Err(Error::HttpStatus {
            url: url.to_string(),
            status,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_queries_match_the_endpoints_contract() {
        assert_eq!(
            StandingsScope::All.to_query(),
            "showUnofficial=true&count=1000000"
        );
        assert_eq!(
            StandingsScope::OfficialContestants.to_query(),
            "showUnofficial=false&participantTypes=CONTESTANT"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let c = Client::new("http://localhost:9999/api/").unwrap();
        assert_eq!(c.base_url, "http://localhost:9999/api");
    }
}
