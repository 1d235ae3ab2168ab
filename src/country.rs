//! Country filtering and ranking of contest participants.
//!
//! A country is matched case-insensitively with surrounding whitespace trimmed and inner
//! whitespace runs collapsed, so `"  united   STATES "` matches `"United States"`.

use crate::error::{Error, Result};
use crate::models::{StandingsRow, User};
use crate::stats::solved_count;
use ahash::AHashSet;
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const PROFILE_URL_PREFIX: &str = "https://codeforces.com/profile/";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

// Handles use letters, digits, '_', '-' and '.'; keep those unescaped.
const HANDLE_SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Normalize a country name for comparison.
pub fn normalize_country(name: &str) -> String {
    WHITESPACE
        .replace_all(name.trim(), " ")
        .to_lowercase()
}

/// Profile page of a handle.
pub fn profile_url(handle: &str) -> String {
    format!(
        "{}{}",
        PROFILE_URL_PREFIX,
        percent_encoding::utf8_percent_encode(handle, HANDLE_SAFE)
    )
}

/// One emitted line of the country standings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryStanding {
    pub country_rank: u32,
    pub global_rank: u32,
    pub solved: u32,
    pub handle: String,
    pub profile_url: String,
}

/// Set of handles whose country matches a requested name.
#[derive(Debug, Clone)]
pub struct CountryFilter {
    country: String,
    handles: AHashSet<String>,
}

impl CountryFilter {
    /// Collect the handles of `users` from `country`.
    ///
    /// ### Errors
    /// [`Error::NoCountryUsers`] when nobody matches; callers must not go on to fetch
    /// standings in that case.
    pub fn from_users(users: &[User], country: &str) -> Result<Self> {
        let wanted = normalize_country(country);
        let handles: AHashSet<String> = users
            .iter()
            .filter(|u| {
                u.country
                    .as_deref()
                    .is_some_and(|c| !c.is_empty() && normalize_country(c) == wanted)
            })
            .map(|u| u.handle.clone())
            .collect();
        if handles.is_empty() {
            return Err(Error::NoCountryUsers(country.to_string()));
        }
        debug!("{} handles match country '{}'", handles.len(), country);
        Ok(Self {
            country: country.to_string(),
            handles,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.handles.contains(handle)
    }

    /// Walk `rows` in standings order and rank every matching handle.
    ///
    /// Country ranks start at 1 and only advance on a match. A handle is emitted once,
    /// for the first row it appears in; team rows can emit several members.
    pub fn rank(&self, rows: &[StandingsRow]) -> Vec<CountryStanding> {
        let mut emitted: AHashSet<&str> = AHashSet::new();
        let mut out = Vec::new();
        for row in rows {
            let solved = solved_count(row);
            for member in &row.party.members {
                let handle = member.handle.as_str();
                if self.contains(handle) && emitted.insert(handle) {
                    out.push(CountryStanding {
                        country_rank: out.len() as u32 + 1,
                        global_rank: row.rank,
                        solved,
                        handle: handle.to_string(),
                        profile_url: profile_url(handle),
                    });
                }
            }
        }
        out
    }
}
