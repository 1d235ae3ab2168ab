use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope every Codeforces API method answers with.
///
/// `result` is present when `status == "OK"`, `comment` when it is `"FAILED"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }

    /// Unwrap the payload, surfacing a non-`OK` status as [`Error::Api`].
    pub fn into_result(self) -> Result<T> {
        if !self.is_ok() {
            return Err(Error::Api {
                comment: self.comment.unwrap_or_else(|| "<no comment>".to_string()),
            });
        }
        self.result.ok_or_else(|| Error::Api {
            comment: "status OK but no result in response".to_string(),
        })
    }
}

/// A rated user as returned by `user.ratedList`.
///
/// Only `handle` and `country` are interpreted; every other field the API sends is kept
/// in `extra` so the record is written back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(handle: impl Into<String>, country: Option<&str>) -> Self {
        Self {
            handle: handle.into(),
            country: country.map(str::to_string),
            extra: Map::new(),
        }
    }
}

/// `result` of `contest.standings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standings {
    #[serde(default)]
    pub contest: Option<Contest>,
    #[serde(default)]
    pub problems: Vec<Problem>,
    #[serde(default)]
    pub rows: Vec<StandingsRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contest {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    pub index: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One ranked participant (individual or team).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StandingsRow {
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub party: Party,
    #[serde(default, rename = "problemResults")]
    pub problem_results: Vec<ProblemResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Party {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, rename = "participantType")]
    pub participant_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Member {
    #[serde(default)]
    pub handle: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProblemResult {
    #[serde(default)]
    pub points: f64,
}

impl ProblemResult {
    pub fn is_solved(&self) -> bool {
        self.points > 0.0
    }
}
