//! cf_contest_stats
//!
//! A small Rust library for pulling Codeforces rated users and contest standings,
//! ranking contest participants by country, and charting how many problems contestants
//! solved. Pairs with four CLIs: `cf-fetch-users`, `cf-country-standings`,
//! `cf-solved-histogram` and `cf-problem-chart`.
//!
//! ### Features
//! - Fetch the full rated-user list and save it as a dated JSON file
//! - Rank the participants of one country within a contest's global standings
//! - Solved-count histogram with bin, cumulative and reverse cumulative percentages
//! - Solvers per problem
//! - Render annotated SVG/PNG bar charts
//!
//! ### Example
//! ```no_run
//! use cf_contest_stats::{Client, StandingsScope, stats, viz};
//!
//! let client = Client::default();
//! let standings = client.contest_standings(1552, StandingsScope::OfficialContestants)?;
//! let hist = stats::SolvedHistogram::from_rows(&standings.rows);
//! let chart = viz::solved_histogram_chart(1552, &hist);
//! viz::render(&chart, "contest_1552_histogram.svg", 1200, 700, "en")?;
//! # Ok::<(), cf_contest_stats::Error>(())
//! ```

pub mod api;
pub mod country;
pub mod error;
pub mod models;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::{Client, StandingsScope};
pub use country::{CountryFilter, CountryStanding};
pub use error::{Error, Result};
pub use models::{Problem, Standings, StandingsRow, User};
