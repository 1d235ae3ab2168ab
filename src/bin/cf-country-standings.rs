//! List the participants of one country in a contest, in standings order:
//!
//! `<country_rank>\t<global_rank>\t<problems_solved>\t<profile_url>`
use anyhow::{Context, Result};
use cf_contest_stats::api::DEFAULT_BASE_URL;
use cf_contest_stats::{Client, CountryFilter, StandingsScope, storage};
use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cf-country-standings",
    version,
    about = "List Codeforces contest participants from a specific country, ordered by standing with country/global ranks and solved counts"
)]
struct Cli {
    /// Path to the JSON file with all rated users (from cf-fetch-users).
    #[arg(short = 'u', long)]
    users_file: PathBuf,
    /// Codeforces contest ID to query.
    #[arg(short = 'c', long)]
    contest_id: u32,
    /// Country name to filter users by (case-insensitive, whitespace-tolerant).
    #[arg(short = 'C', long)]
    country: String,
    /// Root of the Codeforces API.
    #[arg(long, env = "CF_API_BASE", default_value = DEFAULT_BASE_URL)]
    api_base: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let users = storage::load_users(&cli.users_file)?;
    let filter = CountryFilter::from_users(&users, &cli.country)?;
    info!("{} users from '{}'", filter.len(), filter.country());

    let client = Client::new(&cli.api_base)?;
    let standings = client
        .contest_standings(cli.contest_id, StandingsScope::All)
        .with_context(|| format!("fetching standings of contest {}", cli.contest_id))?;

    let ranked = filter.rank(&standings.rows);
    if ranked.is_empty() {
        eprintln!(
            "No participants from '{}' in contest {}",
            cli.country, cli.contest_id
        );
        return Ok(());
    }

    storage::write_country_standings(&ranked, io::stdout().lock())?;
    Ok(())
}
