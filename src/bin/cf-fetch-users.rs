use anyhow::{Context, Result};
use cf_contest_stats::api::DEFAULT_BASE_URL;
use cf_contest_stats::{Client, storage};
use chrono::Local;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cf-fetch-users",
    version,
    about = "Fetch every rated Codeforces user and save the list to a dated JSON file"
)]
struct Cli {
    /// Only users who took part in a rated contest during the last month.
    #[arg(long, default_value_t = false)]
    active_only: bool,
    /// Include users who have not been online for a long time (`--include-retired false` to skip them).
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    include_retired: bool,
    /// Output path (default: users_YYYY-MM-DD.json in the current directory).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Root of the Codeforces API.
    #[arg(long, env = "CF_API_BASE", default_value = DEFAULT_BASE_URL)]
    api_base: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let client = Client::new(&cli.api_base)?;
    let users = client
        .rated_users(cli.active_only, cli.include_retired)
        .context("fetching rated users")?;

    let path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(storage::users_file_name(Local::now().date_naive())));
    storage::save_users_json(&users, &path)?;
    println!("Saved {} users to '{}'", users.len(), path.display());
    Ok(())
}
