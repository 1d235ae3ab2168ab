use anyhow::{Context, Result};
use cf_contest_stats::api::DEFAULT_BASE_URL;
use cf_contest_stats::stats::problem_solver_counts;
use cf_contest_stats::{Client, StandingsScope, viz};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cf-problem-chart",
    version,
    about = "Fetch Codeforces contest standings and plot solvers per problem with bin % annotations"
)]
struct Cli {
    /// ID of the Codeforces contest (e.g. 1552).
    contest_id: u32,
    /// Directory for the chart; created when missing.
    #[arg(long, default_value = "img")]
    out_dir: PathBuf,
    /// Explicit chart path (.svg or .png); overrides --out-dir.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Width of the chart in pixels.
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Height of the chart in pixels.
    #[arg(long, default_value_t = 700)]
    height: u32,
    /// Locale for y-axis thousands separators (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Also print solvers per problem as tab-separated rows to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Root of the Codeforces API.
    #[arg(long, env = "CF_API_BASE", default_value = DEFAULT_BASE_URL)]
    api_base: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let client = Client::new(&cli.api_base)?;
    let standings = client
        .contest_standings(cli.contest_id, StandingsScope::OfficialContestants)
        .with_context(|| format!("fetching standings of contest {}", cli.contest_id))?;
    let solves = problem_solver_counts(&standings.problems, &standings.rows)?;

    if cli.stats {
        println!("problem\tsolvers\tbin_%");
        for p in &solves {
            println!("{}\t{}\t{:.1}", p.index, p.solvers, p.percent);
        }
    }

    let out = match cli.out {
        Some(p) => p,
        None => {
            fs::create_dir_all(&cli.out_dir)
                .with_context(|| format!("creating {}", cli.out_dir.display()))?;
            cli.out_dir.join(viz::problem_chart_file_name(cli.contest_id))
        }
    };
    let chart = viz::problem_solves_chart(cli.contest_id, &solves);
    viz::render(&chart, &out, cli.width, cli.height, &cli.locale)?;
    println!(
        "Solvers per problem chart with bin % annotations saved to {}",
        out.display()
    );
    Ok(())
}
