use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pennant::algorithm::elimination::Certifier;
use pennant::io::import;

/// Decide which teams of a division can no longer finish first.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the division standings
    division_file: PathBuf,
    /// Only report on these teams (may be repeated)
    #[arg(long = "team", value_name = "NAME")]
    teams: Vec<String>,
    /// Check every certificate independently before reporting it
    #[arg(long)]
    verify: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(error) = run(Opts::parse()) {
        eprintln!("Error: {:#}", error);
        exit(1);
    }
}

fn run(opts: Opts) -> anyhow::Result<()> {
    let league = import(&opts.division_file)
        .with_context(|| format!("Couldn't read division file \"{}\"", opts.division_file.display()))?;
    tracing::info!(nr_teams = league.nr_teams(), "division read");

    let certifier = Certifier::new(&league);
    let teams = if opts.teams.is_empty() {
        league.teams().map(str::to_string).collect()
    } else {
        opts.teams
    };

    for team in &teams {
        match certifier.certificate_of_elimination(team)? {
            Some(certificate) => {
                if opts.verify && !certificate.proves(&league, team)? {
                    bail!("Certificate {} doesn't prove that {} is eliminated", certificate, team);
                }
                println!("{} is eliminated by the subset R = {}", team, certificate);
            },
            None => println!("{} is not eliminated", team),
        }
    }

    Ok(())
}
