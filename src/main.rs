#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::io::{self, Write};

use clap::Parser;
use rollcall::config::Config;
use rollcall::report::report;
use rollcall::senate::{HttpVoteFetcher, VoteFetcher, VoteLocator};
use rollcall::vote::deserialize;

/// Fetch a US Senate roll-call vote and print a summary: the vote's
/// metadata, then each member's cast vote.
#[derive(Debug, Parser)]
#[command(name = "rollcall", version)]
struct Cli {
    /// Congress number (e.g. 119); defaults to the configured value
    #[arg(long)]
    congress: Option<u16>,

    /// Session within the congress (1 or 2)
    #[arg(long)]
    session: Option<u8>,

    /// Roll-call vote number within the session
    #[arg(long)]
    vote_number: Option<u32>,

    /// Path to a YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = Config::load_from(&cli.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    // Set up logging from config
    std::env::set_var("RUST_LOG", &config.logging.level);
    tracing_subscriber::fmt::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rollcall starting up");

    if config.fetch.api_key.is_empty() {
        // Deliberate leniency: the request still goes out, with an
        // empty x-api-key header, and the endpoint decides.
        tracing::warn!("api key not configured; sending request with empty x-api-key header");
    }

    let locator = VoteLocator {
        congress: cli.congress.unwrap_or(config.vote.congress),
        session: cli.session.unwrap_or(config.vote.session),
        number: cli.vote_number.unwrap_or(config.vote.number),
    };

    tracing::info!(
        congress = locator.congress,
        session = locator.session,
        number = locator.number,
        "fetching roll-call vote"
    );

    let fetcher = HttpVoteFetcher::new(&config.fetch.base_url, &config.fetch.api_key);
    let body = fetcher.fetch_vote(&locator).await?;

    let record = deserialize(&body)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&record, &mut out)?;
    out.flush()?;

    Ok(())
}
