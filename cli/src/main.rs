//! `poketeam` - look up Pokemon and print their defensive type coverage.
//!
//! Usage:
//!   poketeam wailord gengar
//!   poketeam --json rotom-wash
//!   echo -e "zapdos\nswampert" | poketeam

use anyhow::{Context, Result};
use clap::Parser;
use poketeam_client::{ClientConfig, PokemonClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poketeam_cli::{render, Roster, RosterEntry};

#[derive(Parser)]
#[command(name = "poketeam", version, about)]
struct Cli {
    /// Pokemon to look up; one name per stdin line when omitted
    names: Vec<String>,

    /// Print the roster as JSON instead of cards
    #[arg(long)]
    json: bool,

    /// Base URL of the Pokemon API (overrides POKETEAM_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Disable the in-memory lookup cache
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poketeam=info,poketeam_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.as_str());
    }
    if cli.no_cache {
        config = config.with_cache_ttl(None);
    }
    tracing::debug!(base_url = %config.base_url, "Using Pokemon API");

    let client = PokemonClient::new(config).context("Failed to build HTTP client")?;
    let mut roster = Roster::new();
    let mut failures = 0usize;

    if cli.names.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            if line.trim().is_empty() {
                continue;
            }
            match search(&client, &mut roster, &line).await {
                Ok(entry) if !cli.json => println!("{}", render::Card(entry)),
                Ok(_) => {}
                Err(e) => {
                    failures += 1;
                    toast(&line, &e);
                }
            }
        }
    } else {
        for name in &cli.names {
            if let Err(e) = search(&client, &mut roster, name).await {
                failures += 1;
                toast(name, &e);
            }
        }
        if !cli.json && !roster.is_empty() {
            print!("{}", render::render_roster(roster.iter()));
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&roster).context("Failed to encode roster")?;
        println!("{}", json);
    }

    if roster.is_empty() && failures > 0 {
        anyhow::bail!("No Pokemon found ({} failed lookups)", failures);
    }
    Ok(())
}

/// Fetch one Pokemon and add it to the roster
async fn search<'r>(
    client: &PokemonClient,
    roster: &'r mut Roster,
    name: &str,
) -> Result<&'r RosterEntry> {
    let pokemon = client
        .fetch_pokemon_by_name(name)
        .await
        .with_context(|| format!("Lookup failed for {:?}", name.trim()))?;

    let label = pokemon.name.clone();
    roster
        .push(pokemon)
        .with_context(|| format!("{} has unusable type data", label))
}

/// Report a failed lookup without ending the session
fn toast(name: &str, error: &anyhow::Error) {
    tracing::warn!(name = %name.trim(), error = %format!("{:#}", error), "Search failed");
    eprintln!("Uh oh! Something went wrong: {:#}", error);
}
