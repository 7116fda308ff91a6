//! Pokedex - an interactive explorer for the PokeAPI

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, quiet by default)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines do not interleave with the prompt;
    // override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: reap_interval={:?}, base_url={}, page_size={}",
        config.reap_interval, config.base_url, config.page_size
    );

    let cache = Cache::new(config.reap_interval);
    let client = PokeApiClient::from_config(&config, cache.clone())?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, stdin, &mut stdout).await?;

    cache.shutdown().await;
    info!("Pokedex closed");

    Ok(())
}
