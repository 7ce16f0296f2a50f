// Roast Gateway Server
//
// Signs a listener in with Spotify, snapshots their top tracks, and asks
// Gemini for a short roast of their taste.

use roast_gateway::config::AppConfig;
use roast_gateway::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    server::serve(config).await
}
