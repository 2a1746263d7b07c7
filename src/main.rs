use tracing_subscriber::{EnvFilter, fmt};

use movie_harness::shell;
use movie_harness::shell::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    shell::serve(Config::from_env()).await
}
