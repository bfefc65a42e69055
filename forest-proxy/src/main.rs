//! forest-proxy - thin pass-through server for the forest statistics API.

use clap::Parser;
use forest_proxy::{router, ProxyState, DEFAULT_UPSTREAM};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "forest-proxy",
    version,
    about = "Pass-through proxy for the forest statistics API"
)]
struct Cli {
    /// Listen port.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Upstream API base URL.
    #[arg(long, env = "UPSTREAM_BASE", default_value = DEFAULT_UPSTREAM)]
    upstream: String,

    /// Serve the production build from `dist/` with an SPA index fallback.
    /// Also enabled by `NODE_ENV=production`.
    #[arg(long)]
    serve_static: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forest_proxy=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let serve_static = cli.serve_static
        || std::env::var("NODE_ENV").is_ok_and(|v| v == "production");

    let app = router(ProxyState::new(cli.upstream.clone()), serve_static);

    let addr = format!("0.0.0.0:{}", cli.port);
    info!("proxying {} on {}", cli.upstream, addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
