use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod error;
mod routes;

#[derive(Parser, Debug)]
#[command(about = "Lambda-calculus evaluation API")]
struct Args {
    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let addr = SocketAddr::from((args.host, args.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, routes::router()).await?;
    Ok(())
}
