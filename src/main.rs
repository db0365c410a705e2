use anyhow::Result;
use clap::Parser;
use emote_bridge::{start_web_server, ServerConfig};
use std::net::IpAddr;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "emote-bridge")]
#[command(about = "Local HTTP bridge for state reports and emote requests")]
struct Cli {
    /// Address to bind (overrides EMOTE_BRIDGE_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides EMOTE_BRIDGE_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load()?;
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if cli.log_json {
        config = config.with_log_json(true);
    }

    init_logging(config.log_json);

    config.log_summary();

    start_web_server(config).await
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("emote_bridge=info,rocket=warn"));

    if json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}
