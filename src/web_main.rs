//! Web 服务器主程序入口

use clap::Parser;
use tracing_subscriber::EnvFilter;

use message_relay::env::{core::LogLevel, EnvVar};
use message_relay::web::{WebConfig, WebServer};

/// Message relay web server
#[derive(Parser, Debug)]
#[command(name = "message-relay-web", version, about)]
struct Args {
    /// Bind address [env: RELAY_BIND_ADDRESS, default: 0.0.0.0]
    #[arg(short, long)]
    bind: Option<String>,

    /// Port number [env: RELAY_PORT, default: 3000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Translation engine endpoint [env: RELAY_ENGINE_URL]
    #[arg(long)]
    engine_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::get_or_default("info".to_string())));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut web_config = WebConfig::from_env()?;
    if let Some(bind) = args.bind {
        web_config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        web_config.port = port;
    }
    if let Some(engine_url) = args.engine_url {
        web_config.engine.endpoint = engine_url;
    }

    let server = WebServer::new(web_config);
    server.start().await?;

    Ok(())
}
