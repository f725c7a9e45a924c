//! GTV CLI - render the monthly global temperature variance heat map.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "gtv-cli",
    version,
    about = "Global temperature variance heat map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gtv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("Starting gtv-cli {}", env!("CARGO_PKG_VERSION"));
    gtv_cmd::run(cli.command).await
}
