//! Terminal client for the electronic queue: join under a name, then watch
//! the ticket until it is called.

use anyhow::{Context, Result};
use clap::Parser;
use queue_client::QueueClient;
use tracing_subscriber::EnvFilter;

mod join;
mod notify;
mod view;
mod watch;

#[derive(Debug, Parser)]
#[command(name = "queue-app", version, about = "Terminal client for the electronic queue")]
struct Cli {
    /// Queue service base URL, e.g. http://127.0.0.1:8080
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: String,

    /// Name to join with. Prompted for interactively when omitted.
    #[arg(long)]
    name: Option<String>,

    /// Skip the join screen and watch an already-issued ticket.
    #[arg(long, conflicts_with = "name")]
    ticket: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = QueueClient::new(&cli.server_url).context("building http client")?;

    let ticket = match cli.ticket {
        Some(ticket) => ticket,
        None => join::run(&client, cli.name).await?,
    };

    watch::run(client, ticket).await
}
