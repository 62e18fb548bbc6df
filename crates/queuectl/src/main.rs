//! Operator CLI for the queue service housekeeping endpoints.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use queue_client::QueueClient;
use queue_core::validation::validate_name;

#[derive(Parser, Debug)]
#[command(name = "queuectl", version, about = "Operator commands for the electronic queue")]
struct Args {
    /// Queue service base URL.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the whole-queue summary.
    State,
    /// Advance the queue to the next ticket.
    Next,
    /// Clear the queue.
    Reset,
    /// Check service liveness.
    Health,
    /// Print the status of one ticket.
    Status {
        #[arg(long)]
        ticket: u32,
    },
    /// Join the queue (issues a ticket).
    Join {
        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = QueueClient::new(&args.server).context("building http client")?;

    match args.cmd {
        Cmd::State => {
            let state = client.state().await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Cmd::Next => {
            let state = client.advance().await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Cmd::Reset => {
            let state = client.reset().await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Cmd::Health => {
            client.health().await?;
            println!("ok");
        }
        Cmd::Status { ticket } => {
            let snapshot = client.status(ticket).await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Cmd::Join { name } => {
            let name = validate_name(&name)?;
            let result = client.join(&name).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
