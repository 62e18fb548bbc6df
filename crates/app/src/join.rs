//! Join screen: collect a name, call `join`, hand the ticket over.

use std::io::Write;

use anyhow::{bail, Context, Result};
use queue_client::QueueClient;
use queue_core::model::Ticket;
use queue_core::validation::validate_name;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Runs the join flow and returns the issued ticket.
///
/// With a preset name the flow is one-shot: a validation or join failure is
/// an error. Interactively, failures are printed and the prompt repeats;
/// nothing is sent until the name validates locally.
pub async fn run(client: &QueueClient, preset: Option<String>) -> Result<Ticket> {
    if let Some(raw) = preset {
        let name = validate_name(&raw)?;
        let result = client.join(&name).await.context("joining the queue")?;
        announce(&result);
        return Ok(result.ticket);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Your name: ");
        std::io::stdout().flush().context("flush prompt")?;

        let Some(line) = lines.next_line().await.context("reading name")? else {
            bail!("input closed before a name was entered");
        };
        let name = match validate_name(&line) {
            Ok(name) => name,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        println!("Joining the queue...");
        match client.join(&name).await {
            Ok(result) => {
                announce(&result);
                return Ok(result.ticket);
            }
            Err(err) => {
                // Stay on the join screen; the user can try again.
                println!("Join failed: {err}");
            }
        }
    }
}

fn announce(result: &queue_core::model::JoinResult) {
    println!(
        "Your ticket: #{} (ahead: {}, now serving: #{})",
        result.ticket, result.position, result.current_ticket
    );
}
