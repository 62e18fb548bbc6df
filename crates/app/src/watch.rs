//! Queue screen: owns the tracker for one ticket and renders its events.

use std::sync::Arc;

use anyhow::{Context, Result};
use queue_client::{NotificationSink, QueueClient, QueueTracker};
use queue_core::model::Ticket;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::notify::TerminalNotifier;
use crate::view::QueueView;

/// Watches `ticket` until the user quits. The tracker lives exactly as long
/// as this screen; poll failures never terminate it.
pub async fn run(client: QueueClient, ticket: Ticket) -> Result<()> {
    let notifier = Arc::new(TerminalNotifier::default());
    notifier.ensure_channel();

    let mut tracker = QueueTracker::new(Arc::new(client), notifier);
    let (tx, mut events) = mpsc::unbounded_channel();
    tracker.observe(tx);
    tracker.start(ticket);

    let mut view = QueueView::new(ticket);
    println!("{}", view.render());
    println!("(enter/r refreshes, q quits)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                view.apply(&event);
                println!("{}", view.render());
            }
            line = lines.next_line() => {
                match line.context("reading command")? {
                    None => break,
                    Some(cmd) => {
                        let cmd = cmd.trim();
                        if cmd.eq_ignore_ascii_case("q") {
                            break;
                        }
                        if cmd.is_empty() || cmd.eq_ignore_ascii_case("r") {
                            tracker.refresh();
                        }
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    tracker.stop();
    Ok(())
}
