//! Terminal rendition of the platform notification boundary.

use std::sync::atomic::{AtomicBool, Ordering};

use queue_client::{notification_id, NotificationSink};
use queue_core::model::Ticket;
use tracing::{debug, info};

/// Rings the terminal bell and prints a prominent line when the ticket is
/// called. Channel setup is a one-shot flag.
#[derive(Default)]
pub struct TerminalNotifier {
    channel_ready: AtomicBool,
}

impl NotificationSink for TerminalNotifier {
    fn ensure_channel(&self) {
        if !self.channel_ready.swap(true, Ordering::SeqCst) {
            debug!("queue alert channel ready");
        }
    }

    fn called(&self, ticket: Ticket) {
        // BEL gets the terminal's attention where a platform notification
        // would pop up.
        println!("\x07*** YOUR TURN HAS COME - ticket #{ticket} ***");
        info!(
            id = notification_id(ticket),
            ticket, "turn notification raised"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_channel_is_idempotent() {
        let notifier = TerminalNotifier::default();
        notifier.ensure_channel();
        notifier.ensure_channel();
        assert!(notifier.channel_ready.load(Ordering::SeqCst));
    }
}
