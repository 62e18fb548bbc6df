//! Render model for the queue screen.

use queue_client::TrackerEvent;
use queue_core::model::{StatusSnapshot, Ticket};

/// Display state: the tracked ticket, the last good snapshot, and the
/// failure banner. A failed poll sets the banner but keeps the snapshot
/// fields as they were; the next successful poll clears it.
pub struct QueueView {
    ticket: Ticket,
    snapshot: Option<StatusSnapshot>,
    banner: Option<String>,
}

impl QueueView {
    pub fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            snapshot: None,
            banner: None,
        }
    }

    pub fn apply(&mut self, event: &TrackerEvent) {
        match event {
            TrackerEvent::Snapshot(snapshot) => {
                self.snapshot = Some(snapshot.clone());
                self.banner = None;
            }
            TrackerEvent::Failure(message) => {
                self.banner = Some(message.clone());
            }
        }
    }

    /// One status line for the terminal.
    pub fn render(&self) -> String {
        let mut line = match &self.snapshot {
            Some(s) => format!(
                "ticket #{} | now serving #{} | ahead: {} | status: {}",
                self.ticket, s.current_ticket, s.position, s.status
            ),
            None => format!("ticket #{} | waiting for first update", self.ticket),
        };
        if let Some(banner) = &self.banner {
            line.push_str(&format!(" | error: {banner}"));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queue_core::model::QueueStatus;

    fn snapshot(status: QueueStatus, position: u32, current: u32) -> StatusSnapshot {
        StatusSnapshot {
            ticket: 7,
            status,
            position,
            current_ticket: current,
        }
    }

    #[test]
    fn always_shows_the_ticket() {
        let view = QueueView::new(7);
        assert!(view.render().contains("ticket #7"));
    }

    #[test]
    fn snapshot_fields_are_rendered() {
        let mut view = QueueView::new(7);
        view.apply(&TrackerEvent::Snapshot(snapshot(QueueStatus::Waiting, 2, 5)));
        let line = view.render();
        assert!(line.contains("now serving #5"));
        assert!(line.contains("ahead: 2"));
        assert!(line.contains("status: WAITING"));
    }

    #[test]
    fn failure_keeps_prior_snapshot_fields() {
        let mut view = QueueView::new(7);
        view.apply(&TrackerEvent::Snapshot(snapshot(QueueStatus::Waiting, 2, 5)));
        view.apply(&TrackerEvent::Failure("db down".into()));
        let line = view.render();
        assert!(line.contains("now serving #5"));
        assert!(line.contains("error: db down"));
    }

    #[test]
    fn success_clears_the_banner() {
        let mut view = QueueView::new(7);
        view.apply(&TrackerEvent::Failure("db down".into()));
        view.apply(&TrackerEvent::Snapshot(snapshot(QueueStatus::Waiting, 1, 6)));
        let line = view.render();
        assert!(!line.contains("error:"));
        assert!(line.contains("ahead: 1"));
    }
}
