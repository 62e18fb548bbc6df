use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned queue ticket number (always >= 1 in well-formed responses).
pub type Ticket = u32;

/// Where a ticket stands in the queue lifecycle.
///
/// The wire format is a string compared case-insensitively; the canonical
/// form is upper-case. `position == 0` alone does not mean called — only
/// `Called` is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    /// Still waiting; `position` tickets are ahead.
    Waiting,
    /// This ticket is being served now.
    Called,
    /// The ticket has already been served.
    Done,
}

impl QueueStatus {
    /// Canonical wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "WAITING",
            QueueStatus::Called => "CALLED",
            QueueStatus::Done => "DONE",
        }
    }

    /// Parses a wire status string, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("WAITING") {
            Some(QueueStatus::Waiting)
        } else if s.eq_ignore_ascii_case("CALLED") {
            Some(QueueStatus::Called)
        } else if s.eq_ignore_ascii_case("DONE") {
            Some(QueueStatus::Done)
        } else {
            None
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for QueueStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QueueStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        QueueStatus::parse(&raw).ok_or_else(|| {
            de::Error::unknown_variant(&raw, &["WAITING", "CALLED", "DONE"])
        })
    }
}

/// One successful `GET /queue/status` response.
///
/// Immutable once produced; each poll cycle replaces the previous snapshot.
/// Unknown extra fields from the server are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Ticket the snapshot describes. Must match the tracked ticket.
    pub ticket: Ticket,
    /// Lifecycle status.
    pub status: QueueStatus,
    /// Tickets ahead of this one; 0 means next.
    pub position: u32,
    /// Ticket currently being served.
    pub current_ticket: u32,
}

/// Successful `POST /queue/join` response: the freshly issued ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinResult {
    /// The issued ticket.
    pub ticket: Ticket,
    /// Tickets ahead at join time.
    pub position: u32,
    /// Ticket being served at join time.
    pub current_ticket: u32,
}

/// Whole-queue summary returned by the housekeeping endpoints
/// (`/queue/state`, `/queue/next`, `/queue/reset`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueState {
    /// Ticket currently being served (0 when nothing has been called yet).
    pub current_ticket: u32,
    /// Highest ticket issued so far.
    pub last_ticket: u32,
    /// Number of tickets still waiting.
    pub length: u32,
}
