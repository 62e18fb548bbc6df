use queue_core::model::Ticket;

/// Offset applied to ticket numbers when deriving notification ids, so two
/// live tickets never collide within one process lifetime.
pub const NOTIFICATION_ID_BASE: u32 = 10_000;

/// Notification id for `ticket`.
pub fn notification_id(ticket: Ticket) -> u32 {
    NOTIFICATION_ID_BASE + ticket
}

/// Fire-and-forget alert capability exposed by the host platform.
///
/// The tracker treats this as an opaque effect: it calls [`called`] at most
/// once per tracked ticket and never inspects the outcome.
///
/// [`called`]: NotificationSink::called
pub trait NotificationSink: Send + Sync {
    /// Idempotent one-time setup of the high-importance alert channel.
    fn ensure_channel(&self);

    /// Raises the single "your turn has come" notification for `ticket`.
    fn called(&self, ticket: Ticket);
}
