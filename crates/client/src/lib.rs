#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Network client and queue-tracking state machine for the electronic queue.
//!
//! [`http::QueueClient`] is the thin wire adapter over the queue service;
//! [`tracker::QueueTracker`] drives the periodic status poll and owns the
//! at-most-once "your turn" notification contract.

pub mod error;
pub mod http;
pub mod notify;
pub mod tracker;

pub use error::ClientError;
pub use http::QueueClient;
pub use notify::{notification_id, NotificationSink};
pub use tracker::{QueueTracker, StatusSource, TrackerEvent, POLL_PERIOD};
