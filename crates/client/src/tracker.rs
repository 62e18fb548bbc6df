use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use queue_core::model::{QueueStatus, StatusSnapshot, Ticket};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::error::ClientError;
use crate::notify::NotificationSink;

/// Time between the starts of consecutive poll cycles.
pub const POLL_PERIOD: Duration = Duration::from_millis(2_000);

/// Source of status snapshots. Implemented by [`crate::http::QueueClient`];
/// tests script their own.
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
    /// One status request for `ticket`.
    async fn status(&self, ticket: Ticket) -> Result<StatusSnapshot, ClientError>;
}

/// Outcome of one completed poll cycle, delivered to the observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Fresh snapshot for the tracked ticket.
    Snapshot(StatusSnapshot),
    /// The cycle failed. The previously rendered snapshot stays valid; the
    /// next scheduled cycle is the retry.
    Failure(String),
}

/// Drives the periodic status poll for one ticket and enforces the
/// at-most-once "called" notification contract.
///
/// All mutable polling state (`notified`, the ticker) is owned by a single
/// spawned task per generation; the handle only holds the controls. Cycles
/// never overlap: the task issues one request, waits for it, publishes, then
/// waits for the next tick. `stop` and a cross-ticket `start` invalidate the
/// generation, so a response still in flight is discarded before it can
/// publish or notify.
pub struct QueueTracker<S: StatusSource> {
    source: Arc<S>,
    notifier: Arc<dyn NotificationSink>,
    listener: Option<mpsc::UnboundedSender<TrackerEvent>>,
    generation: Arc<AtomicU64>,
    run: Option<Run>,
}

struct Run {
    ticket: Ticket,
    refresh_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl<S: StatusSource> QueueTracker<S> {
    /// Creates an idle tracker. Call [`observe`](Self::observe) and then
    /// [`start`](Self::start).
    pub fn new(source: Arc<S>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            source,
            notifier,
            listener: None,
            generation: Arc::new(AtomicU64::new(0)),
            run: None,
        }
    }

    /// Registers the sink that receives one [`TrackerEvent`] per completed
    /// cycle. Takes effect for runs started afterwards.
    pub fn observe(&mut self, listener: mpsc::UnboundedSender<TrackerEvent>) {
        self.listener = Some(listener);
    }

    /// Ticket of the active run, if any.
    pub fn ticket(&self) -> Option<Ticket> {
        self.run.as_ref().map(|run| run.ticket)
    }

    /// Begins polling `ticket`; the first cycle runs immediately.
    ///
    /// Idempotent for the ticket already being tracked. A different ticket
    /// replaces the run: new generation, `notified` reset, and anything the
    /// old run still has in flight is discarded.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, ticket: Ticket) {
        if let Some(run) = &self.run {
            if run.ticket == ticket {
                return;
            }
        }
        self.cancel_run();

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (refresh_tx, refresh_rx) = mpsc::channel(1);
        let ctx = PollCtx {
            source: Arc::clone(&self.source),
            notifier: Arc::clone(&self.notifier),
            listener: self.listener.clone(),
            current_generation: Arc::clone(&self.generation),
            generation,
            ticket,
        };
        let handle = tokio::spawn(poll_loop(ctx, refresh_rx));
        self.run = Some(Run {
            ticket,
            refresh_tx,
            handle,
        });
    }

    /// Requests an immediate poll cycle in addition to the scheduled
    /// cadence. Coalesced: while a request is in flight or a refresh is
    /// already pending, this does not queue further work, so at most one
    /// request is ever outstanding.
    pub fn refresh(&self) {
        if let Some(run) = &self.run {
            let _ = run.refresh_tx.try_send(());
        }
    }

    /// Cancels the schedule. No event or notification can follow: the
    /// generation is invalidated before the task is torn down, so a result
    /// that lands in the gap is still discarded.
    pub fn stop(&mut self) {
        self.cancel_run();
    }

    fn cancel_run(&mut self) {
        if let Some(run) = self.run.take() {
            // Invalidate first so a result racing the abort still fails the
            // generation check.
            self.generation.fetch_add(1, Ordering::SeqCst);
            run.handle.abort();
            debug!(ticket = run.ticket, "tracker run cancelled");
        }
    }
}

impl<S: StatusSource> Drop for QueueTracker<S> {
    fn drop(&mut self) {
        self.cancel_run();
    }
}

struct PollCtx<S> {
    source: Arc<S>,
    notifier: Arc<dyn NotificationSink>,
    listener: Option<mpsc::UnboundedSender<TrackerEvent>>,
    current_generation: Arc<AtomicU64>,
    generation: u64,
    ticket: Ticket,
}

impl<S> PollCtx<S> {
    fn publish(&self, event: TrackerEvent) {
        if let Some(tx) = &self.listener {
            let _ = tx.send(event);
        }
    }
}

async fn poll_loop<S: StatusSource>(ctx: PollCtx<S>, mut refresh_rx: mpsc::Receiver<()>) {
    let mut ticker = interval(POLL_PERIOD);
    // An over-long cycle is followed immediately by the next one, then the
    // cadence resumes from there.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick completes at once; the first cycle runs on start.
    ticker.tick().await;

    let mut notified = false;

    loop {
        let outcome = ctx.source.status(ctx.ticket).await;
        if ctx.current_generation.load(Ordering::SeqCst) != ctx.generation {
            // Stopped or replaced while the request was in flight.
            debug!(ticket = ctx.ticket, "dropping stale poll result");
            return;
        }
        match outcome {
            Ok(snapshot) => {
                if snapshot.ticket != ctx.ticket {
                    debug!(
                        got = snapshot.ticket,
                        want = ctx.ticket,
                        "dropping snapshot for foreign ticket"
                    );
                } else {
                    let called = snapshot.status == QueueStatus::Called;
                    ctx.publish(TrackerEvent::Snapshot(snapshot));
                    if called && !notified {
                        notified = true;
                        ctx.notifier.called(ctx.ticket);
                    }
                }
            }
            Err(err) => ctx.publish(TrackerEvent::Failure(err.to_string())),
        }

        // A refresh requested while the poll was in flight is satisfied by
        // the result just published.
        while refresh_rx.try_recv().is_ok() {}

        tokio::select! {
            _ = ticker.tick() => {}
            Some(()) = refresh_rx.recv() => {
                // Manual refresh: run now and restart the cadence from this
                // instant, keeping cycle starts >= POLL_PERIOD apart.
                ticker.reset();
            }
        }
    }
}
