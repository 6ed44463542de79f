//! Concurrent task execution with submission-order result delivery.

use super::PriorityQueue;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A completed task result tagged with its submission index.
#[derive(Debug)]
struct TaskSlot<T, E> {
    index: u64,
    result: Result<T, E>,
}

/// Reordering buffer keyed by ascending submission index.
type SlotBuffer<T, E> = PriorityQueue<TaskSlot<T, E>, fn(&TaskSlot<T, E>, &TaskSlot<T, E>) -> bool>;

fn earlier_slot<T, E>(a: &TaskSlot<T, E>, b: &TaskSlot<T, E>) -> bool {
    a.index < b.index
}

/// Runs independently-completing asynchronous operations concurrently
/// while guaranteeing the consumer observes their results strictly in
/// submission order.
///
/// Each [`submit`](Self::submit) launches its operation immediately and
/// tags it with a monotonically increasing index starting at 0. Completed
/// results flow through a completion channel in arbitrary order;
/// [`next`](Self::next) releases them in index order, holding early
/// arrivals in a min-heap reordering buffer whose size is bounded by the
/// out-of-order skew rather than the total task count.
///
/// A single logical consumer owns the group; `next` is the only
/// suspension point. An operation's failure is delivered as `Err` at the
/// position its index would have been returned, after every earlier index
/// has been drained. One failing operation does not cancel the others;
/// cancellation is explicit via [`cancel`](Self::cancel).
pub struct OrderedTaskGroup<T, E> {
    next_index: u64,
    waiting_index: u64,
    buffer: SlotBuffer<T, E>,
    completion_tx: Option<mpsc::UnboundedSender<TaskSlot<T, E>>>,
    completion_rx: mpsc::UnboundedReceiver<TaskSlot<T, E>>,
    handles: Vec<JoinHandle<()>>,
}

impl<T, E> OrderedTaskGroup<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a group with no submitted operations.
    #[must_use]
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            next_index: 0,
            waiting_index: 0,
            buffer: PriorityQueue::new(earlier_slot),
            completion_tx: Some(completion_tx),
            completion_rx,
            handles: Vec::new(),
        }
    }

    /// Launches `operation` for concurrent execution under the next
    /// submission index and returns without waiting for completion.
    ///
    /// Never suspends, and imposes no bound on outstanding operations;
    /// backpressure is the caller's responsibility. Submissions after
    /// [`cancel`](Self::cancel) are ignored.
    pub fn submit<F>(&mut self, operation: F)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let Some(tx) = self.completion_tx.clone() else {
            tracing::warn!("submission after cancellation ignored");
            return;
        };
        let index = self.next_index;
        self.next_index += 1;
        self.handles.push(tokio::spawn(async move {
            let result = operation.await;
            if tx.send(TaskSlot { index, result }).is_err() {
                tracing::debug!(index, "completion discarded, group cancelled");
            }
        }));
    }

    /// Returns the result for the next submission index, in strict
    /// submission order.
    ///
    /// Releases a buffered result without suspending when it is already
    /// the buffer minimum; otherwise awaits completions in arbitrary
    /// order, buffering those that arrive early. Returns `None` once
    /// every submitted operation has been drained, or once the group was
    /// cancelled and no further completions can arrive, so a cancelled
    /// slot never deadlocks the consumer.
    pub async fn next(&mut self) -> Option<Result<T, E>> {
        if self.waiting_index == self.next_index {
            return None;
        }
        loop {
            if self
                .buffer
                .peek_min()
                .is_some_and(|slot| slot.index == self.waiting_index)
            {
                let slot = self.buffer.pop_min()?;
                self.waiting_index += 1;
                return Some(slot.result);
            }
            match self.completion_rx.recv().await {
                Some(slot) if slot.index == self.waiting_index => {
                    self.waiting_index += 1;
                    return Some(slot.result);
                }
                Some(early) => self.buffer.push(early),
                None => return None,
            }
        }
    }

    /// Number of submitted operations whose results have not yet been
    /// delivered to the consumer.
    #[must_use]
    pub const fn pending(&self) -> u64 {
        self.next_index - self.waiting_index
    }

    /// Cancels all outstanding operations and closes the completion
    /// channel.
    ///
    /// Aborted operations never deliver a slot; subsequent calls to
    /// [`next`](Self::next) terminate with `None` instead of waiting for
    /// indices that can no longer arrive.
    pub fn cancel(&mut self) {
        self.completion_tx = None;
        for handle in &self.handles {
            handle.abort();
        }
    }
}

impl<T, E> Default for OrderedTaskGroup<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Drop for OrderedTaskGroup<T, E> {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
