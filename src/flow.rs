//! Flow-control accounting for the writer.
//!
//! Tracks bytes handed to the transport against bytes the peer has
//! acknowledged. A submitter is admitted only while the delta stays under
//! [`FLOW_CONTROL_WINDOW`](crate::protocol::FLOW_CONTROL_WINDOW); the
//! blocking wait itself lives in the writer engine, which owns the mutex and
//! condition variable both counters are guarded by.
//!
//! The window test happens at admission time. A single admitted fragment may
//! push the delta past the window; the next admission then blocks until the
//! peer catches up.

use crate::protocol::FLOW_CONTROL_WINDOW;

/// Counter pair for the credit-based flow-control window.
///
/// Both counters are monotone and only move under the writer mutex.
#[derive(Debug, Default)]
pub struct FlowState {
    outgoing_bytes: u64,
    acknowledged_bytes: u64,
}

impl FlowState {
    /// Create a fresh flow state with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the window is exhausted and submitters must wait.
    #[inline]
    pub fn window_full(&self) -> bool {
        self.outgoing_bytes >= self.acknowledged_bytes + FLOW_CONTROL_WINDOW
    }

    /// Credit bytes handed to the transport.
    #[inline]
    pub fn credit(&mut self, num_bytes: u64) {
        self.outgoing_bytes += num_bytes;
    }

    /// Record a peer acknowledgement high-water mark.
    ///
    /// Stale or duplicate acks (a smaller `num_bytes`) are ignored, so the
    /// writer is idempotent to retransmitted or coalesced acks.
    #[inline]
    pub fn record_ack(&mut self, num_bytes: u64) {
        self.acknowledged_bytes = self.acknowledged_bytes.max(num_bytes);
    }

    /// Bytes handed to the transport so far.
    #[inline]
    pub fn outgoing_bytes(&self) -> u64 {
        self.outgoing_bytes
    }

    /// Highest acknowledgement received so far.
    #[inline]
    pub fn acknowledged_bytes(&self) -> u64 {
        self.acknowledged_bytes
    }
}
