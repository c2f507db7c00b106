//! Writer engine: turns logical transactions into ordered wire transactions.
//!
//! # Architecture
//!
//! ```text
//! Caller 1 ─┐
//! Caller 2 ─┼─► rpc_call ─► fragment encoder ─► flow gate ─► Binder::transact
//! Caller N ─┘                                       ▲
//!                              recv_ack ────────────┘ (wakes blocked senders)
//! ```
//!
//! A single mutex serializes whole calls: all fragments of one call hit the
//! wire contiguously, per-call sequence numbers stay monotone across
//! threads, and the binder is never touched concurrently. The only
//! suspension point is the flow-control wait inside the chunked slow path,
//! which releases the mutex while parked.

use std::collections::HashMap;

use parking_lot::{Condvar, Mutex, MutexGuard};

use crate::binder::Binder;
use crate::error::{Result, WireError};
use crate::flow::FlowState;
use crate::protocol::{flags, framing, Transaction, ACKNOWLEDGE_BYTES, BLOCK_SIZE, FIRST_CALL_ID};

/// State guarded by the writer mutex.
struct Inner {
    binder: Box<dyn Binder + Send>,
    /// Next sequence number per transaction code. Lazily inserted at 0,
    /// never removed.
    seq_nums: HashMap<u32, u32>,
    flow: FlowState,
    closed: bool,
}

/// Thread-safe wire-format writer over an owned [`Binder`].
///
/// Any number of threads may call [`rpc_call`](Self::rpc_call),
/// [`send_ack`](Self::send_ack) and [`recv_ack`](Self::recv_ack)
/// concurrently; the writer provides its own synchronization.
pub struct WireWriter {
    inner: Mutex<Inner>,
    ack_cv: Condvar,
}

impl WireWriter {
    /// Create a writer that exclusively owns the given binder.
    pub fn new(binder: Box<dyn Binder + Send>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                binder,
                seq_nums: HashMap::new(),
                flow: FlowState::new(),
                closed: false,
            }),
            ack_cv: Condvar::new(),
        }
    }

    /// Transmit one logical transaction as one or more wire fragments.
    ///
    /// Fragments of a single call are emitted contiguously; concurrent calls
    /// never interleave. Blocks inside the chunked path while the
    /// flow-control window is exhausted, until the peer acknowledges bytes
    /// or the writer is closed.
    ///
    /// # Panics
    ///
    /// Panics if `tx.tx_code()` lies in the control-plane range below
    /// [`FIRST_CALL_ID`].
    pub fn rpc_call(&self, tx: Transaction) -> Result<()> {
        assert!(
            tx.tx_code() >= FIRST_CALL_ID,
            "transaction code {:#x} is reserved for the control plane",
            tx.tx_code()
        );
        let mut guard = self.inner.lock();
        if guard.closed {
            return Err(WireError::Shutdown);
        }

        // Fast path: no message data, or no payload slices at all. One
        // fragment carries everything.
        if !flags::has_flag(tx.flags(), flags::MESSAGE_DATA) || tx.message_data().is_empty() {
            let inner = &mut *guard;
            let seq = next_seq(&mut inner.seq_nums, tx.tx_code());
            inner.binder.prepare_transaction()?;
            // An empty message is framed as a lone zero length word.
            let chunk: Option<&[u8]> = if flags::has_flag(tx.flags(), flags::MESSAGE_DATA) {
                Some(&[])
            } else {
                None
            };
            let size = {
                let parcel = inner.binder.writable_parcel();
                framing::encode_fragment(&tx, tx.flags(), seq, chunk, parcel)?;
                parcel.data_size()
            };
            inner.flow.credit(size);
            return inner.binder.transact(tx.tx_code());
        }

        // Slow path: non-empty payload, chunked into BLOCK_SIZE fragments.
        let original_flags = tx.flags();
        let num_slices = tx.message_data().len();
        let mut is_first = true;
        for slice_idx in 0..num_slices {
            let len = tx.message_data()[slice_idx].len();
            let mut ptr = 0usize;
            // The right-hand condition keeps empty slices visible on the
            // wire: each one becomes exactly one zero-length framed chunk.
            while ptr < len || (ptr == 0 && len == 0) {
                self.admit(&mut guard)?;
                let inner = &mut *guard;

                let mut fragment_flags = flags::MESSAGE_DATA;
                if is_first {
                    if flags::has_flag(original_flags, flags::PREFIX) {
                        fragment_flags |= flags::PREFIX;
                    }
                    is_first = false;
                }
                let more_slices = slice_idx + 1 < num_slices;
                if more_slices || ptr + BLOCK_SIZE < len {
                    // The message continues past this fragment.
                    fragment_flags |= flags::MESSAGE_DATA_PARTIAL;
                } else if flags::has_flag(original_flags, flags::SUFFIX) {
                    fragment_flags |= flags::SUFFIX;
                }

                let seq = next_seq(&mut inner.seq_nums, tx.tx_code());
                inner.binder.prepare_transaction()?;
                let chunk_len = BLOCK_SIZE.min(len - ptr);
                let size = {
                    let chunk = &tx.message_data()[slice_idx][ptr..ptr + chunk_len];
                    let parcel = inner.binder.writable_parcel();
                    framing::encode_fragment(&tx, fragment_flags, seq, Some(chunk), parcel)?;
                    parcel.data_size()
                };
                inner.flow.credit(size);
                inner.binder.transact(tx.tx_code())?;
                // Advance by at least one so a zero-length chunk exits the
                // loop.
                ptr += chunk_len.max(1);
            }
        }
        Ok(())
    }

    /// Emit a dedicated acknowledgement transaction telling the peer how
    /// many bytes this side has received.
    ///
    /// Not subject to flow control: acks must flow even while the outgoing
    /// window is closed.
    pub fn send_ack(&self, num_bytes: u64) -> Result<()> {
        let mut guard = self.inner.lock();
        if guard.closed {
            return Err(WireError::Shutdown);
        }
        let inner = &mut *guard;
        inner.binder.prepare_transaction()?;
        inner.binder.writable_parcel().write_i64(num_bytes as i64)?;
        inner.binder.transact(ACKNOWLEDGE_BYTES)
    }

    /// Record an acknowledgement received from the peer and wake a blocked
    /// submitter.
    ///
    /// `num_bytes` is a monotone high-water mark; stale or duplicate acks
    /// are ignored. Never fails, never blocks beyond the mutex.
    pub fn recv_ack(&self, num_bytes: u64) {
        let mut guard = self.inner.lock();
        guard.flow.record_ack(num_bytes);
        // One signal suffices: submitters are serialized under the mutex,
        // so at most one waiter can make progress per ack.
        self.ack_cv.notify_one();
    }

    /// Mark the writer closed and release every blocked submitter.
    ///
    /// Blocked and subsequent submissions fail with
    /// [`WireError::Shutdown`]. [`recv_ack`](Self::recv_ack) stays
    /// infallible after close. Idempotent.
    pub fn close(&self) {
        let mut guard = self.inner.lock();
        if !guard.closed {
            guard.closed = true;
            tracing::debug!("wire writer closed");
        }
        self.ack_cv.notify_all();
    }

    /// Bytes credited against the flow-control window so far.
    pub fn outgoing_bytes(&self) -> u64 {
        self.inner.lock().flow.outgoing_bytes()
    }

    /// Highest peer acknowledgement observed so far.
    pub fn acknowledged_bytes(&self) -> u64 {
        self.inner.lock().flow.acknowledged_bytes()
    }

    /// Block until the flow-control window admits another fragment, or the
    /// writer is closed. Releases the mutex while parked.
    fn admit(&self, guard: &mut MutexGuard<'_, Inner>) -> Result<()> {
        loop {
            if guard.closed {
                return Err(WireError::Shutdown);
            }
            if !guard.flow.window_full() {
                return Ok(());
            }
            self.ack_cv.wait(guard);
        }
    }
}

/// Hand out the next sequence number for a call, starting at 0.
fn next_seq(seq_nums: &mut HashMap<u32, u32>, tx_code: u32) -> u32 {
    let seq = seq_nums.entry(tx_code).or_insert(0);
    let current = *seq;
    *seq += 1;
    current
}
