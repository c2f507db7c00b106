//! Collaborator contracts for the host IPC channel.
//!
//! The writer drives two capability interfaces injected at construction:
//! [`Binder`], the host primitive that actually delivers transactions, and
//! [`WritableParcel`], the serialization buffer attached to the transaction
//! currently being prepared. Neither is implemented here; the host
//! integration (or a test double) provides both.

use crate::error::Result;

/// Append-only serialization buffer for one in-flight transaction.
///
/// All integers are written little-endian. "Length-prefixed" writes emit a
/// 32-bit length word followed by the raw bytes. Every write is fallible;
/// a failed write aborts the surrounding transaction and the parcel's
/// partial contents are never transmitted.
pub trait WritableParcel {
    /// Write a 32-bit integer.
    fn write_i32(&mut self, value: i32) -> Result<()>;

    /// Write a 64-bit integer.
    fn write_i64(&mut self, value: i64) -> Result<()>;

    /// Write a length-prefixed string.
    fn write_string(&mut self, value: &str) -> Result<()>;

    /// Write a length-prefixed byte array (may be empty).
    fn write_byte_array(&mut self, data: &[u8]) -> Result<()>;

    /// Current serialized size of the parcel in bytes.
    fn data_size(&self) -> u64;
}

/// Host IPC endpoint that transmits prepared parcels.
///
/// The writer owns its binder exclusively for the writer's lifetime and only
/// ever touches it under the writer mutex, so implementations do not need
/// internal synchronization.
pub trait Binder {
    /// Reset the current parcel to empty, ready for a new transaction.
    fn prepare_transaction(&mut self) -> Result<()>;

    /// The parcel for the transaction being prepared.
    ///
    /// The returned reference is only meaningful until the next call to
    /// [`prepare_transaction`](Binder::prepare_transaction) or
    /// [`transact`](Binder::transact).
    fn writable_parcel(&mut self) -> &mut dyn WritableParcel;

    /// Transmit the prepared parcel under the given transaction code.
    ///
    /// Consumes the parcel; it must be prepared again before reuse.
    fn transact(&mut self, tx_code: u32) -> Result<()>;
}
