//! # binderwire
//!
//! Wire-format writer for a binder-based RPC transport.
//!
//! This crate turns logical RPC stream operations (initial metadata, message
//! payload, trailing metadata) into a strictly ordered sequence of
//! bounded-size IPC transactions across a host-provided message channel,
//! while enforcing a credit-based flow-control window against the peer.
//!
//! The host channel is abstracted behind the [`Binder`] and
//! [`WritableParcel`] capability traits; the host integration injects both
//! at construction.
//!
//! ## Example
//!
//! ```ignore
//! use binderwire::{Transaction, WireWriter, FIRST_CALL_ID};
//! use bytes::Bytes;
//!
//! let writer = WireWriter::new(Box::new(host_binder));
//!
//! let mut tx = Transaction::new(FIRST_CALL_ID, /* is_client */ true);
//! tx.set_method_ref("svc/Method");
//! tx.set_prefix(vec![(Bytes::from_static(b"k"), Bytes::from_static(b"v"))]);
//! tx.set_message_data();
//! tx.push_message_data(Bytes::from(payload));
//! tx.set_suffix(Vec::new());
//!
//! writer.rpc_call(tx)?;            // chunked + flow controlled
//! writer.send_ack(bytes_received)?; // tell the peer what we consumed
//! ```

pub mod binder;
pub mod error;
pub mod flow;
pub mod protocol;
pub mod writer;

pub use binder::{Binder, WritableParcel};
pub use error::{Result, WireError};
pub use protocol::{flags, Metadata, Transaction, BLOCK_SIZE, FIRST_CALL_ID, FLOW_CONTROL_WINDOW};
pub use writer::WireWriter;
