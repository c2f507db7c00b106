//! Protocol module - wire-format constants, transactions, and framing.
//!
//! This module defines the writer's half of the binder wire format:
//! - flag bits, transaction codes and size limits
//! - the logical [`Transaction`] assembled by the transport layer
//! - the fragment encoder that lays a transaction out into a parcel

pub mod framing;
mod transaction;
mod wire_format;

pub use transaction::{Metadata, Transaction};
pub use wire_format::{
    flags, ACKNOWLEDGE_BYTES, BLOCK_SIZE, FIRST_CALL_ID, FLOW_CONTROL_WINDOW, LAST_CALL_ID, PING,
    PING_RESPONSE, SETUP_TRANSPORT, SHUTDOWN_TRANSPORT,
};
