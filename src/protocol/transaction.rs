//! Logical transaction assembly.
//!
//! A [`Transaction`] is one stream operation as handed down by the
//! transport layer: some combination of initial metadata, message payload
//! and trailing metadata for a single call. The writer consumes it by value
//! and decides how many wire fragments it becomes.

use bytes::Bytes;

use super::wire_format::flags;

/// Ordered metadata key/value pairs.
pub type Metadata = Vec<(Bytes, Bytes)>;

/// A logical RPC stream operation to be framed onto the wire.
///
/// Built with the setter methods below, each of which flips its flag bit
/// exactly once. Client and server transactions differ in what they may
/// carry: only clients send a method ref, only servers send a status
/// description or status code.
#[derive(Debug)]
pub struct Transaction {
    tx_code: u32,
    is_client: bool,
    flags: u32,
    method_ref: String,
    prefix_metadata: Metadata,
    suffix_metadata: Metadata,
    status_desc: String,
    message_data: Vec<Bytes>,
}

impl Transaction {
    /// Create an empty transaction for the given call.
    pub fn new(tx_code: u32, is_client: bool) -> Self {
        Self {
            tx_code,
            is_client,
            flags: 0,
            method_ref: String::new(),
            prefix_metadata: Metadata::new(),
            suffix_metadata: Metadata::new(),
            status_desc: String::new(),
            message_data: Vec::new(),
        }
    }

    /// Attach initial metadata. Sets the `PREFIX` flag.
    pub fn set_prefix(&mut self, prefix_metadata: Metadata) {
        debug_assert!(!flags::has_flag(self.flags, flags::PREFIX));
        self.prefix_metadata = prefix_metadata;
        self.flags |= flags::PREFIX;
    }

    /// Set the method ref naming the RPC method on the server.
    ///
    /// Client transactions only; it is serialized iff `PREFIX` is set.
    pub fn set_method_ref(&mut self, method_ref: impl Into<String>) {
        debug_assert!(self.is_client);
        self.method_ref = method_ref.into();
    }

    /// Mark the transaction as carrying message payload. Sets the
    /// `MESSAGE_DATA` flag. Call before [`push_message_data`](Self::push_message_data).
    pub fn set_message_data(&mut self) {
        self.flags |= flags::MESSAGE_DATA;
    }

    /// Append one payload slice. Slice boundaries are preserved on the wire:
    /// an empty slice still becomes a distinct zero-length framed chunk.
    pub fn push_message_data(&mut self, slice: Bytes) {
        debug_assert!(flags::has_flag(self.flags, flags::MESSAGE_DATA));
        self.message_data.push(slice);
    }

    /// Attach trailing metadata. Sets the `SUFFIX` flag.
    ///
    /// The wire format keeps client suffixes empty; a non-empty client
    /// suffix is dropped at encode time (and logged).
    pub fn set_suffix(&mut self, suffix_metadata: Metadata) {
        debug_assert!(!flags::has_flag(self.flags, flags::SUFFIX));
        self.suffix_metadata = suffix_metadata;
        self.flags |= flags::SUFFIX;
    }

    /// Set the human-readable status description. Server transactions only.
    /// Sets the `STATUS_DESCRIPTION` flag; serialized iff `SUFFIX` is set.
    pub fn set_status_description(&mut self, status_desc: impl Into<String>) {
        debug_assert!(!self.is_client);
        debug_assert!(!flags::has_flag(self.flags, flags::STATUS_DESCRIPTION));
        self.status_desc = status_desc.into();
        self.flags |= flags::STATUS_DESCRIPTION;
    }

    /// Pack the status code into the high half of the flags word. Server
    /// transactions only; at most once.
    pub fn set_status(&mut self, status: u16) {
        debug_assert!(!self.is_client);
        debug_assert_eq!(flags::status_of(self.flags), 0);
        self.flags = flags::with_status(self.flags, status);
    }

    /// The transaction code identifying the call.
    #[inline]
    pub fn tx_code(&self) -> u32 {
        self.tx_code
    }

    /// Whether this is a client-side transaction.
    #[inline]
    pub fn is_client(&self) -> bool {
        self.is_client
    }

    /// Whether this is a server-side transaction.
    #[inline]
    pub fn is_server(&self) -> bool {
        !self.is_client
    }

    /// The accumulated flags word (flag bits plus packed status).
    #[inline]
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// The method ref (empty unless set on a client transaction).
    #[inline]
    pub fn method_ref(&self) -> &str {
        &self.method_ref
    }

    /// Initial metadata entries.
    #[inline]
    pub fn prefix_metadata(&self) -> &Metadata {
        &self.prefix_metadata
    }

    /// Trailing metadata entries.
    #[inline]
    pub fn suffix_metadata(&self) -> &Metadata {
        &self.suffix_metadata
    }

    /// The status description (empty unless set on a server transaction).
    #[inline]
    pub fn status_desc(&self) -> &str {
        &self.status_desc
    }

    /// Payload slices in submission order.
    #[inline]
    pub fn message_data(&self) -> &[Bytes] {
        &self.message_data
    }
}
