//! Wire-format constants: flag bits, transaction codes, and size limits.
//!
//! Every RPC fragment starts with two fixed 32-bit words:
//! ```text
//! ┌──────────┬──────────┬────────────────────────────────┐
//! │ flags    │ seq_num  │ flag-dependent fields ...      │
//! │ 4 bytes  │ 4 bytes  │ (metadata, chunk, status desc) │
//! │ u32 LE   │ u32 LE   │                                │
//! └──────────┴──────────┴────────────────────────────────┘
//! ```
//!
//! All multi-byte integers are Little Endian. The flag-dependent fields are
//! laid out by [`framing`](crate::protocol::framing).

/// Control-plane transaction code: transport setup handshake.
pub const SETUP_TRANSPORT: u32 = 1;

/// Control-plane transaction code: orderly transport shutdown.
pub const SHUTDOWN_TRANSPORT: u32 = 2;

/// Control-plane transaction code: flow-control acknowledgement.
///
/// The payload of an acknowledgement is a single 64-bit byte count; it
/// carries no flags/seq prefix.
pub const ACKNOWLEDGE_BYTES: u32 = 3;

/// Control-plane transaction code: keepalive probe.
pub const PING: u32 = 4;

/// Control-plane transaction code: keepalive reply.
pub const PING_RESPONSE: u32 = 5;

/// First transaction code usable by RPC calls.
///
/// Codes in `[0, FIRST_CALL_ID)` are reserved for the control plane; the
/// writer asserts this lower bound on every call.
pub const FIRST_CALL_ID: u32 = 0x100;

/// Last transaction code accepted by the host channel.
pub const LAST_CALL_ID: u32 = 0x00ff_ffff;

/// Fragment payload cap. Messages longer than this are split into chunks of
/// at most this many bytes.
pub const BLOCK_SIZE: usize = 16 * 1024;

/// Maximum transmitted-but-unacknowledged bytes (counted as serialized
/// parcel size) before senders block.
pub const FLOW_CONTROL_WINDOW: u64 = 128 * 1024;

/// Flag bits of the per-fragment flags word.
///
/// The numeric values are fixed by peer compatibility: the peer reader
/// decodes the same bit layout. The low 16 bits hold flag bits; the high 16
/// bits carry the server's status code (see [`with_status`]).
pub mod flags {
    /// Fragment carries initial metadata (and the method ref if client).
    pub const PREFIX: u32 = 0x1;
    /// Fragment carries a payload chunk.
    pub const MESSAGE_DATA: u32 = 0x2;
    /// Fragment carries trailing metadata (and the status desc if server).
    pub const SUFFIX: u32 = 0x4;
    /// Peer-initiated out-of-band close. Read-side only; the writer never
    /// sets it.
    pub const OUT_OF_BAND_CLOSE: u32 = 0x8;
    /// Peer expects the call to carry exactly one message. Read-side only.
    pub const EXPECT_SINGLE_MESSAGE: u32 = 0x10;
    /// The suffix block includes a status description (server only).
    pub const STATUS_DESCRIPTION: u32 = 0x20;
    /// Payload chunk is a host parcelable rather than raw bytes. Read-side
    /// only.
    pub const MESSAGE_DATA_IS_PARCELABLE: u32 = 0x40;
    /// Payload continues in a subsequent fragment of the same call.
    pub const MESSAGE_DATA_PARTIAL: u32 = 0x80;

    /// Bit position of the server status code within the flags word.
    pub const STATUS_SHIFT: u32 = 16;

    /// Check if a specific flag is set.
    #[inline]
    pub fn has_flag(flags: u32, flag: u32) -> bool {
        flags & flag != 0
    }

    /// Pack a server status code into the high half of a flags word.
    #[inline]
    pub fn with_status(flags: u32, status: u16) -> u32 {
        flags | (u32::from(status) << STATUS_SHIFT)
    }

    /// Extract the server status code from a flags word.
    #[inline]
    pub fn status_of(flags: u32) -> u16 {
        (flags >> STATUS_SHIFT) as u16
    }
}
