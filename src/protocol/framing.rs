//! Fragment encoder: the on-wire layout for one transaction.
//!
//! Pure over `(transaction, fragment flags, sequence number, parcel)` with
//! no hidden state, so fragment combinations can be exercised independently
//! of scheduling. The writer engine decides which flags each fragment
//! carries; this module only lays out the bytes.

use crate::binder::WritableParcel;
use crate::error::Result;

use super::transaction::Transaction;
use super::wire_format::flags;

/// Write the initial-metadata block: the method ref (clients only) followed
/// by the prefix entry count and each length-prefixed key/value pair.
pub fn write_initial_metadata(tx: &Transaction, parcel: &mut dyn WritableParcel) -> Result<()> {
    if tx.is_client() {
        // Only the client sends a method ref.
        parcel.write_string(tx.method_ref())?;
    }
    parcel.write_i32(tx.prefix_metadata().len() as i32)?;
    for (key, value) in tx.prefix_metadata() {
        parcel.write_byte_array(key)?;
        parcel.write_byte_array(value)?;
    }
    Ok(())
}

/// Write the trailing-metadata block.
///
/// Servers emit an optional status description (iff `STATUS_DESCRIPTION` is
/// set on the transaction) followed by the suffix entry count and pairs.
/// Clients emit nothing; the wire format keeps client suffixes empty.
pub fn write_trailing_metadata(tx: &Transaction, parcel: &mut dyn WritableParcel) -> Result<()> {
    if tx.is_server() {
        if flags::has_flag(tx.flags(), flags::STATUS_DESCRIPTION) {
            parcel.write_string(tx.status_desc())?;
        }
        parcel.write_i32(tx.suffix_metadata().len() as i32)?;
        for (key, value) in tx.suffix_metadata() {
            parcel.write_byte_array(key)?;
            parcel.write_byte_array(value)?;
        }
    } else if !tx.suffix_metadata().is_empty() {
        tracing::error!(
            tx_code = tx.tx_code(),
            "got non-empty suffix metadata from client; dropping it"
        );
    }
    Ok(())
}

/// Encode one complete fragment into a freshly prepared parcel.
///
/// `fragment_flags` describes what this fragment carries; for chunked
/// messages it differs from the transaction's own flags word. `chunk` is the
/// payload slice for `MESSAGE_DATA` fragments (`Some(&[])` frames a
/// zero-length chunk) and is ignored otherwise.
///
/// On a write failure the parcel holds partial contents; the caller must
/// abandon it without transacting.
pub fn encode_fragment(
    tx: &Transaction,
    fragment_flags: u32,
    seq: u32,
    chunk: Option<&[u8]>,
    parcel: &mut dyn WritableParcel,
) -> Result<()> {
    parcel.write_i32(fragment_flags as i32)?;
    parcel.write_i32(seq as i32)?;
    if flags::has_flag(fragment_flags, flags::PREFIX) {
        write_initial_metadata(tx, parcel)?;
    }
    if flags::has_flag(fragment_flags, flags::MESSAGE_DATA) {
        parcel.write_byte_array(chunk.unwrap_or(&[]))?;
    }
    if flags::has_flag(fragment_flags, flags::SUFFIX) {
        write_trailing_metadata(tx, parcel)?;
    }
    Ok(())
}
