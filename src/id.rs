//! Task id encoding.
//!
//! Ids are stored as 8-byte big-endian keys so that the engine's
//! lexicographic key order matches numeric id order.

/// Unique task identifier, minted by the store.
pub type TaskId = u64;

/// Encode an id as its big-endian key form.
pub(crate) fn encode_id(id: TaskId) -> [u8; 8] {
    id.to_be_bytes()
}

/// Decode a stored key back to an id. Returns `None` for keys that are
/// not exactly 8 bytes.
pub(crate) fn decode_id(key: &[u8]) -> Option<TaskId> {
    key.try_into().ok().map(u64::from_be_bytes)
}
