//! Identifier newtypes for streams and registered modules.
//!
//! Stream identifiers are allocated from a process-wide atomic counter:
//! uniqueness is the only requirement, so a lock-free counter avoids having to
//! thread an allocator through every constructor. Module identifiers are local
//! to a [`crate::registry::Registry`] instance.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::Serialize;

/// Identifier of a stochastic bitstream instance.
///
/// Every stream — and every derived operator output — carries a distinct id.
/// Operators that assume statistical independence compare operand ids to
/// detect sample reuse without decorrelation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct StreamId(pub u32);

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl StreamId {
    /// The reserved id carried by zero-seed bits (delay-buffer fill values).
    ///
    /// Id 0 is never allocated to a live stream.
    pub const SEED: Self = Self(0);
}

/// Identifier of a module recorded in a [`crate::registry::Registry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ModuleId(pub u32);

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Next stream id to hand out. Id 0 is reserved for [`StreamId::SEED`].
static NEXT_STREAM_ID: AtomicU32 = AtomicU32::new(1);

/// Allocates a fresh, process-unique stream id.
pub(crate) fn fresh_stream_id() -> StreamId {
    StreamId(NEXT_STREAM_ID.fetch_add(1, Ordering::Relaxed))
}
