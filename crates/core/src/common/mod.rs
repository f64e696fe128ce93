//! Common types shared across the simulator core.
//!
//! This module gathers the cross-cutting vocabulary of the crate:
//! 1. **Errors:** The single [`error::Error`] enum and result alias.
//! 2. **Warnings:** The non-fatal [`warn::Warning`] side channel and sink trait.
//! 3. **Identifiers:** [`id::StreamId`] and [`id::ModuleId`] newtypes.
//! 4. **Contracts:** The [`bit::Bit`] and [`stream::Bitstream`] traits both
//!    encodings implement.

/// Bit capability trait shared by both encodings.
pub mod bit;
/// Error definitions and result alias.
pub mod error;
/// Stream and module identifier newtypes.
pub mod id;
/// Shared bitstream queue protocol.
pub mod stream;
/// Non-fatal warning side channel (saturation, operand correlation).
pub mod warn;

pub use bit::Bit;
pub use error::{Error, Result};
pub use id::{ModuleId, StreamId};
pub use stream::Bitstream;
pub use warn::{LogSink, Warning, WarningSink};
