//! # provkit-core: Foundational Types
//!
//! The leaf crate of the provkit workspace. It defines what every other
//! crate shares: the error taxonomy, UTC timestamps, typed assertion
//! payloads, and the seekable stream contract used to move bytes to and
//! from the external signing engine.
//!
//! ## Key Design Principles
//!
//! 1. **Typed payloads.** Free-form assertion data is an explicit sum type,
//!    [`AssertionPayload`], with a `Raw` case for the stringify fallback.
//!
//! 2. **One timestamp format.** [`Timestamp`] renders `YYYY-MM-DDTHH:MM:SSZ`
//!    in UTC, with no sub-seconds.
//!
//! 3. **Clamped streams.** [`Stream`] seeks never fail on range; both the
//!    in-memory and the file-backed stream clamp into `[0, len]`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `provkit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod payload;
pub mod stream;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{ParseError, ProvError, SigningError, SigningStage};
pub use payload::{AssertionPayload, PayloadMap};
pub use stream::{FileMode, FileStream, MemoryStream, SeekMode, Stream, StreamIo};
pub use temporal::Timestamp;
