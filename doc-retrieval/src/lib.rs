//! Retrieval client for the external document-matching service.
//!
//! Sends a query plus a deployment identifier to the lookup endpoint and
//! returns matched snippets normalized into [`RetrievedDocument`] records.
//! Payload decoding is deliberately tolerant of endpoint evolution; see
//! [`record`] for the shape rules.

mod client;
mod error;

pub mod record;

pub use client::{RetrievalClient, RetrievalConfig};
pub use error::RetrievalError;
pub use record::{DocumentShape, RetrievedDocument};
