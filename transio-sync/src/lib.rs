//! # transio-sync
//!
//! translation.io sync client, per-locale catalog writer, and the pipeline
//! entry points composing them.
//!
//! Call [`pipeline::run`] for a sync (optionally purging unused keys) or
//! [`pipeline::init`] to initialize a remote project. Both take the HTTP
//! transport as an explicit [`Transport`] capability.

pub mod client;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use client::{HttpsTransport, SyncResponse, Transport};
pub use error::SyncError;
pub use pipeline::SyncOutcome;
pub use writer::{HeaderMode, WrittenCatalog};
