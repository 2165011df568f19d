//! Lookup endpoint access
//!
//! The `LookupBackend` trait abstracts the two read-only autocomplete
//! endpoints; `HttpBackend` talks to the real API and the worker runs
//! searches off the UI thread.

mod backend;
mod http;
mod worker;

pub use backend::{LookupBackend, run_search};
pub use http::HttpBackend;
pub use worker::{SearchOutcome, SearchWorker, spawn_worker};
