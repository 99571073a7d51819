//! Browser host boundary for the desktop shell.
//!
//! This crate is the only place that talks to `web-sys`/`js-sys` APIs with
//! real failure modes or non-determinism: DOM side effects, wall-clock time,
//! randomness, and environment queries. Everything is written so the same
//! call sites compile and behave deterministically off WASM, which keeps the
//! runtime reducer and the app engines testable on the host target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dom;
mod environment;
mod error;
mod random;
mod time;

pub use dom::{download_text_file, focus_element_by_id};
pub use environment::{environment_info, EnvironmentInfo};
pub use error::HostError;
pub use random::random_unit;
pub use time::{unix_time_ms_now, uptime_minutes};
