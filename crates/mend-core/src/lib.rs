//! Core types and trait definitions for the mend sobriety tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod member;
pub mod platform;
pub mod policy;
pub mod record;
pub mod reply;
pub mod store;
pub mod streak;

pub use error::{Error, Result};
