//! Core library for the SchoolHub terminal client.
//!
//! Hosts the identity provider client capability, session event plumbing,
//! configuration, and logging setup. UI lives in `schoolhub-tui`.

pub mod config;
pub mod identity;
pub mod logging;
