//! Pitlane infrastructure layer
//!
//! Configuration loading, logging setup and the in-memory document store
//! adapter behind the domain repository port.

pub mod config;
pub mod logging;
pub mod store;
