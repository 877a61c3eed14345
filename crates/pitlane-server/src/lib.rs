//! Pitlane HTTP server
//!
//! Rocket transport layer for the robot lap-timing service: route handlers,
//! role guards and response mapping.

pub mod auth;
pub mod builder;
pub mod handlers;
pub mod response;

pub use builder::{ApiState, build_rocket};
