//! Pitlane application layer
//!
//! Use cases orchestrating the domain repository port. HTTP concerns stay in
//! the server crate; store concerns stay behind the port.

pub mod use_cases;

pub use use_cases::RobotService;
