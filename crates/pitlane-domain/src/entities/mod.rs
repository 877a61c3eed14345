//! Domain entities

mod robot;

pub use robot::{LapTime, Robot};
