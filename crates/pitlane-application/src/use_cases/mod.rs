//! Application use cases

mod robot_service;

pub use robot_service::RobotService;
