//! Rocket assembly
//!
//! Builds the Rocket instance from configuration: managed state, route
//! mounts and the plain-text error catchers.

use std::net::IpAddr;
use std::sync::Arc;

use pitlane_application::RobotService;
use pitlane_infrastructure::config::AppConfig;
use rocket::config::Config as RocketConfig;
use rocket::{Build, Rocket, catch, catchers, routes};

use crate::handlers::{health, laptimes, robots};
use crate::response::{EMPTY_BODY_MESSAGE, NOT_FOUND_MESSAGE};

/// Shared handler state
pub struct ApiState {
    /// Robot use cases
    pub robots: Arc<RobotService>,
}

#[catch(400)]
fn bad_request() -> &'static str {
    EMPTY_BODY_MESSAGE
}

#[catch(401)]
fn unauthorized() -> &'static str {
    "Missing or invalid credentials"
}

#[catch(403)]
fn forbidden() -> &'static str {
    "Insufficient role"
}

#[catch(404)]
fn not_found() -> &'static str {
    NOT_FOUND_MESSAGE
}

/// Assemble the Rocket instance with all routes, catchers and state
pub fn build_rocket(config: &AppConfig, robots: Arc<RobotService>) -> Rocket<Build> {
    rocket::custom(rocket_config(config))
        .manage(ApiState { robots })
        .manage(Arc::new(config.auth.clone()))
        .mount(
            "/robots",
            routes![
                robots::list_robots,
                robots::get_robot,
                robots::create_robot,
                robots::update_robot,
                robots::delete_robot,
                laptimes::list_lap_times,
                laptimes::capture_lap_time,
            ],
        )
        .mount("/", routes![health::health])
        .register(
            "/",
            catchers![bad_request, unauthorized, forbidden, not_found],
        )
}

fn rocket_config(config: &AppConfig) -> RocketConfig {
    let address: IpAddr = config
        .server
        .host
        .parse()
        .unwrap_or_else(|_| IpAddr::from([127, 0, 0, 1]));
    RocketConfig {
        address,
        port: config.server.port,
        ..RocketConfig::default()
    }
}
