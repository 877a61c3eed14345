//! Shared test setup: a Rocket client over a fresh in-memory store

use std::sync::Arc;

use pitlane_application::RobotService;
use pitlane_domain::Robot;
use pitlane_infrastructure::config::AppConfig;
use pitlane_infrastructure::store::InMemoryCollection;
use rocket::local::asynchronous::Client;

/// Client with authorization disabled (the development default)
pub async fn client() -> Client {
    client_with_config(AppConfig::default()).await
}

/// Client over the given configuration
pub async fn client_with_config(config: AppConfig) -> Client {
    let repository = Arc::new(InMemoryCollection::<Robot>::new());
    let service = Arc::new(RobotService::new(repository));
    Client::tracked(pitlane_server::build_rocket(&config, service))
        .await
        .expect("valid rocket instance")
}
