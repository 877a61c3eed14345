//! Robot service use-case tests
//!
//! Exercises orchestration against an in-test repository double with
//! deterministic id assignment.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use pitlane_application::RobotService;
use pitlane_domain::error::{Error, Result};
use pitlane_domain::{Document, DocumentId, DocumentRepository, LapTime, Robot};

/// Repository double backed by a Vec, assigning sequential ids
#[derive(Default)]
struct FakeRepository {
    documents: Mutex<Vec<Robot>>,
    next_id: AtomicU64,
}

impl FakeRepository {
    fn with_robots(robots: Vec<Robot>) -> Arc<Self> {
        let repo = Self::default();
        {
            let mut documents = repo.documents.lock().unwrap();
            for mut robot in robots {
                robot.set_id(repo.fresh_id());
                documents.push(robot);
            }
        }
        Arc::new(repo)
    }

    fn fresh_id(&self) -> String {
        format!("{:024x}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[async_trait]
impl DocumentRepository<Robot> for FakeRepository {
    async fn list_all(&self) -> Result<Vec<Robot>> {
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Robot>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == Some(id.as_str()))
            .cloned())
    }

    async fn exists(&self, id: &DocumentId) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn insert_one(&self, mut document: Robot) -> Result<Robot> {
        document.set_id(self.fresh_id());
        self.documents.lock().unwrap().push(document.clone());
        Ok(document)
    }

    async fn replace_one(&self, document: Robot) -> Result<Robot> {
        let mut documents = self.documents.lock().unwrap();
        let slot = documents
            .iter_mut()
            .find(|r| r.id() == document.id())
            .ok_or_else(|| Error::database("replace target missing"))?;
        *slot = document.clone();
        Ok(document)
    }

    async fn delete_by_id(&self, id: &DocumentId) -> Result<()> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|r| r.id() != Some(id.as_str()));
        if documents.len() == before {
            return Err(Error::database("delete target missing"));
        }
        Ok(())
    }
}

fn service() -> (Arc<FakeRepository>, RobotService) {
    let repo = FakeRepository::with_robots(vec![]);
    let service = RobotService::new(repo.clone());
    (repo, service)
}

fn lap(round: i64, ms: i64) -> LapTime {
    LapTime {
        round_number: round,
        time_elapsed_ms: ms,
    }
}

const UNKNOWN_ID: &str = "ffffffffffffffffffffffff";

#[tokio::test]
async fn create_assigns_id() {
    let (_, service) = service();

    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.name.as_deref(), Some("Speedy"));
}

#[tokio::test]
async fn robot_by_id_unknown_is_not_found() {
    let (_, service) = service();

    let err = service.robot_by_id(UNKNOWN_ID).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn robot_by_id_malformed_is_not_found() {
    let (_, service) = service();

    let err = service.robot_by_id("not-an-id").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_forces_path_id_over_payload_id() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();
    let path_id = created.id.clone().unwrap();

    let mut payload = Robot::named("Renamed");
    payload.id = Some(UNKNOWN_ID.to_string());

    let updated = service.update_robot(&path_id, payload).await.unwrap();

    assert_eq!(updated.id.as_deref(), Some(path_id.as_str()));
    assert_eq!(updated.name.as_deref(), Some("Renamed"));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (_, service) = service();

    let err = service
        .update_robot(UNKNOWN_ID, Robot::named("Ghost"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_returns_snapshot_and_removes() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();
    let id = created.id.clone().unwrap();

    let deleted = service.delete_robot(&id).await.unwrap();
    assert_eq!(deleted, created);

    let err = service.robot_by_id(&id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let (_, service) = service();

    let err = service.delete_robot(UNKNOWN_ID).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn lap_times_default_to_empty() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();

    let laps = service.lap_times(created.id.as_deref().unwrap()).await.unwrap();
    assert!(laps.is_empty());
}

#[tokio::test]
async fn lap_times_for_unknown_robot_is_not_found() {
    let (_, service) = service();

    let err = service.lap_times(UNKNOWN_ID).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn capture_appends_for_new_round() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();
    let id = created.id.clone().unwrap();

    service.capture_lap_time(&id, 1, lap(0, 500)).await.unwrap();
    service.capture_lap_time(&id, 2, lap(0, 510)).await.unwrap();

    let laps = service.lap_times(&id).await.unwrap();
    assert_eq!(laps.len(), 2);
}

#[tokio::test]
async fn capture_replaces_for_existing_round() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();
    let id = created.id.clone().unwrap();

    service.capture_lap_time(&id, 1, lap(0, 500)).await.unwrap();
    let stored = service.capture_lap_time(&id, 1, lap(0, 480)).await.unwrap();

    assert_eq!(stored, lap(1, 480));
    let laps = service.lap_times(&id).await.unwrap();
    assert_eq!(laps, vec![lap(1, 480)]);
}

#[tokio::test]
async fn capture_path_round_wins_over_payload_round() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();
    let id = created.id.clone().unwrap();

    let stored = service.capture_lap_time(&id, 3, lap(9, 500)).await.unwrap();

    assert_eq!(stored.round_number, 3);
}

#[tokio::test]
async fn capture_rejects_round_below_one() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();
    let id = created.id.clone().unwrap();

    let err = service.capture_lap_time(&id, 0, lap(0, 500)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn capture_rejects_time_below_one() {
    let (_, service) = service();
    let created = service.create_robot(Robot::named("Speedy")).await.unwrap();
    let id = created.id.clone().unwrap();

    let err = service.capture_lap_time(&id, 1, lap(0, 0)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn capture_for_unknown_robot_is_not_found() {
    let (_, service) = service();

    let err = service
        .capture_lap_time(UNKNOWN_ID, 1, lap(0, 500))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn capture_validates_before_touching_the_store() {
    let (repo, service) = service();

    // Bounds failure on an unknown robot must be a 400-kind error, not 404.
    let err = service
        .capture_lap_time(UNKNOWN_ID, 0, lap(0, 500))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(repo.documents.lock().unwrap().is_empty());
}
