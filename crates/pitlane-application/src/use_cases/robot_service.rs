//! Robot service use case
//!
//! Validation, existence checks and orchestration for the robot collection
//! and its embedded lap times. Outcomes surface as domain errors; the server
//! layer maps them to HTTP statuses.

use std::sync::Arc;

use pitlane_domain::error::{Error, Result};
use pitlane_domain::{Document, DocumentId, DocumentRepository, LapTime, Robot};

/// Application service for the robot collection
pub struct RobotService {
    repository: Arc<dyn DocumentRepository<Robot>>,
}

impl RobotService {
    /// Create the service over a repository implementation
    pub fn new(repository: Arc<dyn DocumentRepository<Robot>>) -> Self {
        Self { repository }
    }

    /// Every robot in the collection
    pub async fn list_robots(&self) -> Result<Vec<Robot>> {
        self.repository.list_all().await
    }

    /// Look up one robot by id
    pub async fn robot_by_id(&self, id: &str) -> Result<Robot> {
        let id = Self::parse_id(id)?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found("robot"))
    }

    /// Insert a new robot; the store assigns its id
    pub async fn create_robot(&self, robot: Robot) -> Result<Robot> {
        self.repository.insert_one(robot).await
    }

    /// Full replace of an existing robot.
    ///
    /// Existence is probed separately before the write, and the path id
    /// always wins over whatever `Id` the payload carried.
    pub async fn update_robot(&self, id: &str, mut robot: Robot) -> Result<Robot> {
        let parsed = Self::parse_id(id)?;
        if !self.repository.exists(&parsed).await? {
            return Err(Error::not_found("robot"));
        }
        robot.set_id(parsed.to_string());
        self.repository.replace_one(robot).await
    }

    /// Delete a robot, returning the removed document
    pub async fn delete_robot(&self, id: &str) -> Result<Robot> {
        let parsed = Self::parse_id(id)?;
        let robot = self
            .repository
            .find_by_id(&parsed)
            .await?
            .ok_or_else(|| Error::not_found("robot"))?;
        self.repository.delete_by_id(&parsed).await?;
        Ok(robot)
    }

    /// Lap times for a robot, an absent collection defaulting to empty
    pub async fn lap_times(&self, id: &str) -> Result<Vec<LapTime>> {
        let robot = self.robot_by_id(id).await?;
        Ok(robot.lap_times.unwrap_or_default())
    }

    /// Record a lap time for one round of a robot.
    ///
    /// The round number from the path always wins over the payload. A time
    /// already captured for the round is replaced, never duplicated. The
    /// whole document is written back; there is no version check, so
    /// concurrent captures on the same robot are last-writer-wins.
    pub async fn capture_lap_time(
        &self,
        id: &str,
        round_number: i64,
        mut lap: LapTime,
    ) -> Result<LapTime> {
        lap.round_number = round_number;
        if lap.round_number < 1 {
            return Err(Error::invalid_argument("RoundNumber must be 1 or higher"));
        }
        if lap.time_elapsed_ms < 1 {
            return Err(Error::invalid_argument("TimeElapsedMs must be 1 or higher"));
        }

        let mut robot = self.robot_by_id(id).await?;
        robot.record_lap_time(lap);
        self.repository.replace_one(robot).await?;
        Ok(lap)
    }

    // An id the store could never have issued addresses nothing, so a
    // malformed id folds into not-found rather than bad-request.
    fn parse_id(raw: &str) -> Result<DocumentId> {
        DocumentId::parse(raw).map_err(|_| Error::not_found("robot"))
    }
}
