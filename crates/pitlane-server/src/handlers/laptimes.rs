//! Lap-time handlers
//!
//! Lap times live embedded in their robot document. Listing is open; capture
//! requires the sensor role via the [`LapCapture`] guard.

use pitlane_domain::LapTime;
use rocket::serde::json::Json;
use rocket::{State, get, put};

use crate::auth::LapCapture;
use crate::builder::ApiState;
use crate::response::ApiError;

/// List responder: 200 with a body, or a bare 204
#[derive(rocket::Responder)]
pub enum LapTimeList {
    /// At least one lap time captured
    #[response(status = 200)]
    Full(Json<Vec<LapTime>>),
    /// No lap times captured yet
    #[response(status = 204)]
    Empty(()),
}

/// List a robot's lap times; 404 for an unknown robot, 204 when none are
/// captured yet
#[get("/<id>/laptimes")]
pub async fn list_lap_times(state: &State<ApiState>, id: &str) -> Result<LapTimeList, ApiError> {
    let laps = state.robots.lap_times(id).await?;
    if laps.is_empty() {
        Ok(LapTimeList::Empty(()))
    } else {
        Ok(LapTimeList::Full(Json(laps)))
    }
}

/// Capture a lap time for one round, replacing any time already stored for
/// that round. The round number from the path wins over the payload.
#[put("/<id>/laptimes/<round_id>", data = "<lap>")]
pub async fn capture_lap_time(
    _access: LapCapture,
    state: &State<ApiState>,
    id: &str,
    round_id: i64,
    lap: Option<Json<LapTime>>,
) -> Result<Json<LapTime>, ApiError> {
    let Some(lap) = lap else {
        return Err(ApiError::empty_body());
    };

    Ok(Json(
        state
            .robots
            .capture_lap_time(id, round_id, lap.into_inner())
            .await?,
    ))
}
