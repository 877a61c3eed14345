//! Robot collection handlers
//!
//! CRUD endpoints over `/robots`. Reads are open; writes require the admin
//! or referee role via the [`RobotWrite`] guard.

use pitlane_domain::Robot;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, uri};

use crate::auth::RobotWrite;
use crate::builder::ApiState;
use crate::response::ApiError;

/// List responder: 200 with a body, or a bare 204
#[derive(rocket::Responder)]
pub enum RobotList {
    /// Non-empty collection
    #[response(status = 200)]
    Full(Json<Vec<Robot>>),
    /// Empty collection
    #[response(status = 204)]
    Empty(()),
}

/// List every robot; 204 when the collection is empty
#[get("/")]
pub async fn list_robots(state: &State<ApiState>) -> Result<RobotList, ApiError> {
    let robots = state.robots.list_robots().await?;
    if robots.is_empty() {
        Ok(RobotList::Empty(()))
    } else {
        Ok(RobotList::Full(Json(robots)))
    }
}

/// Fetch one robot by id; malformed ids fold into 404
#[get("/<id>")]
pub async fn get_robot(state: &State<ApiState>, id: &str) -> Result<Json<Robot>, ApiError> {
    Ok(Json(state.robots.robot_by_id(id).await?))
}

/// Create a robot; the store assigns its id.
///
/// Responds 201 with a `Location` header pointing at the new entity.
#[post("/", data = "<robot>")]
pub async fn create_robot(
    _access: RobotWrite,
    state: &State<ApiState>,
    robot: Option<Json<Robot>>,
) -> Result<Created<Json<Robot>>, ApiError> {
    let Some(robot) = robot else {
        return Err(ApiError::empty_body());
    };

    let created = state.robots.create_robot(robot.into_inner()).await?;
    let id = created.id.clone().unwrap_or_default();
    let location = uri!("/robots", get_robot(id = &id)).to_string();
    Ok(Created::new(location).body(Json(created)))
}

/// Full replace of an existing robot; the path id always wins over the
/// payload's `Id`
#[put("/<id>", data = "<robot>")]
pub async fn update_robot(
    _access: RobotWrite,
    state: &State<ApiState>,
    id: &str,
    robot: Option<Json<Robot>>,
) -> Result<Json<Robot>, ApiError> {
    let Some(robot) = robot else {
        return Err(ApiError::empty_body());
    };

    Ok(Json(state.robots.update_robot(id, robot.into_inner()).await?))
}

/// Delete a robot, returning the removed document
#[delete("/<id>")]
pub async fn delete_robot(
    _access: RobotWrite,
    state: &State<ApiState>,
    id: &str,
) -> Result<Json<Robot>, ApiError> {
    Ok(Json(state.robots.delete_robot(id).await?))
}
