use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::common::{ApiError, Identity, TeamId};
use crate::domains::teams::actions::{self, AddMemberInput, CreateTeamInput, UpdateTeamInput};
use crate::server::app::AppState;

/// POST /api/teams
pub async fn create_team_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Json(input): Json<CreateTeamInput>,
) -> Result<impl IntoResponse, ApiError> {
    let team = actions::create_team(&identity, input, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /api/teams - every team visible to the caller.
pub async fn list_teams_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, ApiError> {
    let teams = actions::visible_teams(&identity, &state.db_pool).await?;

    Ok(Json(teams))
}

/// GET /api/teams/{id}
pub async fn get_team_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<TeamId>,
) -> Result<impl IntoResponse, ApiError> {
    let team = actions::get_team(&identity, id, &state.db_pool).await?;

    Ok(Json(team))
}

/// PUT /api/teams/{id}
pub async fn update_team_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<TeamId>,
    Json(input): Json<UpdateTeamInput>,
) -> Result<impl IntoResponse, ApiError> {
    let team = actions::update_team(&identity, id, input, &state.db_pool).await?;

    Ok(Json(team))
}

/// DELETE /api/teams/{id}
pub async fn delete_team_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<TeamId>,
) -> Result<impl IntoResponse, ApiError> {
    actions::delete_team(&identity, id, &state.db_pool).await?;

    Ok(Json(json!({ "success": true })))
}

/// GET /api/teams/{id}/members
pub async fn list_members_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<TeamId>,
) -> Result<impl IntoResponse, ApiError> {
    let members = actions::list_members(&identity, id, &state.db_pool).await?;

    Ok(Json(members))
}

/// POST /api/teams/{id}/members
pub async fn add_member_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<TeamId>,
    Json(input): Json<AddMemberInput>,
) -> Result<impl IntoResponse, ApiError> {
    let member = actions::add_member(&identity, id, input, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(member)))
}
