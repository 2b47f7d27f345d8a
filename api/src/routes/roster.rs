use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

use db::{
    object_id::{SubmissionId, TeamId},
    team_assignments::{self, RosterEntry},
    teams, PoolExt,
};
use sideline_db as db;

use crate::{roster::RosterCounts, shared_state::State, Error};

#[derive(Debug, Serialize)]
struct RosterResponse {
    team_id: TeamId,
    entries: Vec<RosterEntry>,
    counts: RosterCounts,
}

async fn get_roster(
    Extension(ref state): Extension<State>,
    Path(team_id): Path<TeamId>,
) -> Result<impl IntoResponse, Error> {
    let organization_id = state.organization_id;

    let response = state
        .db
        .interact(move |conn| {
            verify_team(conn, team_id, organization_id)?;
            let entries = team_assignments::roster_for_team(conn, team_id)?;
            let statuses = entries.iter().map(|e| e.status).collect::<Vec<_>>();
            Ok::<_, Error>(RosterResponse {
                team_id,
                entries,
                counts: RosterCounts::from_statuses(&statuses),
            })
        })
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[derive(Debug, Deserialize)]
struct AssignBatchInput {
    submission_ids: Vec<SubmissionId>,
}

#[derive(Debug, Serialize)]
struct AssignBatchResponse {
    added: usize,
    counts: RosterCounts,
}

/// One drop of a multi-selection. The whole batch lands in a single
/// transaction; ids already on the roster are skipped rather than erroring,
/// so re-dropping a selection is harmless.
async fn assign_submissions(
    Extension(ref state): Extension<State>,
    Path(team_id): Path<TeamId>,
    Json(body): Json<AssignBatchInput>,
) -> Result<impl IntoResponse, Error> {
    let organization_id = state.organization_id;

    let response = state
        .db
        .transaction(move |conn| {
            verify_team(conn, team_id, organization_id)?;
            let added = team_assignments::assign_batch(conn, team_id, &body.submission_ids)?;
            let statuses = team_assignments::statuses_for_team(conn, team_id)?;
            Ok::<_, Error>(AssignBatchResponse {
                added,
                counts: RosterCounts::from_statuses(&statuses),
            })
        })
        .await?;

    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// Removal is a hard delete of the assignment row. Re-assigning the athlete
/// later creates a fresh row with no memory of this one.
async fn unassign_submission(
    Extension(ref state): Extension<State>,
    Path((team_id, submission_id)): Path<(TeamId, SubmissionId)>,
) -> Result<impl IntoResponse, Error> {
    let organization_id = state.organization_id;

    state
        .db
        .interact(move |conn| {
            verify_team(conn, team_id, organization_id)?;
            let deleted = team_assignments::unassign(conn, team_id, submission_id)?;
            if deleted == 0 {
                return Err(Error::AssignmentNotFound);
            }
            Ok(())
        })
        .await?;

    Ok((StatusCode::OK, Json(json!({}))))
}

fn verify_team(
    conn: &mut PgConnection,
    team_id: TeamId,
    organization_id: db::object_id::OrganizationId,
) -> Result<(), Error> {
    use db::teams::dsl;

    let exists = teams::table
        .filter(dsl::id.eq(team_id))
        .filter(dsl::organization_id.eq(organization_id))
        .count()
        .get_result::<i64>(conn)?;

    if exists == 0 {
        return Err(Error::ObjectNotFound("team"));
    }
    Ok(())
}

pub fn configure() -> Router {
    Router::new()
        .route("/:team_id/roster", get(get_roster))
        .route("/:team_id/roster", post(assign_submissions))
        .route("/:team_id/roster/:submission_id", delete(unassign_submission))
}
