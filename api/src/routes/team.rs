use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use db::{
    object_id::{SeasonId, TeamId},
    seasons,
    teams::{self, NewTeam},
    Gender, PoolExt, TeamStatus,
};
use sideline_db as db;

use crate::{shared_state::State, Error};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new("^#[0-9a-fA-F]{6}$").unwrap());

#[derive(Debug, Deserialize)]
pub struct TeamInput {
    pub season_id: SeasonId,
    pub title: String,
    pub sport: String,
    pub gender: Gender,
    pub grade_min: i32,
    pub grade_max: i32,
    #[serde(default)]
    pub status: TeamStatus,
    pub roster_cap: Option<i32>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

impl TeamInput {
    /// Field checks the UI runs before submitting; repeated here so a bad
    /// payload never reaches the database.
    fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation {
                field: "title",
                message: "team title is required".to_string(),
            });
        }
        if self.grade_min > self.grade_max {
            return Err(Error::Validation {
                field: "grade_min",
                message: "minimum grade is above the maximum".to_string(),
            });
        }
        if let Some(cap) = self.roster_cap {
            if cap <= 0 {
                return Err(Error::Validation {
                    field: "roster_cap",
                    message: "roster cap must be positive".to_string(),
                });
            }
        }
        for (field, color) in [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
        ] {
            if let Some(color) = color {
                if !HEX_COLOR.is_match(color) {
                    return Err(Error::Validation {
                        field,
                        message: format!("{color} is not a #rrggbb color"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Queryable, Selectable)]
#[diesel(table_name = db::teams)]
pub struct TeamOutput {
    pub id: TeamId,
    pub season_id: SeasonId,
    pub title: String,
    pub sport: String,
    pub gender: Gender,
    pub grade_min: i32,
    pub grade_max: i32,
    pub status: TeamStatus,
    pub roster_cap: Option<i32>,
    pub avatar_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ListTeamsQuery {
    season: Option<SeasonId>,
}

/// Teams in the given season, or in the resolved active season when the rail
/// has not picked one yet.
async fn list_teams(
    Extension(ref state): Extension<State>,
    Query(query): Query<ListTeamsQuery>,
) -> Result<impl IntoResponse, Error> {
    use db::teams::dsl;
    let organization_id = state.organization_id;

    let objects = state
        .db
        .interact(move |conn| {
            let season_id = match query.season {
                Some(season_id) => season_id,
                None => seasons::active_or_first(conn, organization_id)?
                    .ok_or(Error::ObjectNotFound("season"))?
                    .id,
            };

            teams::table
                .select(TeamOutput::as_select())
                .filter(dsl::organization_id.eq(organization_id))
                .filter(dsl::season_id.eq(season_id))
                .order(dsl::title.asc())
                .load::<TeamOutput>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(objects)))
}

async fn get_team(
    Extension(ref state): Extension<State>,
    Path(team_id): Path<TeamId>,
) -> Result<impl IntoResponse, Error> {
    use db::teams::dsl;
    let organization_id = state.organization_id;

    let team = state
        .db
        .interact(move |conn| {
            teams::table
                .select(TeamOutput::as_select())
                .filter(dsl::id.eq(team_id))
                .filter(dsl::organization_id.eq(organization_id))
                .first::<TeamOutput>(conn)
                .optional()
                .map_err(Error::from)
        })
        .await?
        .ok_or(Error::ObjectNotFound("team"))?;

    Ok((StatusCode::OK, Json(team)))
}

async fn new_team(
    Extension(ref state): Extension<State>,
    Json(body): Json<TeamInput>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let value = NewTeam {
        id: TeamId::new(),
        organization_id: state.organization_id,
        season_id: body.season_id,
        title: body.title,
        sport: body.sport,
        gender: body.gender,
        grade_min: body.grade_min,
        grade_max: body.grade_max,
        status: body.status,
        roster_cap: body.roster_cap,
        primary_color: body.primary_color,
        secondary_color: body.secondary_color,
    };

    let result = state
        .db
        .interact(move |conn| {
            diesel::insert_into(teams::table)
                .values(&value)
                .returning(TeamOutput::as_select())
                .get_result::<TeamOutput>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::ACCEPTED, Json(result)))
}

async fn write_team(
    Extension(ref state): Extension<State>,
    Path(team_id): Path<TeamId>,
    Json(body): Json<TeamInput>,
) -> Result<impl IntoResponse, Error> {
    use db::teams::dsl;
    body.validate()?;

    let organization_id = state.organization_id;
    let result = state
        .db
        .interact(move |conn| {
            diesel::update(teams::table)
                .filter(dsl::id.eq(team_id))
                .filter(dsl::organization_id.eq(organization_id))
                .set((
                    dsl::season_id.eq(body.season_id),
                    dsl::title.eq(body.title),
                    dsl::sport.eq(body.sport),
                    dsl::gender.eq(body.gender),
                    dsl::grade_min.eq(body.grade_min),
                    dsl::grade_max.eq(body.grade_max),
                    dsl::status.eq(body.status),
                    dsl::roster_cap.eq(body.roster_cap),
                    dsl::primary_color.eq(body.primary_color),
                    dsl::secondary_color.eq(body.secondary_color),
                    dsl::updated.eq(Utc::now()),
                ))
                .returning(TeamOutput::as_select())
                .get_result::<TeamOutput>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Deleting a team removes its staff rows and nulls the legacy single-team
/// reference on submissions. Assignment rows for other teams are untouched;
/// an athlete's membership elsewhere survives this delete.
async fn delete_team(
    Extension(ref state): Extension<State>,
    Path(team_id): Path<TeamId>,
) -> Result<impl IntoResponse, Error> {
    use db::submissions::dsl as submissions_dsl;
    use db::team_members::dsl as members_dsl;
    use db::teams::dsl;

    let organization_id = state.organization_id;
    state
        .db
        .transaction(move |conn| {
            diesel::delete(db::team_members::table)
                .filter(members_dsl::team_id.eq(team_id))
                .execute(conn)?;

            diesel::update(db::submissions::table)
                .filter(submissions_dsl::team_id.eq(team_id))
                .set(submissions_dsl::team_id.eq(None::<TeamId>))
                .execute(conn)?;

            let deleted = diesel::delete(teams::table)
                .filter(dsl::id.eq(team_id))
                .filter(dsl::organization_id.eq(organization_id))
                .execute(conn)?;

            if deleted == 0 {
                return Err(Error::ObjectNotFound("team"));
            }

            Ok(())
        })
        .await?;

    Ok((StatusCode::OK, Json(json!({}))))
}

pub fn configure() -> Router {
    Router::new()
        .route("/", get(list_teams))
        .route("/", post(new_team))
        .route("/:team_id", get(get_team))
        .route("/:team_id", put(write_team))
        .route("/:team_id", delete(delete_team))
}
