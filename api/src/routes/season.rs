use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use chrono::Utc;
use diesel::prelude::*;
use serde::Deserialize;

use db::{
    object_id::SeasonId,
    seasons::{self, NewSeason, Season},
    PoolExt,
};
use sideline_db as db;

use crate::{shared_state::State, Error};

#[derive(Debug, Deserialize)]
struct SeasonInput {
    name: String,
    #[serde(default)]
    active: bool,
}

impl SeasonInput {
    fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation {
                field: "name",
                message: "season name is required".to_string(),
            });
        }
        Ok(())
    }
}

async fn list_seasons(Extension(ref state): Extension<State>) -> Result<impl IntoResponse, Error> {
    use db::seasons::dsl;
    let organization_id = state.organization_id;

    let objects = state
        .db
        .interact(move |conn| {
            seasons::table
                .select(Season::as_select())
                .filter(dsl::organization_id.eq(organization_id))
                .order(dsl::name.asc())
                .load::<Season>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(objects)))
}

/// The season the rail scopes to by default. The active flag is a soft
/// invariant; with nothing flagged this falls back to the first season.
async fn active_season(Extension(ref state): Extension<State>) -> Result<impl IntoResponse, Error> {
    let organization_id = state.organization_id;

    let season = state
        .db
        .interact(move |conn| {
            seasons::active_or_first(conn, organization_id).map_err(Error::from)
        })
        .await?
        .ok_or(Error::ObjectNotFound("season"))?;

    Ok((StatusCode::OK, Json(season)))
}

async fn new_season(
    Extension(ref state): Extension<State>,
    Json(body): Json<SeasonInput>,
) -> Result<impl IntoResponse, Error> {
    use db::seasons::dsl;
    body.validate()?;

    let value = NewSeason {
        id: SeasonId::new(),
        organization_id: state.organization_id,
        name: body.name,
        active: body.active,
    };

    let result = state
        .db
        .transaction(move |conn| {
            // Conventionally one active season per organization. Flagging a
            // new one active clears the others in the same transaction.
            if value.active {
                diesel::update(seasons::table)
                    .filter(dsl::organization_id.eq(value.organization_id))
                    .set(dsl::active.eq(false))
                    .execute(conn)?;
            }

            diesel::insert_into(seasons::table)
                .values(&value)
                .returning(Season::as_select())
                .get_result::<Season>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::ACCEPTED, Json(result)))
}

async fn write_season(
    Extension(ref state): Extension<State>,
    Path(season_id): Path<SeasonId>,
    Json(body): Json<SeasonInput>,
) -> Result<impl IntoResponse, Error> {
    use db::seasons::dsl;
    body.validate()?;

    let organization_id = state.organization_id;
    let result = state
        .db
        .transaction(move |conn| {
            if body.active {
                diesel::update(seasons::table)
                    .filter(dsl::organization_id.eq(organization_id))
                    .set(dsl::active.eq(false))
                    .execute(conn)?;
            }

            diesel::update(seasons::table)
                .filter(dsl::id.eq(season_id))
                .filter(dsl::organization_id.eq(organization_id))
                .set((
                    dsl::name.eq(body.name),
                    dsl::active.eq(body.active),
                    dsl::updated.eq(Utc::now()),
                ))
                .returning(Season::as_select())
                .get_result::<Season>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

pub fn configure() -> Router {
    Router::new()
        .route("/", get(list_seasons))
        .route("/", post(new_season))
        .route("/active", get(active_season))
        .route("/:season_id", put(write_season))
}
