use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use diesel::prelude::*;
use serde::Deserialize;

use db::{
    object_id::{ProgramId, SeasonId},
    programs::{self, Program},
    registrations::{self, Registration},
    PoolExt,
};
use sideline_db as db;

use crate::{shared_state::State, Error};

#[derive(Debug, Deserialize)]
struct ListProgramsQuery {
    season: Option<SeasonId>,
}

async fn list_programs(
    Extension(ref state): Extension<State>,
    Query(query): Query<ListProgramsQuery>,
) -> Result<impl IntoResponse, Error> {
    use db::programs::dsl;
    let organization_id = state.organization_id;

    let objects = state
        .db
        .interact(move |conn| {
            let q = programs::table
                .select(Program::as_select())
                .filter(dsl::organization_id.eq(organization_id))
                .order(dsl::title.asc())
                .into_boxed();

            let q = match query.season {
                Some(season_id) => q.filter(dsl::season_id.eq(season_id)),
                None => q,
            };

            q.load::<Program>(conn).map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(objects)))
}

/// Registrations under one program, i.e. the divisions the rail offers once
/// a program is picked.
async fn list_program_registrations(
    Extension(ref state): Extension<State>,
    Path(program_id): Path<ProgramId>,
) -> Result<impl IntoResponse, Error> {
    use db::registrations::dsl;

    let objects = state
        .db
        .interact(move |conn| {
            registrations::table
                .select(Registration::as_select())
                .filter(dsl::program_id.eq(program_id))
                .order(dsl::title.asc())
                .load::<Registration>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(objects)))
}

pub fn configure() -> Router {
    Router::new()
        .route("/", get(list_programs))
        .route("/:program_id/registrations", get(list_program_registrations))
}
