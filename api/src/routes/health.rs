use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router};
use diesel::RunQueryDsl;
use serde::Serialize;
use sideline_db::PoolExt;

use crate::{shared_state::State, Error};

#[derive(Serialize)]
struct HealthResponse {
    /// If the database connection is ok
    database: bool,
    /// If all the other fields indicate healthy status.
    healthy: bool,
}

async fn health(Extension(ref state): Extension<State>) -> impl IntoResponse {
    let db_result: Result<usize, Error> = state
        .db
        .interact(|conn| diesel::sql_query("SELECT 1").execute(conn).map_err(Error::from))
        .await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            healthy: db_result.is_ok(),
            database: db_result.is_ok(),
        }),
    )
}

pub fn configure() -> Router {
    Router::new().route("/health", get(health))
}
