use axum::{
    extract::Path, http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router,
};
use diesel::prelude::*;

use db::{
    object_id::RegistrationId,
    submissions::{self, RegistrationSubmission},
    PoolExt, SubmissionStatus,
};
use sideline_db as db;

use crate::{shared_state::State, Error};

/// The athletes the rail offers for dragging: every non-withdrawn submission
/// under the registration. Eligibility filtering happens here and only here;
/// the assignment layer takes whatever ids it is handed.
async fn list_registration_submissions(
    Extension(ref state): Extension<State>,
    Path(registration_id): Path<RegistrationId>,
) -> Result<impl IntoResponse, Error> {
    use db::submissions::dsl;

    let objects = state
        .db
        .interact(move |conn| {
            submissions::table
                .select(RegistrationSubmission::as_select())
                .filter(dsl::registration_id.eq(registration_id))
                .filter(dsl::status.ne(SubmissionStatus::Withdrawn))
                .order(dsl::athlete_name.asc())
                .load::<RegistrationSubmission>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(objects)))
}

pub fn configure() -> Router {
    Router::new().route(
        "/:registration_id/submissions",
        get(list_registration_submissions),
    )
}
