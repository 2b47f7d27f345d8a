use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router};
use diesel::prelude::*;

use db::{
    navigation_items::{self, NavigationItem},
    PoolExt,
};
use sideline_db as db;

use crate::{shared_state::State, Error};

/// Sidebar links for the organization, in display order.
async fn list_navigation(
    Extension(ref state): Extension<State>,
) -> Result<impl IntoResponse, Error> {
    use db::navigation_items::dsl;
    let organization_id = state.organization_id;

    let objects = state
        .db
        .interact(move |conn| {
            navigation_items::table
                .select(NavigationItem::as_select())
                .filter(dsl::organization_id.eq(organization_id))
                .order(dsl::position.asc())
                .load::<NavigationItem>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::OK, Json(objects)))
}

pub fn configure() -> Router {
    Router::new().route("/", get(list_navigation))
}
