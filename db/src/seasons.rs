use diesel::prelude::*;

pub use crate::schema::seasons::*;
use crate::{
    object_id::{OrganizationId, SeasonId},
    schema::*,
};

#[derive(Clone, Debug, Queryable, Selectable, Identifiable, serde::Serialize)]
#[diesel(table_name = seasons)]
pub struct Season {
    pub id: SeasonId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub active: bool,
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = seasons)]
pub struct NewSeason {
    pub id: SeasonId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub active: bool,
}

/// Resolve the season the UI should scope to. The "exactly one active season"
/// invariant is soft; when nothing is flagged active this falls back to the
/// first season by name.
pub fn active_or_first(
    conn: &mut PgConnection,
    organization: OrganizationId,
) -> QueryResult<Option<Season>> {
    let flagged = seasons::table
        .select(Season::as_select())
        .filter(dsl::organization_id.eq(organization))
        .filter(dsl::active.eq(true))
        .order(dsl::name.asc())
        .first::<Season>(conn)
        .optional()?;

    if flagged.is_some() {
        return Ok(flagged);
    }

    seasons::table
        .select(Season::as_select())
        .filter(dsl::organization_id.eq(organization))
        .order(dsl::name.asc())
        .first::<Season>(conn)
        .optional()
}
