use diesel::prelude::*;

pub use crate::schema::programs::*;
use crate::{
    object_id::{OrganizationId, ProgramId, SeasonId},
    schema::*,
};

#[derive(Clone, Debug, Queryable, Selectable, Identifiable, serde::Serialize)]
#[diesel(table_name = programs)]
pub struct Program {
    pub id: ProgramId,
    pub organization_id: OrganizationId,
    pub season_id: SeasonId,
    pub title: String,
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = programs)]
pub struct NewProgram {
    pub id: ProgramId,
    pub organization_id: OrganizationId,
    pub season_id: SeasonId,
    pub title: String,
}
