use diesel::prelude::*;

pub use crate::schema::teams::*;
use crate::{
    enums::{Gender, TeamStatus},
    object_id::{OrganizationId, SeasonId, TeamId},
    schema::*,
};

/// A team belongs to exactly one season at a time. Roster size is never
/// stored on this row; it is derived from the count of assignment records
/// referencing the team.
#[derive(Clone, Debug, Queryable, Selectable, Identifiable, serde::Serialize)]
#[diesel(table_name = teams)]
pub struct Team {
    pub id: TeamId,
    pub organization_id: OrganizationId,
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
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = teams)]
pub struct NewTeam {
    pub id: TeamId,
    pub organization_id: OrganizationId,
    pub season_id: SeasonId,
    pub title: String,
    pub sport: String,
    pub gender: Gender,
    pub grade_min: i32,
    pub grade_max: i32,
    pub status: TeamStatus,
    pub roster_cap: Option<i32>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}
