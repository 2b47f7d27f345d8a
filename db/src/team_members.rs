use diesel::prelude::*;

pub use crate::schema::team_members::*;
use crate::{
    object_id::{TeamId, UserId},
    schema::*,
};

/// Staff membership on a team. Deleted by cascade when the team is deleted.
#[derive(Clone, Debug, Queryable, Selectable, Insertable, serde::Serialize)]
#[diesel(table_name = team_members)]
pub struct TeamMember {
    pub team_id: TeamId,
    pub user_id: UserId,
    pub role: String,
}
