use diesel::prelude::*;

pub use crate::schema::registration_submissions::*;
use crate::{
    enums::SubmissionStatus,
    object_id::{RegistrationId, SubmissionId, TeamId},
    schema::*,
};

/// One athlete's enrollment in one registration.
///
/// `team_id` is the legacy single-team reference; it is nulled when that team
/// is deleted and has no bearing on the multi-assignment table.
#[derive(Clone, Debug, Queryable, Selectable, Identifiable, serde::Serialize)]
#[diesel(table_name = registration_submissions)]
pub struct RegistrationSubmission {
    pub id: SubmissionId,
    pub registration_id: RegistrationId,
    pub athlete_name: String,
    pub guardian_name: String,
    pub status: SubmissionStatus,
    pub team_id: Option<TeamId>,
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = registration_submissions)]
pub struct NewRegistrationSubmission {
    pub id: SubmissionId,
    pub registration_id: RegistrationId,
    pub athlete_name: String,
    pub guardian_name: String,
    pub status: SubmissionStatus,
}
