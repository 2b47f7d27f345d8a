use diesel::prelude::*;

pub use crate::schema::team_assignments::*;
use crate::{
    enums::AssignmentStatus,
    object_id::{AssignmentId, SubmissionId, TeamId},
    schema::*,
};

/// Join record linking a submission to a team. Composite uniqueness on
/// (team, submission): an athlete appears at most once per team, but may hold
/// assignment rows on several teams at once. Removal is a hard delete.
#[derive(Clone, Debug, Queryable, Selectable, Identifiable, serde::Serialize)]
#[diesel(table_name = team_assignments)]
pub struct TeamAssignment {
    pub id: AssignmentId,
    pub team_id: TeamId,
    pub submission_id: SubmissionId,
    pub status: AssignmentStatus,
    pub created: chrono::DateTime<chrono::Utc>,
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = team_assignments)]
pub struct NewTeamAssignment {
    pub id: AssignmentId,
    pub team_id: TeamId,
    pub submission_id: SubmissionId,
    pub status: AssignmentStatus,
}

/// One row of a team's displayed roster: the assignment plus the athlete it
/// points at.
#[derive(Debug, Queryable, serde::Serialize)]
pub struct RosterEntry {
    pub assignment_id: AssignmentId,
    pub submission_id: SubmissionId,
    pub status: AssignmentStatus,
    pub athlete_name: String,
}

/// Upsert assignment rows for every submission in the batch, keyed on the
/// (team, submission) unique constraint. Pairs that already exist are left
/// alone, so repeating a drop is harmless. Returns the number of rows
/// actually inserted.
///
/// Callers that batch several ids from a single drop should run this inside
/// `PoolExt::transaction` so the batch commits as a unit.
pub fn assign_batch(
    conn: &mut PgConnection,
    team: TeamId,
    submissions: &[SubmissionId],
) -> QueryResult<usize> {
    if submissions.is_empty() {
        return Ok(0);
    }

    let rows = submissions
        .iter()
        .map(|submission| NewTeamAssignment {
            id: AssignmentId::new(),
            team_id: team,
            submission_id: *submission,
            status: AssignmentStatus::Assigned,
        })
        .collect::<Vec<_>>();

    diesel::insert_into(team_assignments::table)
        .values(&rows)
        .on_conflict((dsl::team_id, dsl::submission_id))
        .do_nothing()
        .execute(conn)
}

/// Hard-delete the assignment for one (team, submission) pair. Returns the
/// number of rows removed; zero means the pair was not assigned, which
/// callers surface as a not-found failure rather than swallowing.
pub fn unassign(
    conn: &mut PgConnection,
    team: TeamId,
    submission: SubmissionId,
) -> QueryResult<usize> {
    diesel::delete(team_assignments::table)
        .filter(dsl::team_id.eq(team))
        .filter(dsl::submission_id.eq(submission))
        .execute(conn)
}

/// The team's current roster, joined to the athletes, in display order.
pub fn roster_for_team(conn: &mut PgConnection, team: TeamId) -> QueryResult<Vec<RosterEntry>> {
    team_assignments::table
        .inner_join(registration_submissions::table)
        .filter(dsl::team_id.eq(team))
        .select((
            dsl::id,
            dsl::submission_id,
            dsl::status,
            registration_submissions::athlete_name,
        ))
        .order(registration_submissions::athlete_name.asc())
        .load::<RosterEntry>(conn)
}

/// Statuses of every assignment on the team, for derived card counts.
pub fn statuses_for_team(
    conn: &mut PgConnection,
    team: TeamId,
) -> QueryResult<Vec<AssignmentStatus>> {
    team_assignments::table
        .filter(dsl::team_id.eq(team))
        .select(dsl::status)
        .load::<AssignmentStatus>(conn)
}
