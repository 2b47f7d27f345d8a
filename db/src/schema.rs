pub mod sql_types {
    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "team_status"))]
    pub struct TeamStatus;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "gender"))]
    pub struct Gender;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "submission_status"))]
    pub struct SubmissionStatus;

    #[derive(diesel::query_builder::QueryId, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "assignment_status"))]
    pub struct AssignmentStatus;
}

diesel::table! {
    use diesel::sql_types::*;

    organizations (id) {
        id -> Uuid,
        name -> Text,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    users (id) {
        id -> Uuid,
        organization_id -> Uuid,
        name -> Text,
        email -> Text,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    seasons (id) {
        id -> Uuid,
        organization_id -> Uuid,
        name -> Text,
        active -> Bool,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    programs (id) {
        id -> Uuid,
        organization_id -> Uuid,
        season_id -> Uuid,
        title -> Text,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::Gender;

    registrations (id) {
        id -> Uuid,
        program_id -> Uuid,
        title -> Text,
        min_age -> Int4,
        max_age -> Int4,
        gender -> Gender,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::SubmissionStatus;

    registration_submissions (id) {
        id -> Uuid,
        registration_id -> Uuid,
        athlete_name -> Text,
        guardian_name -> Text,
        status -> SubmissionStatus,
        team_id -> Nullable<Uuid>,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::Gender;
    use super::sql_types::TeamStatus;

    teams (id) {
        id -> Uuid,
        organization_id -> Uuid,
        season_id -> Uuid,
        title -> Text,
        sport -> Text,
        gender -> Gender,
        grade_min -> Int4,
        grade_max -> Int4,
        status -> TeamStatus,
        roster_cap -> Nullable<Int4>,
        avatar_url -> Nullable<Text>,
        primary_color -> Nullable<Text>,
        secondary_color -> Nullable<Text>,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::AssignmentStatus;

    team_assignments (id) {
        id -> Uuid,
        team_id -> Uuid,
        submission_id -> Uuid,
        status -> AssignmentStatus,
        created -> Timestamptz,
        updated -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    team_members (team_id, user_id) {
        team_id -> Uuid,
        user_id -> Uuid,
        role -> Text,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    navigation_items (id) {
        id -> Uuid,
        organization_id -> Uuid,
        label -> Text,
        href -> Text,
        position -> Int4,
    }
}

diesel::joinable!(team_assignments -> registration_submissions (submission_id));
diesel::allow_tables_to_appear_in_same_query!(team_assignments, registration_submissions);
diesel::allow_tables_to_appear_in_same_query!(teams, team_assignments);
