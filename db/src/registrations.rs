use diesel::prelude::*;

pub use crate::schema::registrations::*;
use crate::{
    enums::Gender,
    object_id::{ProgramId, RegistrationId},
    schema::*,
};

/// One division athletes sign up for, e.g. "5th-6th Grade Cheer".
#[derive(Clone, Debug, Queryable, Selectable, Identifiable, serde::Serialize)]
#[diesel(table_name = registrations)]
pub struct Registration {
    pub id: RegistrationId,
    pub program_id: ProgramId,
    pub title: String,
    pub min_age: i32,
    pub max_age: i32,
    pub gender: Gender,
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = registrations)]
pub struct NewRegistration {
    pub id: RegistrationId,
    pub program_id: ProgramId,
    pub title: String,
    pub min_age: i32,
    pub max_age: i32,
    pub gender: Gender,
}
