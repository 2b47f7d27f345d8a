use diesel::prelude::*;

pub use crate::schema::users::*;
use crate::{
    object_id::{OrganizationId, UserId},
    schema::*,
};

#[derive(Clone, Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: UserId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub email: String,
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: UserId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub email: String,
}
