use diesel::prelude::*;

pub use crate::schema::organizations::*;
use crate::{object_id::OrganizationId, schema::*};

#[derive(Clone, Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = organizations)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = organizations)]
pub struct NewOrganization {
    pub id: OrganizationId,
    pub name: String,
}
