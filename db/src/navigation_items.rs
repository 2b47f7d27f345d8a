use diesel::prelude::*;

pub use crate::schema::navigation_items::*;
use crate::{
    object_id::{NavigationItemId, OrganizationId},
    schema::*,
};

#[derive(Clone, Debug, Queryable, Selectable, Identifiable, serde::Serialize)]
#[diesel(table_name = navigation_items)]
pub struct NavigationItem {
    pub id: NavigationItemId,
    pub organization_id: OrganizationId,
    pub label: String,
    pub href: String,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = navigation_items)]
pub struct NewNavigationItem {
    pub id: NavigationItemId,
    pub organization_id: OrganizationId,
    pub label: String,
    pub href: String,
    pub position: i32,
}
