use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::TeamStatus"]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Draft,
    Provisioned,
}

impl Default for TeamStatus {
    fn default() -> Self {
        Self::Draft
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::Gender"]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boys,
    Girls,
    Coed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::SubmissionStatus"]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
    Approved,
    Withdrawn,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Submitted
    }
}

/// Only `Assigned` is ever written by the current flows. The other variants
/// exist so the card counts have real columns to read, and they read zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::AssignmentStatus"]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Assigned,
    Invited,
    Accepted,
    Declined,
}

impl Default for AssignmentStatus {
    fn default() -> Self {
        Self::Assigned
    }
}
