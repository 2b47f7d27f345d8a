use std::sync::Arc;

use sideline_db::object_id::{OrganizationId, UserId};

/// Process-wide shared resources, constructed once in `run_server` and handed
/// to handlers through an `Extension`. This is the explicit singleton: no
/// global statics, one pool and one storage operator per process.
pub struct InnerState {
    pub production: bool,
    pub db: sideline_db::Pool,
    pub storage: sideline_storage::Operator,

    /// Auth is stubbed to a fixed demo operator; every request is scoped to
    /// this organization and acts as this user.
    pub organization_id: OrganizationId,
    pub operator_user_id: UserId,
}

pub type State = Arc<InnerState>;
