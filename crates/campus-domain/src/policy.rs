//! Access-policy seam between the session gate and record operations.
//!
//! Every scoped operation names the capability it exercises and the
//! identifiers it touches, then asks the installed policy before running.
//! Query filters select data; they do not authorize it. The default
//! [`PermissiveAccessPolicy`] allows every authenticated actor everything,
//! so nothing stops one student reading another student's records.
//! Deployments wanting stricter rules install their own policy; handlers
//! map a denial to 403.

use uuid::Uuid;

use crate::role::Role;

/// Identity resolved from a verified credential.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

/// The operation class a handler is about to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ReadAttendance,
    WriteAttendance,
    ReadCourses,
    WriteCourses,
    ReadGrades,
    WriteGrades,
    ReadProfile,
    WriteProfile,
}

/// Identifiers an operation touches. `None` means "not constrained".
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordScope {
    pub student_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

/// Capability check consulted before every record operation.
pub trait AccessPolicy: Send + Sync {
    fn allows(&self, actor: &Actor, capability: Capability, scope: &RecordScope) -> bool;
}

/// Default policy: every authenticated actor may do everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveAccessPolicy;

impl AccessPolicy for PermissiveAccessPolicy {
    fn allows(&self, _actor: &Actor, _capability: Capability, _scope: &RecordScope) -> bool {
        true
    }
}
