//! Effective permission resolution.
//!
//! Folds an ordered permission-source list into the effective bitmask for
//! a subject. Resolution order:
//! 1. An owner source grants everything, wherever it sits in the list.
//! 2. Role sources union their bitmasks.
//! 3. Overwrite sources applicable to the subject accumulate allow and
//!    deny masks; allow applies first, then deny. Deny wins regardless of
//!    the order overwrites appear in.

use crate::ids::{RoleId, UserId};
use crate::models::OverwriteTarget;
use crate::permissions::Permissions;
use crate::sources::PermissionSource;

/// The member whose overwrites apply during resolution.
///
/// `roles` must include the guild's default role id for everyone-role
/// overwrites to take effect.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub user_id: &'a UserId,
    pub roles: &'a [RoleId],
}

impl Subject<'_> {
    fn matches(&self, target: &OverwriteTarget) -> bool {
        match target {
            OverwriteTarget::Role(role_id) => self.roles.contains(role_id),
            OverwriteTarget::Member(user_id) => self.user_id == user_id,
        }
    }
}

/// Compute the effective permission mask contributed by `sources`.
///
/// With no subject, overwrite sources are ignored (there is nobody for
/// them to apply to) and the result is the plain role union.
#[must_use]
pub fn resolve_effective(
    sources: &[PermissionSource],
    subject: Option<Subject<'_>>,
) -> Permissions {
    let mut perms = Permissions::empty();
    let mut allow = Permissions::empty();
    let mut deny = Permissions::empty();

    for source in sources {
        match source {
            // Display order puts the owner entry last; precedence puts it
            // above everything else.
            PermissionSource::Owner { .. } => return Permissions::all(),
            PermissionSource::Role(role) => perms |= role.permissions,
            PermissionSource::Overwrite(overwrite) => {
                if subject.is_some_and(|s| s.matches(&overwrite.target)) {
                    allow |= overwrite.allow;
                    deny |= overwrite.deny;
                }
            }
        }
    }

    perms |= allow;
    perms &= !deny;
    perms
}
