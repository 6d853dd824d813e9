//! Host entity snapshots.
//!
//! Read-only copies of what the host stores report at the moment of a
//! display action. None of these are persisted or mutated here; each
//! operation fetches fresh ones.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, GuildId, RoleId, UserId};
use crate::permissions::Permissions;

/// A named permission-bearing entity with a precedence position.
///
/// Positions are unique within a guild; a higher position takes priority.
/// Display metadata (name, color, icon) is opaque to this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    /// Precedence position; higher takes priority.
    pub position: i64,
    pub permissions: Permissions,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub unicode_emoji: Option<String>,
}

/// Discriminant for a channel permission overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteKind {
    Role,
    Member,
}

/// The entity a channel overwrite applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteTarget {
    Role(RoleId),
    Member(UserId),
}

/// A per-channel permission exception tied to a specific role or member,
/// carrying explicit allow and deny bitmasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    pub target: OverwriteTarget,
    pub allow: Permissions,
    pub deny: Permissions,
}

impl PermissionOverwrite {
    /// Overwrite for a role.
    #[must_use]
    pub fn role(id: impl Into<RoleId>, allow: Permissions, deny: Permissions) -> Self {
        Self {
            target: OverwriteTarget::Role(id.into()),
            allow,
            deny,
        }
    }

    /// Overwrite for a single member.
    #[must_use]
    pub fn member(id: impl Into<UserId>, allow: Permissions, deny: Permissions) -> Self {
        Self {
            target: OverwriteTarget::Member(id.into()),
            allow,
            deny,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> OverwriteKind {
        match self.target {
            OverwriteTarget::Role(_) => OverwriteKind::Role,
            OverwriteTarget::Member(_) => OverwriteKind::Member,
        }
    }

    /// The referenced role, if this is a role overwrite.
    #[must_use]
    pub const fn role_id(&self) -> Option<&RoleId> {
        match &self.target {
            OverwriteTarget::Role(id) => Some(id),
            OverwriteTarget::Member(_) => None,
        }
    }

    /// The referenced member, if this is a member overwrite.
    #[must_use]
    pub const fn member_id(&self) -> Option<&UserId> {
        match &self.target {
            OverwriteTarget::Member(id) => Some(id),
            OverwriteTarget::Role(_) => None,
        }
    }
}

/// A member of a guild as the member store reports it.
///
/// `roles` lists assigned role ids only; the guild's default role is
/// implied and added during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    pub user_id: UserId,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

/// A guild as the guild store reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: GuildId,
    pub name: String,
    pub owner_id: UserId,
}

impl Guild {
    /// Id of this guild's default ("everyone") role.
    #[must_use]
    pub fn everyone_role(&self) -> RoleId {
        self.id.everyone_role()
    }

    /// Whether the given user owns this guild.
    #[must_use]
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }
}

/// A guild channel with its permission overwrites.
///
/// The overwrite sequence preserves the host store's iteration order; the
/// display-ordering contracts are defined relative to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub guild_id: GuildId,
    pub name: String,
    #[serde(default)]
    pub permission_overwrites: Vec<PermissionOverwrite>,
}

/// Public user profile, used to resolve display headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
}
