//! Permission source aggregation.
//!
//! Builds the unified, display-ordered list of contributors to a target's
//! permission state: the roles a member holds, the guild's default role,
//! an owner pseudo-source, and per-channel overwrites.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::ids::{ChannelId, GuildId, UserId};
use crate::models::{PermissionOverwrite, Role};
use crate::permissions::Permissions;
use crate::settings::ViewerSettings;
use crate::sort::{sort_overwrites, sort_roles};
use crate::store::HostStores;

/// A single contributor to a target's permission state.
///
/// Variants appear in the order the list displays them. The overwrite
/// variant covers both role and member overwrites; the discriminant rides
/// on [`PermissionOverwrite::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionSource {
    /// A role held by the inspected member, or listed for the guild.
    Role(Role),
    /// The guild owner's implicit grant of every known permission.
    ///
    /// Highest-precedence for any effective-permission computation, but
    /// appended at list end: the display convention pins it after the role
    /// list rather than sorting it in.
    Owner { permissions: Permissions },
    /// A per-channel overwrite.
    Overwrite(PermissionOverwrite),
}

impl PermissionSource {
    /// The owner pseudo-source. Not backed by a stored role record; its
    /// mask is the union of every permission bit known to the system.
    #[must_use]
    pub fn owner() -> Self {
        Self::Owner {
            permissions: Permissions::all(),
        }
    }
}

/// What the viewer was opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionTarget {
    /// A member of a guild.
    Member { guild_id: GuildId, user_id: UserId },
    /// A guild channel.
    Channel {
        guild_id: GuildId,
        channel_id: ChannelId,
    },
    /// The guild's full role list.
    Guild { guild_id: GuildId },
}

/// Failure to resolve the primary subject of a display request.
///
/// Stale secondary references (a role id that no longer resolves) are
/// filtered out instead; only the inspected target itself is load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("guild {0} not found")]
    GuildNotFound(GuildId),

    #[error("user {user_id} is not a resolvable member of guild {guild_id}")]
    MemberNotFound { guild_id: GuildId, user_id: UserId },

    #[error("channel {0} not found")]
    ChannelNotFound(ChannelId),
}

/// Build the display-ordered permission source list for a target.
///
/// - Member targets: the member's roles plus the guild's default role,
///   resolved and sorted per `settings.sort_order`, followed by an owner
///   pseudo-source when the member owns the guild. Role ids that no longer
///   resolve are skipped.
/// - Channel targets: the channel's overwrites, role overwrites ordered
///   highest-role-first (see [`sort_overwrites`]).
/// - Guild targets: every role in store iteration order, deliberately
///   unsorted.
#[tracing::instrument(skip(stores, settings))]
pub fn build_permission_sources<S: HostStores>(
    target: &PermissionTarget,
    stores: &S,
    settings: &ViewerSettings,
) -> Result<Vec<PermissionSource>, ViewerError> {
    match target {
        PermissionTarget::Member { guild_id, user_id } => {
            let guild = stores
                .guild(guild_id)
                .ok_or_else(|| ViewerError::GuildNotFound(guild_id.clone()))?;
            let member =
                stores
                    .member(guild_id, user_id)
                    .ok_or_else(|| ViewerError::MemberNotFound {
                        guild_id: guild_id.clone(),
                        user_id: user_id.clone(),
                    })?;

            // The default role is part of every member's effective role
            // set even though the member store never lists it.
            let mut role_ids = member.roles;
            role_ids.push(guild.everyone_role());
            let mut seen = HashSet::new();
            role_ids.retain(|id| seen.insert(id.clone()));

            let mut roles = Vec::with_capacity(role_ids.len());
            for role_id in &role_ids {
                match stores.role(guild_id, role_id) {
                    Some(role) => roles.push(role),
                    None => {
                        debug!(%guild_id, %role_id, "member references a role missing from the role store");
                    }
                }
            }

            let mut sources: Vec<PermissionSource> = sort_roles(roles, settings.sort_order)
                .into_iter()
                .map(PermissionSource::Role)
                .collect();
            if guild.is_owner(user_id) {
                sources.push(PermissionSource::owner());
            }
            Ok(sources)
        }
        PermissionTarget::Channel {
            guild_id,
            channel_id,
        } => {
            let channel = stores
                .channel(channel_id)
                .ok_or_else(|| ViewerError::ChannelNotFound(channel_id.clone()))?;
            Ok(
                sort_overwrites(channel.permission_overwrites, guild_id, stores)
                    .into_iter()
                    .map(PermissionSource::Overwrite)
                    .collect(),
            )
        }
        PermissionTarget::Guild { guild_id } => {
            stores
                .guild(guild_id)
                .ok_or_else(|| ViewerError::GuildNotFound(guild_id.clone()))?;
            // Full role list for the "server roles" overview; store
            // iteration order, no precedence sort.
            Ok(stores
                .roles(guild_id)
                .into_iter()
                .map(PermissionSource::Role)
                .collect())
        }
    }
}

/// Header plus ordered sources, ready to hand to a popout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionListing {
    /// Member nickname or username, channel name, or guild name.
    pub header: String,
    pub sources: Vec<PermissionSource>,
}

impl PermissionListing {
    /// Build the listing a display action opens for a target.
    pub fn open<S: HostStores>(
        target: &PermissionTarget,
        stores: &S,
        settings: &ViewerSettings,
    ) -> Result<Self, ViewerError> {
        let sources = build_permission_sources(target, stores, settings)?;
        let header = match target {
            PermissionTarget::Member { guild_id, user_id } => stores
                .member(guild_id, user_id)
                .and_then(|member| member.nick)
                .or_else(|| stores.user(user_id).map(|user| user.username))
                .unwrap_or_else(|| user_id.to_string()),
            PermissionTarget::Channel { channel_id, .. } => stores
                .channel(channel_id)
                .map(|channel| channel.name)
                .unwrap_or_default(),
            PermissionTarget::Guild { guild_id } => stores
                .guild(guild_id)
                .map(|guild| guild.name)
                .unwrap_or_default(),
        };
        Ok(Self { header, sources })
    }
}
