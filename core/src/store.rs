//! Read-only host store interfaces.
//!
//! The host application is the single source of truth for guilds, roles,
//! members, channels, and users. Each trait mirrors one host store; every
//! method returns an owned snapshot of current store state. There is no
//! caching layer and no staleness window beyond "whatever the store
//! currently reports".
//!
//! [`InMemoryHost`] is a plain implementation of all of them for tests and
//! for embedders without a live host.

use crate::ids::{ChannelId, GuildId, RoleId, UserId};
use crate::models::{Channel, Guild, GuildMember, Role, UserProfile};

/// Role lookups for a guild.
pub trait RoleStore {
    /// Resolve one role in a guild.
    fn role(&self, guild_id: &GuildId, role_id: &RoleId) -> Option<Role>;

    /// Every role in a guild, in store iteration order.
    fn roles(&self, guild_id: &GuildId) -> Vec<Role>;
}

/// Guild membership lookups.
pub trait MemberStore {
    /// Resolve a guild member.
    fn member(&self, guild_id: &GuildId, user_id: &UserId) -> Option<GuildMember>;

    /// Whether the user is a member of the guild.
    fn is_member(&self, guild_id: &GuildId, user_id: &UserId) -> bool {
        self.member(guild_id, user_id).is_some()
    }
}

/// Guild lookups.
pub trait GuildStore {
    fn guild(&self, guild_id: &GuildId) -> Option<Guild>;
}

/// Channel lookups.
pub trait ChannelStore {
    fn channel(&self, channel_id: &ChannelId) -> Option<Channel>;
}

/// Public user profile lookups.
pub trait UserStore {
    fn user(&self, user_id: &UserId) -> Option<UserProfile>;
}

/// Aggregate bound for operations that touch several host stores.
pub trait HostStores: RoleStore + MemberStore + GuildStore + ChannelStore + UserStore {}

impl<T: RoleStore + MemberStore + GuildStore + ChannelStore + UserStore> HostStores for T {}

/// In-memory host stores.
///
/// Roles and channel overwrites keep insertion order, which stands in for
/// the host store's iteration order.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    guilds: Vec<Guild>,
    roles: Vec<(GuildId, Role)>,
    members: Vec<(GuildId, GuildMember)>,
    channels: Vec<Channel>,
    users: Vec<UserProfile>,
}

impl InMemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_guild(&mut self, guild: Guild) {
        self.guilds.push(guild);
    }

    pub fn add_role(&mut self, guild_id: GuildId, role: Role) {
        self.roles.push((guild_id, role));
    }

    pub fn add_member(&mut self, guild_id: GuildId, member: GuildMember) {
        self.members.push((guild_id, member));
    }

    pub fn add_channel(&mut self, channel: Channel) {
        self.channels.push(channel);
    }

    pub fn add_user(&mut self, user: UserProfile) {
        self.users.push(user);
    }
}

impl RoleStore for InMemoryHost {
    fn role(&self, guild_id: &GuildId, role_id: &RoleId) -> Option<Role> {
        self.roles
            .iter()
            .find(|(gid, role)| gid == guild_id && role.id == *role_id)
            .map(|(_, role)| role.clone())
    }

    fn roles(&self, guild_id: &GuildId) -> Vec<Role> {
        self.roles
            .iter()
            .filter(|(gid, _)| gid == guild_id)
            .map(|(_, role)| role.clone())
            .collect()
    }
}

impl MemberStore for InMemoryHost {
    fn member(&self, guild_id: &GuildId, user_id: &UserId) -> Option<GuildMember> {
        self.members
            .iter()
            .find(|(gid, member)| gid == guild_id && member.user_id == *user_id)
            .map(|(_, member)| member.clone())
    }
}

impl GuildStore for InMemoryHost {
    fn guild(&self, guild_id: &GuildId) -> Option<Guild> {
        self.guilds.iter().find(|g| g.id == *guild_id).cloned()
    }
}

impl ChannelStore for InMemoryHost {
    fn channel(&self, channel_id: &ChannelId) -> Option<Channel> {
        self.channels.iter().find(|c| c.id == *channel_id).cloned()
    }
}

impl UserStore for InMemoryHost {
    fn user(&self, user_id: &UserId) -> Option<UserProfile> {
        self.users.iter().find(|u| u.id == *user_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::Permissions;

    fn role(id: &str, position: i64) -> Role {
        Role {
            id: RoleId::new(id),
            name: format!("role-{id}"),
            position,
            permissions: Permissions::empty(),
            color: None,
            icon: None,
            unicode_emoji: None,
        }
    }

    #[test]
    fn test_roles_keep_insertion_order() {
        let guild_id = GuildId::new("1");
        let mut host = InMemoryHost::new();
        host.add_role(guild_id.clone(), role("5", 10));
        host.add_role(guild_id.clone(), role("2", 5));
        host.add_role(GuildId::new("other"), role("9", 1));
        host.add_role(guild_id.clone(), role("1", 0));

        let ids: Vec<_> = host
            .roles(&guild_id)
            .into_iter()
            .map(|r| r.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["5", "2", "1"]);
    }

    #[test]
    fn test_role_lookup_is_scoped_to_guild() {
        let mut host = InMemoryHost::new();
        host.add_role(GuildId::new("1"), role("5", 10));

        assert!(host.role(&GuildId::new("1"), &RoleId::new("5")).is_some());
        assert!(host.role(&GuildId::new("2"), &RoleId::new("5")).is_none());
    }

    #[test]
    fn test_is_member_defaults_to_member_lookup() {
        let guild_id = GuildId::new("1");
        let mut host = InMemoryHost::new();
        host.add_member(
            guild_id.clone(),
            GuildMember {
                user_id: UserId::new("7"),
                nick: None,
                roles: vec![],
            },
        );

        assert!(host.is_member(&guild_id, &UserId::new("7")));
        assert!(!host.is_member(&guild_id, &UserId::new("8")));
    }
}
