//! Role ordering and overwrite sort/merge.

use tracing::debug;

use crate::ids::GuildId;
use crate::models::{PermissionOverwrite, Role};
use crate::settings::SortOrder;
use crate::store::RoleStore;

/// Sort roles by precedence position.
///
/// The sort is stable: roles with equal positions (not expected in valid
/// data, but not assumed impossible) keep their input order.
/// [`SortOrder::Unspecified`] returns the input untouched.
#[must_use]
pub fn sort_roles(mut roles: Vec<Role>, order: SortOrder) -> Vec<Role> {
    match order {
        SortOrder::HighestFirst => roles.sort_by(|a, b| b.position.cmp(&a.position)),
        SortOrder::LowestFirst => roles.sort_by(|a, b| a.position.cmp(&b.position)),
        SortOrder::Unspecified => {}
    }
    roles
}

/// Order channel overwrites for display.
///
/// Role overwrites are ordered by the referenced role's position, highest
/// first, independent of the viewer's sort-order setting. Member overwrites
/// and role overwrites whose role no longer resolves in the guild's role
/// store are unordered: they keep their original slots, and only the
/// orderable role overwrites are rearranged among the slots they occupied.
#[must_use]
pub fn sort_overwrites<S: RoleStore>(
    overwrites: Vec<PermissionOverwrite>,
    guild_id: &GuildId,
    stores: &S,
) -> Vec<PermissionOverwrite> {
    let mut entries: Vec<Option<PermissionOverwrite>> =
        overwrites.into_iter().map(Some).collect();

    // Pull out the overwrites that participate in ordering, remembering
    // which slots they came from.
    let mut slots = Vec::new();
    let mut keyed: Vec<(i64, PermissionOverwrite)> = Vec::new();
    for (slot, entry) in entries.iter_mut().enumerate() {
        let Some(role_id) = entry.as_ref().and_then(PermissionOverwrite::role_id).cloned() else {
            continue;
        };
        match stores.role(guild_id, &role_id) {
            Some(role) => {
                if let Some(overwrite) = entry.take() {
                    slots.push(slot);
                    keyed.push((role.position, overwrite));
                }
            }
            None => {
                debug!(%guild_id, %role_id, "overwrite references a role missing from the role store");
            }
        }
    }

    // Highest position first; stable, so equal positions keep store order.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    for (slot, (_, overwrite)) in slots.into_iter().zip(keyed) {
        entries[slot] = Some(overwrite);
    }
    entries.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::RoleId;
    use crate::models::OverwriteKind;
    use crate::permissions::Permissions;
    use crate::store::InMemoryHost;

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

    fn positions(roles: &[Role]) -> Vec<i64> {
        roles.iter().map(|r| r.position).collect()
    }

    #[test]
    fn test_sort_roles_highest_first() {
        let sorted = sort_roles(
            vec![role("a", 5), role("b", 10), role("c", 0)],
            SortOrder::HighestFirst,
        );
        assert_eq!(positions(&sorted), [10, 5, 0]);
    }

    #[test]
    fn test_sort_roles_lowest_first() {
        let sorted = sort_roles(
            vec![role("a", 5), role("b", 10), role("c", 0)],
            SortOrder::LowestFirst,
        );
        assert_eq!(positions(&sorted), [0, 5, 10]);
    }

    #[test]
    fn test_sort_orders_are_reverses_of_each_other() {
        let roles = vec![role("a", 3), role("b", 7), role("c", 1), role("d", 9)];

        let highest = sort_roles(roles.clone(), SortOrder::HighestFirst);
        let mut lowest = sort_roles(roles, SortOrder::LowestFirst);
        lowest.reverse();

        assert_eq!(highest, lowest);
    }

    #[test]
    fn test_sort_roles_is_idempotent() {
        let once = sort_roles(
            vec![role("a", 5), role("b", 10), role("c", 0)],
            SortOrder::HighestFirst,
        );
        let twice = sort_roles(once.clone(), SortOrder::HighestFirst);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_roles_unspecified_keeps_input_order() {
        let roles = vec![role("a", 5), role("b", 10), role("c", 0)];
        let sorted = sort_roles(roles.clone(), SortOrder::Unspecified);
        assert_eq!(sorted, roles);
    }

    #[test]
    fn test_sort_roles_equal_positions_keep_input_order() {
        let sorted = sort_roles(
            vec![role("first", 5), role("second", 5), role("top", 9)],
            SortOrder::HighestFirst,
        );
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["top", "first", "second"]);
    }

    #[test]
    fn test_sort_roles_empty() {
        assert!(sort_roles(Vec::new(), SortOrder::HighestFirst).is_empty());
    }

    #[test]
    fn test_sort_overwrites_orders_roles_highest_first() {
        let guild_id = GuildId::new("g");
        let mut host = InMemoryHost::new();
        host.add_role(guild_id.clone(), role("r5", 10));
        host.add_role(guild_id.clone(), role("r2", 5));

        let sorted = sort_overwrites(
            vec![
                PermissionOverwrite::role("r2", Permissions::empty(), Permissions::empty()),
                PermissionOverwrite::role("r5", Permissions::empty(), Permissions::empty()),
            ],
            &guild_id,
            &host,
        );

        let ids: Vec<_> = sorted.iter().filter_map(|o| o.role_id()).collect();
        assert_eq!(ids, [&RoleId::new("r5"), &RoleId::new("r2")]);
    }

    #[test]
    fn test_sort_overwrites_member_keeps_original_slot() {
        let guild_id = GuildId::new("g");
        let mut host = InMemoryHost::new();
        host.add_role(guild_id.clone(), role("r5", 10));
        host.add_role(guild_id.clone(), role("r2", 5));

        let sorted = sort_overwrites(
            vec![
                PermissionOverwrite::role("r2", Permissions::empty(), Permissions::empty()),
                PermissionOverwrite::member("u9", Permissions::empty(), Permissions::empty()),
                PermissionOverwrite::role("r5", Permissions::empty(), Permissions::empty()),
            ],
            &guild_id,
            &host,
        );

        // Role overwrites swap into highest-first order; the member
        // overwrite stays in the middle where the store put it.
        assert_eq!(sorted[0].role_id(), Some(&RoleId::new("r5")));
        assert_eq!(sorted[1].kind(), OverwriteKind::Member);
        assert_eq!(sorted[2].role_id(), Some(&RoleId::new("r2")));
    }

    #[test]
    fn test_sort_overwrites_stale_role_is_unordered() {
        let guild_id = GuildId::new("g");
        let mut host = InMemoryHost::new();
        host.add_role(guild_id.clone(), role("r5", 10));
        host.add_role(guild_id.clone(), role("r2", 5));

        let sorted = sort_overwrites(
            vec![
                PermissionOverwrite::role("r2", Permissions::empty(), Permissions::empty()),
                PermissionOverwrite::role("deleted", Permissions::empty(), Permissions::empty()),
                PermissionOverwrite::role("r5", Permissions::empty(), Permissions::empty()),
            ],
            &guild_id,
            &host,
        );

        // The stale reference neither throws nor moves; the resolvable
        // overwrites reorder around it.
        assert_eq!(sorted[0].role_id(), Some(&RoleId::new("r5")));
        assert_eq!(sorted[1].role_id(), Some(&RoleId::new("deleted")));
        assert_eq!(sorted[2].role_id(), Some(&RoleId::new("r2")));
    }

    #[test]
    fn test_sort_overwrites_empty() {
        let host = InMemoryHost::new();
        assert!(sort_overwrites(Vec::new(), &GuildId::new("g"), &host).is_empty());
    }
}
