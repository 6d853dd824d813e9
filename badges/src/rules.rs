//! Badge rule table and group ordering.
//!
//! Three badge groups can decorate a message: host-specific custom badges
//! supplied by the embedder, profile-flag badges, and the premium badge.
//! Each group has an enable switch and a numeric position; groups render
//! in ascending position order, ties broken by declaration order
//! (custom, profile, premium).

use serde::{Deserialize, Serialize};

use crate::flags::{PremiumKind, UserFlags};

/// A single badge: display name plus an opaque icon asset id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub icon: String,
}

impl Badge {
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// One rendered badge group, already position-ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeGroup {
    pub position: i64,
    pub badges: Vec<Badge>,
}

/// Per-group display settings, persisted by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeSettings {
    pub show_custom_badges: bool,
    pub custom_badges_position: i64,
    pub show_profile_badges: bool,
    pub profile_badges_position: i64,
    pub show_premium_badge: bool,
    pub premium_badge_position: i64,
}

impl Default for BadgeSettings {
    fn default() -> Self {
        Self {
            show_custom_badges: true,
            custom_badges_position: 0,
            show_profile_badges: false,
            profile_badges_position: 2,
            show_premium_badge: true,
            premium_badge_position: 3,
        }
    }
}

/// Flag → badge rules, in display order.
///
/// Declaration order is the display order and deliberately not bit order:
/// both bug hunter tiers sit together after the HypeSquad houses.
const PROFILE_BADGES: &[(UserFlags, &str, &str)] = &[
    (UserFlags::STAFF, "Staff", "5e74e9b61934fc1f67c65515d1f7e60d"),
    (
        UserFlags::PARTNER,
        "Partnered Server Owner",
        "3f9748e53446a137a052f3454e2de41e",
    ),
    (
        UserFlags::HYPESQUAD_EVENTS,
        "HypeSquad Events",
        "bf01d1073931f921909045f3a39fd264",
    ),
    (
        UserFlags::HYPESQUAD_BRAVERY,
        "HypeSquad Bravery",
        "8a88d63823d8a71cd5e390baa45efa02",
    ),
    (
        UserFlags::HYPESQUAD_BRILLIANCE,
        "HypeSquad Brilliance",
        "011940fd013da3f7fb926e4a1cd2e618",
    ),
    (
        UserFlags::HYPESQUAD_BALANCE,
        "HypeSquad Balance",
        "3aa41de486fa12454c3761e8e223442e",
    ),
    (
        UserFlags::BUG_HUNTER_LEVEL_1,
        "Bug Hunter",
        "2717692c7dca7289b35297368a940dd0",
    ),
    (
        UserFlags::BUG_HUNTER_LEVEL_2,
        "Bug Hunter",
        "848f79194d4be5ff5f81505cbd0ce1e6",
    ),
    (
        UserFlags::ACTIVE_DEVELOPER,
        "Active Developer",
        "6bdc42827a38498929a4920da12695d9",
    ),
    (
        UserFlags::VERIFIED_DEVELOPER,
        "Early Verified Bot Developer",
        "6df5892e0f35b051f8b61eace34f4967",
    ),
    (
        UserFlags::EARLY_SUPPORTER,
        "Early Supporter",
        "7060786766c9c840eb3019e725d2b358",
    ),
    (
        UserFlags::CERTIFIED_MODERATOR,
        "Moderator Programs Alumni",
        "fee1624003e2fee35cb398e125dc479b",
    ),
];

const PREMIUM_ICON: &str = "2ba85e8026a8614b640c2837bcdfe21b";

/// Badges earned by profile flags, in rule-table order.
#[must_use]
pub fn profile_badges(flags: UserFlags) -> Vec<Badge> {
    PROFILE_BADGES
        .iter()
        .filter(|(flag, _, _)| flags.contains(*flag))
        .map(|(_, name, icon)| Badge::new(*name, *icon))
        .collect()
}

/// The premium badge for a subscribed user, named by tier.
#[must_use]
pub fn nitro_badge(premium: PremiumKind) -> Option<Badge> {
    if !premium.is_subscribed() {
        return None;
    }
    let name = match premium {
        PremiumKind::Classic => "Nitro Classic",
        PremiumKind::Basic => "Nitro Basic",
        PremiumKind::Regular | PremiumKind::None => "Nitro",
    };
    Some(Badge::new(name, PREMIUM_ICON))
}

/// Assemble the enabled, non-empty badge groups for one message author,
/// ordered by their configured positions.
#[must_use]
pub fn chat_badges(
    flags: UserFlags,
    premium: PremiumKind,
    custom: &[Badge],
    settings: &BadgeSettings,
) -> Vec<BadgeGroup> {
    let mut groups = Vec::new();

    if settings.show_custom_badges && !custom.is_empty() {
        groups.push(BadgeGroup {
            position: settings.custom_badges_position,
            badges: custom.to_vec(),
        });
    }
    if settings.show_profile_badges {
        let badges = profile_badges(flags);
        if !badges.is_empty() {
            groups.push(BadgeGroup {
                position: settings.profile_badges_position,
                badges,
            });
        }
    }
    if settings.show_premium_badge {
        if let Some(badge) = nitro_badge(premium) {
            groups.push(BadgeGroup {
                position: settings.premium_badge_position,
                badges: vec![badge],
            });
        }
    }

    groups.sort_by_key(|group| group.position);
    groups
}
