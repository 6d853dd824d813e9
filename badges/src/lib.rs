//! Permview Badges Library
//!
//! Maps user profile flags and premium tier to the badge icons shown next
//! to chat messages, grouped with user-configurable ordering. A pure rule
//! table: the host renders; this crate only decides which badges appear
//! and in what order.

pub mod flags;
pub mod rules;

pub use flags::{PremiumKind, UserFlags};
pub use rules::{chat_badges, nitro_badge, profile_badges, Badge, BadgeGroup, BadgeSettings};
