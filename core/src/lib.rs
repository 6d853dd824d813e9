//! Permview Core Library
//!
//! Pure, synchronous resolution of guild role and channel-overwrite
//! precedence into display-ordered permission source lists, plus
//! effective-permission computation.
//!
//! The host application owns the data. It exposes read-only stores (see
//! [`store`]); every public operation here reads a fresh snapshot from
//! those stores, transforms it in a single pass, and returns. Nothing is
//! cached, persisted, or mutated.

pub mod ids;
pub mod models;
pub mod permissions;
pub mod resolver;
pub mod settings;
pub mod sort;
pub mod sources;
pub mod store;

pub use ids::{ChannelId, GuildId, RoleId, UserId};
pub use models::{
    Channel, Guild, GuildMember, OverwriteKind, OverwriteTarget, PermissionOverwrite, Role,
    UserProfile,
};
pub use permissions::Permissions;
pub use resolver::{resolve_effective, Subject};
pub use settings::{SortOrder, ViewerSettings};
pub use sort::{sort_overwrites, sort_roles};
pub use sources::{
    build_permission_sources, PermissionListing, PermissionSource, PermissionTarget, ViewerError,
};
pub use store::{
    ChannelStore, GuildStore, HostStores, InMemoryHost, MemberStore, RoleStore, UserStore,
};
