//! Identifier newtypes for host entities.
//!
//! Host ids are opaque short strings (snowflakes in the wire format), kept
//! as [`SmolStr`] so clones stay cheap. The guild's default "everyone" role
//! shares the guild's id, hence [`GuildId::everyone_role`].

use smol_str::SmolStr;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(SmolStr);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<SmolStr>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

id_type! {
    /// Guild identifier.
    GuildId
}

id_type! {
    /// Role identifier.
    RoleId
}

id_type! {
    /// User identifier.
    UserId
}

id_type! {
    /// Channel identifier.
    ChannelId
}

impl GuildId {
    /// Id of the guild's default ("everyone") role.
    ///
    /// The host keys the default role by the guild's own id.
    #[must_use]
    pub fn everyone_role(&self) -> RoleId {
        RoleId(self.0.clone())
    }
}
