//! Guild permission bitmask.
//!
//! The host's permission set has outgrown 32-bit flag fields and keeps
//! growing toward the top of 64 bits, so the mask is held in a `u128`: wide
//! enough that unions over the full known set never lose bits. On the wire
//! the host transmits the mask as a decimal string for the same reason.
//!
//! Bits are grouped the way the host groups them:
//! - General guild/channel management
//! - Membership and moderation
//! - Text channels and threads
//! - Voice channels
//! - Apps and expressions

use bitflags::bitflags;

bitflags! {
    /// Permission bitmask, one bit per known permission.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Permissions: u128 {
        // === General ===
        /// Create invite links.
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Kick members from the guild.
        const KICK_MEMBERS          = 1 << 1;
        /// Ban members from the guild.
        const BAN_MEMBERS           = 1 << 2;
        /// Bypass all permission checks.
        const ADMINISTRATOR         = 1 << 3;
        /// Create, edit, and delete channels.
        const MANAGE_CHANNELS       = 1 << 4;
        /// Modify guild settings.
        const MANAGE_GUILD          = 1 << 5;
        /// Add reactions to messages.
        const ADD_REACTIONS         = 1 << 6;
        /// View the guild audit log.
        const VIEW_AUDIT_LOG        = 1 << 7;
        /// Speak with priority in voice channels.
        const PRIORITY_SPEAKER      = 1 << 8;
        /// Go live in voice channels.
        const STREAM                = 1 << 9;
        /// View a channel and read its message history.
        const VIEW_CHANNEL          = 1 << 10;

        // === Text ===
        /// Send messages in text channels.
        const SEND_MESSAGES         = 1 << 11;
        /// Send text-to-speech messages.
        const SEND_TTS_MESSAGES     = 1 << 12;
        /// Delete and pin messages from other members.
        const MANAGE_MESSAGES       = 1 << 13;
        /// Auto-embed posted links.
        const EMBED_LINKS           = 1 << 14;
        /// Attach files to messages.
        const ATTACH_FILES          = 1 << 15;
        /// Read message history.
        const READ_MESSAGE_HISTORY  = 1 << 16;
        /// Mention everyone and all roles.
        const MENTION_EVERYONE      = 1 << 17;
        /// Use emoji from other guilds.
        const USE_EXTERNAL_EMOJIS   = 1 << 18;
        /// View guild analytics.
        const VIEW_GUILD_INSIGHTS   = 1 << 19;

        // === Voice ===
        /// Connect to voice channels.
        const CONNECT               = 1 << 20;
        /// Speak in voice channels.
        const SPEAK                 = 1 << 21;
        /// Mute other members in voice channels.
        const MUTE_MEMBERS          = 1 << 22;
        /// Deafen other members in voice channels.
        const DEAFEN_MEMBERS        = 1 << 23;
        /// Move members between voice channels.
        const MOVE_MEMBERS          = 1 << 24;
        /// Use voice activity detection instead of push-to-talk.
        const USE_VAD               = 1 << 25;

        // === Membership ===
        /// Change own nickname.
        const CHANGE_NICKNAME       = 1 << 26;
        /// Change other members' nicknames.
        const MANAGE_NICKNAMES      = 1 << 27;
        /// Create, edit, and delete roles.
        const MANAGE_ROLES          = 1 << 28;
        /// Create, edit, and delete webhooks.
        const MANAGE_WEBHOOKS       = 1 << 29;
        /// Edit and delete guild emoji, stickers, and sounds.
        const MANAGE_GUILD_EXPRESSIONS = 1 << 30;

        // === Apps ===
        /// Use application slash commands.
        const USE_APPLICATION_COMMANDS = 1 << 31;
        /// Request to speak in stage channels.
        const REQUEST_TO_SPEAK      = 1 << 32;
        /// Create, edit, and cancel scheduled events.
        const MANAGE_EVENTS         = 1 << 33;

        // === Threads ===
        /// Archive and delete threads, view all private threads.
        const MANAGE_THREADS        = 1 << 34;
        /// Create public threads.
        const CREATE_PUBLIC_THREADS = 1 << 35;
        /// Create private threads.
        const CREATE_PRIVATE_THREADS = 1 << 36;
        /// Use stickers from other guilds.
        const USE_EXTERNAL_STICKERS = 1 << 37;
        /// Send messages in threads.
        const SEND_MESSAGES_IN_THREADS = 1 << 38;
        /// Launch activities in voice channels.
        const USE_EMBEDDED_ACTIVITIES = 1 << 39;
        /// Time out members.
        const MODERATE_MEMBERS      = 1 << 40;
        /// View creator monetization analytics.
        const VIEW_CREATOR_MONETIZATION_ANALYTICS = 1 << 41;

        // === Expressions ===
        /// Use the soundboard.
        const USE_SOUNDBOARD        = 1 << 42;
        /// Create guild emoji, stickers, and sounds.
        const CREATE_GUILD_EXPRESSIONS = 1 << 43;
        /// Create scheduled events.
        const CREATE_EVENTS         = 1 << 44;
        /// Use sounds from other guilds.
        const USE_EXTERNAL_SOUNDS   = 1 << 45;
        /// Send voice messages.
        const SEND_VOICE_MESSAGES   = 1 << 46;
        /// Set a voice channel status.
        const SET_VOICE_CHANNEL_STATUS = 1 << 48;
        /// Create polls.
        const SEND_POLLS            = 1 << 49;
        /// Use externally installed apps.
        const USE_EXTERNAL_APPS     = 1 << 50;
    }
}

impl Permissions {
    /// Check if this permission set includes the specified permission(s).
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }

    /// Parse a wire-format decimal string into a permission mask.
    ///
    /// Unknown bits are silently dropped to stay forward compatible with
    /// hosts that have grown new permissions.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        value.parse::<u128>().ok().map(Self::from_bits_truncate)
    }

    /// Render this mask in the host's wire format (decimal string).
    #[must_use]
    pub fn to_wire(self) -> String {
        self.bits().to_string()
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::empty()
    }
}
