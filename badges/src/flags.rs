//! User profile flags and premium tier.

use bitflags::bitflags;

bitflags! {
    /// Public profile flags, one bit per badge-worthy distinction.
    ///
    /// Bit numbers follow the host's wire format; gaps are bits the host
    /// assigns to non-badge flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct UserFlags: u64 {
        /// Platform staff.
        const STAFF                = 1 << 0;
        /// Partnered server owner.
        const PARTNER              = 1 << 1;
        /// HypeSquad events participant.
        const HYPESQUAD_EVENTS     = 1 << 2;
        /// Bug hunter, first tier.
        const BUG_HUNTER_LEVEL_1   = 1 << 3;
        /// HypeSquad house: Bravery.
        const HYPESQUAD_BRAVERY    = 1 << 6;
        /// HypeSquad house: Brilliance.
        const HYPESQUAD_BRILLIANCE = 1 << 7;
        /// HypeSquad house: Balance.
        const HYPESQUAD_BALANCE    = 1 << 8;
        /// Early premium supporter.
        const EARLY_SUPPORTER      = 1 << 9;
        /// Bug hunter, second tier.
        const BUG_HUNTER_LEVEL_2   = 1 << 14;
        /// Early verified bot developer.
        const VERIFIED_DEVELOPER   = 1 << 17;
        /// Moderator programs alumni.
        const CERTIFIED_MODERATOR  = 1 << 18;
        /// Active application developer.
        const ACTIVE_DEVELOPER     = 1 << 22;
    }
}

impl Default for UserFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Premium subscription tier, numbered as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumKind {
    /// No subscription.
    #[default]
    None,
    /// Legacy entry tier.
    Classic,
    /// Full tier.
    Regular,
    /// Current entry tier.
    Basic,
}

impl PremiumKind {
    /// Decode the wire `premium_type` number. Unknown values read as no
    /// subscription.
    #[must_use]
    pub const fn from_wire(value: u8) -> Self {
        match value {
            1 => Self::Classic,
            2 => Self::Regular,
            3 => Self::Basic,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn is_subscribed(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bits_match_wire_numbers() {
        assert_eq!(UserFlags::STAFF.bits(), 1 << 0);
        assert_eq!(UserFlags::BUG_HUNTER_LEVEL_2.bits(), 1 << 14);
        assert_eq!(UserFlags::ACTIVE_DEVELOPER.bits(), 1 << 22);
    }

    #[test]
    fn test_unknown_bits_truncate() {
        // Non-badge wire flags must not poison the set.
        let flags = UserFlags::from_bits_truncate((1 << 4) | UserFlags::PARTNER.bits());
        assert_eq!(flags, UserFlags::PARTNER);
    }

    #[test]
    fn test_premium_from_wire() {
        assert_eq!(PremiumKind::from_wire(0), PremiumKind::None);
        assert_eq!(PremiumKind::from_wire(1), PremiumKind::Classic);
        assert_eq!(PremiumKind::from_wire(2), PremiumKind::Regular);
        assert_eq!(PremiumKind::from_wire(3), PremiumKind::Basic);
        assert_eq!(PremiumKind::from_wire(42), PremiumKind::None);
    }

    #[test]
    fn test_is_subscribed() {
        assert!(!PremiumKind::None.is_subscribed());
        assert!(PremiumKind::Classic.is_subscribed());
        assert!(PremiumKind::Basic.is_subscribed());
    }
}
