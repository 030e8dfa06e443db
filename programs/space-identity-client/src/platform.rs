use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::{TAG_DISCORD, TAG_EMAIL, TAG_TELEGRAM, TAG_TWITTER};
use crate::error::ClientError;

/// Verification platform attested by the space.
///
/// Discriminants match the on-chain enum and double as the one-byte platform
/// seed of the identity PDA. Renumbering is a protocol break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Platform {
    Discord = 0,
    Telegram = 1,
    Twitter = 2,
    Email = 3,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Discord,
        Platform::Telegram,
        Platform::Twitter,
        Platform::Email,
    ];

    /// Borsh variant index, also used as the identity PDA seed
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Domain separation tag used when hashing a user id of this platform
    pub const fn tag(self) -> &'static str {
        match self {
            Platform::Discord => TAG_DISCORD,
            Platform::Telegram => TAG_TELEGRAM,
            Platform::Twitter => TAG_TWITTER,
            Platform::Email => TAG_EMAIL,
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.tag() == tag)
            .ok_or_else(|| error!(ClientError::UnknownPlatform))
    }
}

impl TryFrom<u8> for Platform {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Platform::Discord),
            1 => Ok(Platform::Telegram),
            2 => Ok(Platform::Twitter),
            3 => Ok(Platform::Email),
            _ => err!(ClientError::UnknownPlatform),
        }
    }
}

impl From<Platform> for u8 {
    fn from(platform: Platform) -> u8 {
        platform.as_u8()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_are_stable() {
        assert_eq!(Platform::Discord.as_u8(), 0);
        assert_eq!(Platform::Telegram.as_u8(), 1);
        assert_eq!(Platform::Twitter.as_u8(), 2);
        assert_eq!(Platform::Email.as_u8(), 3);
    }

    #[test]
    fn test_u8_conversion() {
        for platform in Platform::ALL {
            assert_eq!(Platform::try_from(platform.as_u8()).unwrap(), platform);
            assert_eq!(u8::from(platform), platform as u8);
        }
        assert!(Platform::try_from(4u8).is_err());
        assert!(Platform::try_from(u8::MAX).is_err());
    }

    #[test]
    fn test_tags() {
        assert_eq!(Platform::Discord.tag(), "discord");
        assert_eq!(Platform::Telegram.tag(), "telegram");
        assert_eq!(Platform::Twitter.tag(), "twitter");
        assert_eq!(Platform::Email.tag(), "email");

        for platform in Platform::ALL {
            assert_eq!(Platform::from_tag(platform.tag()).unwrap(), platform);
        }
        // wallet is a domain tag but not a platform
        assert!(Platform::from_tag("wallet").is_err());
        assert!(Platform::from_tag("Discord").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::Twitter.to_string(), "twitter");
    }
}
