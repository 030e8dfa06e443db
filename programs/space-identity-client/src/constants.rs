//! Centralized PDA seed and domain tag constants for the space identity program.
//!
//! Seeds and tags are part of the on-chain protocol: the external program
//! rebuilds the same addresses and hashes from these exact bytes.

/// Space PDA seed
/// PDA: ["space", dao_id]
pub const SEED_SPACE: &[u8] = b"space";

/// Identity PDA seed
/// PDA: ["identity", space, [platform_seed], id_hash]
pub const SEED_IDENTITY: &[u8] = b"identity";

/// Wallet link PDA seed
/// PDA: ["link", identity, wallet_hash]
pub const SEED_LINK: &[u8] = b"link";

/// Domain separation tags, prepended (after the space salt) to every hash input
pub const TAG_WALLET: &str = "wallet";
pub const TAG_DISCORD: &str = "discord";
pub const TAG_TELEGRAM: &str = "telegram";
pub const TAG_TWITTER: &str = "twitter";
pub const TAG_EMAIL: &str = "email";

/// Prefix of the Anchor instruction discriminator preimage
pub const IX_DISCRIMINATOR_PREFIX: &str = "global:";

/// Instruction discriminator length in bytes
pub const DISCRIMINATOR_LEN: usize = 8;

/// Offset of the identity pubkey inside a WalletLink account.
/// 8 (account discriminator) + 1 (leading u8 field).
/// Versioned with the program's account schema; must move with it.
pub const LINK_IDENTITY_OFFSET: usize = 8 + 1;
