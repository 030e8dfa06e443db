//! Domain-separated fingerprints used as PDA seeds.
//!
//! ```text
//! wallet_hash   = sha256(salt || "wallet" || wallet_pubkey)
//! identity_hash = sha256(salt || platform_tag || platform_user_id)
//! ```
//!
//! Concatenation order is part of the protocol. The raw user id and wallet
//! never appear in an address, only their salted fingerprint.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::{DISCRIMINATOR_LEN, IX_DISCRIMINATOR_PREFIX, TAG_WALLET};
use crate::platform::Platform;

/// sha256(salt || "wallet" || wallet)
pub fn wallet_hash(space_salt: &[u8; 32], wallet: &Pubkey) -> [u8; 32] {
    hashv(&[&space_salt[..], TAG_WALLET.as_bytes(), wallet.as_ref()]).to_bytes()
}

/// sha256(salt || platform_tag || platform_user_id)
///
/// `platform_user_id` may be a `&str` (hashed as UTF-8) or raw bytes already
/// serialized by the caller; both go through the same digest.
pub fn identity_hash(
    space_salt: &[u8; 32],
    platform_tag: &str,
    platform_user_id: impl AsRef<[u8]>,
) -> [u8; 32] {
    hashv(&[
        &space_salt[..],
        platform_tag.as_bytes(),
        platform_user_id.as_ref(),
    ])
    .to_bytes()
}

/// Identity fingerprint tagged with the platform's own domain tag
pub fn platform_identity_hash(
    space_salt: &[u8; 32],
    platform: Platform,
    platform_user_id: impl AsRef<[u8]>,
) -> [u8; 32] {
    identity_hash(space_salt, platform.tag(), platform_user_id)
}

/// Anchor instruction discriminator: sha256("global:<name>")[0..8]
pub fn instruction_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let hash = hashv(&[IX_DISCRIMINATOR_PREFIX.as_bytes(), name.as_bytes()]).to_bytes();
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    discriminator
}
