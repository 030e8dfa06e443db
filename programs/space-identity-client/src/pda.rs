//! Program-derived addresses of the space identity program.
//!
//! Seed layout (order and content are the protocol surface):
//! - Space:    ["space", dao_id]
//! - Identity: ["identity", space, [platform_seed], id_hash]
//! - Link:     ["link", identity, wallet_hash]

use anchor_lang::prelude::*;
use tracing::trace;

use crate::constants::{SEED_IDENTITY, SEED_LINK, SEED_SPACE};
use crate::error::ClientError;

fn find_pda(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    let (address, bump) = Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(ClientError::AddressDerivationFailed))?;
    trace!(%address, bump, %program_id, "derived program address");
    Ok((address, bump))
}

/// Space PDA
/// seeds = ["space", dao_id]
pub fn derive_space_pda(program_id: &Pubkey, dao_id: &Pubkey) -> Result<(Pubkey, u8)> {
    find_pda(&[SEED_SPACE, dao_id.as_ref()], program_id)
}

/// Identity PDA
/// seeds = ["identity", space, platform_seed, id_hash]
pub fn derive_identity_pda(
    program_id: &Pubkey,
    space: &Pubkey,
    platform_seed: u8,
    id_hash: &[u8; 32],
) -> Result<(Pubkey, u8)> {
    find_pda(
        &[SEED_IDENTITY, space.as_ref(), &[platform_seed], id_hash],
        program_id,
    )
}

/// Link PDA
/// seeds = ["link", identity, wallet_hash]
pub fn derive_link_pda(
    program_id: &Pubkey,
    identity: &Pubkey,
    wallet_hash: &[u8; 32],
) -> Result<(Pubkey, u8)> {
    find_pda(&[SEED_LINK, identity.as_ref(), wallet_hash], program_id)
}
