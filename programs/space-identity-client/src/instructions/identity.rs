use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::system_program;
use tracing::debug;

use super::{check_platform_seed, IdentityInstruction, ProtocolInstruction};
use crate::pda::{derive_identity_pda, derive_space_pda};
use crate::platform::Platform;
use crate::utils::array32;

/// Arguments for `attest_identity`
#[derive(Debug, Clone)]
pub struct AttestIdentityArgs<'a> {
    pub dao_id: Pubkey,
    pub platform: Platform,
    /// Must equal `platform as u8`
    pub platform_seed: u8,
    /// `[u8; 32]` identity hash
    pub id_hash: &'a [u8],
    /// Unix timestamp, 0 = no expiry
    pub expires_at: i64,
    /// Signer
    pub attestor: Pubkey,
    /// Signer, pays for the identity account
    pub payer: Pubkey,
    pub program_id: Option<Pubkey>,
}

/// Arguments for `revoke_identity`
#[derive(Debug, Clone)]
pub struct RevokeIdentityArgs<'a> {
    pub dao_id: Pubkey,
    pub platform: Platform,
    /// Must equal `platform as u8`
    pub platform_seed: u8,
    /// `[u8; 32]` identity hash
    pub id_hash: &'a [u8],
    /// Signer
    pub attestor: Pubkey,
    pub program_id: Option<Pubkey>,
}

/// Build `attest_identity`
///
/// data = disc(8) + dao_id(32) + platform(1) + platform_seed(1) + id_hash(32) + expires_at(i64 LE)
///
/// Accounts:
/// 0. `[]` space PDA
/// 1. `[signer]` attestor
/// 2. `[writable]` identity PDA (init_if_needed)
/// 3. `[writable, signer]` payer
/// 4. `[]` system program
pub fn build_attest_identity_ix(args: &AttestIdentityArgs) -> Result<IdentityInstruction> {
    check_platform_seed(args.platform, args.platform_seed)?;
    let program_id = args.program_id.unwrap_or(crate::ID);
    let id_hash = array32(args.id_hash)?;

    let data = ProtocolInstruction::AttestIdentity.data(&[
        args.dao_id.as_ref(),
        &[args.platform.as_u8()],
        &[args.platform_seed],
        &id_hash,
        &args.expires_at.to_le_bytes(),
    ]);

    let (space, _) = derive_space_pda(&program_id, &args.dao_id)?;
    let (identity, _) = derive_identity_pda(&program_id, &space, args.platform_seed, &id_hash)?;

    debug!(
        dao_id = %args.dao_id,
        platform = %args.platform,
        %space,
        %identity,
        expires_at = args.expires_at,
        "built attest_identity"
    );

    Ok(IdentityInstruction {
        space,
        identity,
        ix: Instruction {
            program_id,
            accounts: vec![
                AccountMeta::new_readonly(space, false),
                AccountMeta::new_readonly(args.attestor, true),
                AccountMeta::new(identity, false),
                AccountMeta::new(args.payer, true),
                AccountMeta::new_readonly(system_program::ID, false),
            ],
            data,
        },
    })
}

/// Build `revoke_identity`
///
/// data = disc(8) + dao_id(32) + platform(1) + platform_seed(1) + id_hash(32)
///
/// Accounts:
/// 0. `[]` space PDA
/// 1. `[signer]` attestor
/// 2. `[writable]` identity PDA
pub fn build_revoke_identity_ix(args: &RevokeIdentityArgs) -> Result<IdentityInstruction> {
    check_platform_seed(args.platform, args.platform_seed)?;
    let program_id = args.program_id.unwrap_or(crate::ID);
    let id_hash = array32(args.id_hash)?;

    let data = ProtocolInstruction::RevokeIdentity.data(&[
        args.dao_id.as_ref(),
        &[args.platform.as_u8()],
        &[args.platform_seed],
        &id_hash,
    ]);

    let (space, _) = derive_space_pda(&program_id, &args.dao_id)?;
    let (identity, _) = derive_identity_pda(&program_id, &space, args.platform_seed, &id_hash)?;

    debug!(
        dao_id = %args.dao_id,
        platform = %args.platform,
        %space,
        %identity,
        "built revoke_identity"
    );

    Ok(IdentityInstruction {
        space,
        identity,
        ix: Instruction {
            program_id,
            accounts: vec![
                AccountMeta::new_readonly(space, false),
                AccountMeta::new_readonly(args.attestor, true),
                AccountMeta::new(identity, false),
            ],
            data,
        },
    })
}
