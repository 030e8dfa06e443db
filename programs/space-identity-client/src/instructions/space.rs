use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::system_program;
use tracing::debug;

use super::{ProtocolInstruction, SpaceInstruction};
use crate::pda::derive_space_pda;
use crate::utils::array32;

/// Arguments for `initialize_space`
#[derive(Debug, Clone)]
pub struct InitializeSpaceArgs<'a> {
    pub dao_id: Pubkey,
    /// Space salt, `[u8; 32]`
    pub salt: &'a [u8],
    /// Signer
    pub authority: Pubkey,
    /// Signer, pays for the space account
    pub payer: Pubkey,
    /// Alternate deployment; defaults to `crate::ID`
    pub program_id: Option<Pubkey>,
}

/// Build `initialize_space`
///
/// data = disc(8) + dao_id(32) + salt(32)
///
/// Accounts:
/// 0. `[writable]` space PDA (init)
/// 1. `[signer]` authority
/// 2. `[writable, signer]` payer
/// 3. `[]` system program
pub fn build_initialize_space_ix(args: &InitializeSpaceArgs) -> Result<SpaceInstruction> {
    let program_id = args.program_id.unwrap_or(crate::ID);
    let salt = array32(args.salt)?;

    let data = ProtocolInstruction::InitializeSpace.data(&[args.dao_id.as_ref(), &salt]);
    let (space, _) = derive_space_pda(&program_id, &args.dao_id)?;

    debug!(
        dao_id = %args.dao_id,
        %space,
        %program_id,
        data_len = data.len(),
        "built initialize_space"
    );

    Ok(SpaceInstruction {
        space,
        ix: Instruction {
            program_id,
            accounts: vec![
                AccountMeta::new(space, false),
                AccountMeta::new_readonly(args.authority, true),
                AccountMeta::new(args.payer, true),
                AccountMeta::new_readonly(system_program::ID, false),
            ],
            data,
        },
    })
}
