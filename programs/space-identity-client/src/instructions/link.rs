use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::system_program;
use tracing::debug;

use super::{LinkInstruction, ProtocolInstruction};
use crate::pda::{derive_identity_pda, derive_link_pda, derive_space_pda};
use crate::utils::array32;

/// Arguments for `link_wallet`
#[derive(Debug, Clone)]
pub struct LinkWalletArgs<'a> {
    pub dao_id: Pubkey,
    /// Identity PDA seed (platform discriminant)
    pub platform_seed: u8,
    /// `[u8; 32]` identity hash, identity PDA seed
    pub id_hash: &'a [u8],
    /// Wallet being linked, passed unchecked (not a signer)
    pub wallet: Pubkey,
    /// `[u8; 32]` wallet hash, instruction arg and link PDA seed
    pub wallet_hash: &'a [u8],
    /// Signer
    pub attestor: Pubkey,
    /// Signer, pays for the link account
    pub payer: Pubkey,
    pub program_id: Option<Pubkey>,
}

/// Arguments for `unlink_wallet`
#[derive(Debug, Clone)]
pub struct UnlinkWalletArgs<'a> {
    pub dao_id: Pubkey,
    pub platform_seed: u8,
    /// `[u8; 32]` identity hash
    pub id_hash: &'a [u8],
    /// `[u8; 32]` wallet hash
    pub wallet_hash: &'a [u8],
    /// Signer
    pub attestor: Pubkey,
    /// Receives the closed link account's rent
    pub recipient: Pubkey,
    pub program_id: Option<Pubkey>,
}

/// Build `link_wallet`
///
/// data = disc(8) + dao_id(32) + platform_seed(1) + id_hash(32) + wallet_hash(32)
///
/// Accounts:
/// 0. `[]` space PDA
/// 1. `[signer]` attestor
/// 2. `[]` identity PDA
/// 3. `[]` wallet (unchecked)
/// 4. `[writable]` link PDA (init_if_needed)
/// 5. `[writable, signer]` payer
/// 6. `[]` system program
pub fn build_link_wallet_ix(args: &LinkWalletArgs) -> Result<LinkInstruction> {
    let program_id = args.program_id.unwrap_or(crate::ID);
    let wallet_hash = array32(args.wallet_hash)?;
    let id_hash = array32(args.id_hash)?;

    let data = ProtocolInstruction::LinkWallet.data(&[
        args.dao_id.as_ref(),
        &[args.platform_seed],
        &id_hash,
        &wallet_hash,
    ]);

    let (space, _) = derive_space_pda(&program_id, &args.dao_id)?;
    let (identity, _) = derive_identity_pda(&program_id, &space, args.platform_seed, &id_hash)?;
    let (link, _) = derive_link_pda(&program_id, &identity, &wallet_hash)?;

    debug!(
        dao_id = %args.dao_id,
        wallet = %args.wallet,
        %identity,
        %link,
        "built link_wallet"
    );

    Ok(LinkInstruction {
        space,
        identity,
        link,
        ix: Instruction {
            program_id,
            accounts: vec![
                AccountMeta::new_readonly(space, false),
                AccountMeta::new_readonly(args.attestor, true),
                AccountMeta::new_readonly(identity, false),
                AccountMeta::new_readonly(args.wallet, false),
                AccountMeta::new(link, false),
                AccountMeta::new(args.payer, true),
                AccountMeta::new_readonly(system_program::ID, false),
            ],
            data,
        },
    })
}

/// Build `unlink_wallet`
///
/// data = disc(8) + dao_id(32)
///
/// The identity and wallet hashes are only used to derive the PDAs.
///
/// Accounts:
/// 0. `[]` space PDA
/// 1. `[signer]` attestor
/// 2. `[]` identity PDA
/// 3. `[writable]` link PDA (closed)
/// 4. `[writable]` recipient
/// 5. `[]` system program
pub fn build_unlink_wallet_ix(args: &UnlinkWalletArgs) -> Result<LinkInstruction> {
    let program_id = args.program_id.unwrap_or(crate::ID);
    let id_hash = array32(args.id_hash)?;
    let wallet_hash = array32(args.wallet_hash)?;

    let data = ProtocolInstruction::UnlinkWallet.data(&[args.dao_id.as_ref()]);

    let (space, _) = derive_space_pda(&program_id, &args.dao_id)?;
    let (identity, _) = derive_identity_pda(&program_id, &space, args.platform_seed, &id_hash)?;
    let (link, _) = derive_link_pda(&program_id, &identity, &wallet_hash)?;

    debug!(
        dao_id = %args.dao_id,
        %identity,
        %link,
        recipient = %args.recipient,
        "built unlink_wallet"
    );

    Ok(LinkInstruction {
        space,
        identity,
        link,
        ix: Instruction {
            program_id,
            accounts: vec![
                AccountMeta::new_readonly(space, false),
                AccountMeta::new_readonly(args.attestor, true),
                AccountMeta::new_readonly(identity, false),
                AccountMeta::new(link, false),
                AccountMeta::new(args.recipient, false),
                AccountMeta::new_readonly(system_program::ID, false),
            ],
            data,
        },
    })
}
