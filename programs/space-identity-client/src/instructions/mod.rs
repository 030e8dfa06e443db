//! Instruction builders for the space identity program.
//!
//! Every payload is `discriminator(8) || args`, args in declared order with
//! integers little-endian. Account order and signer/writable flags mirror the
//! program's `#[derive(Accounts)]` structs and are not checked locally.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;

use crate::constants::DISCRIMINATOR_LEN;
use crate::error::ClientError;
use crate::hashing::instruction_discriminator;
use crate::platform::Platform;
use crate::utils::concat_bytes;

pub mod identity;
pub mod link;
pub mod space;

pub use identity::*;
pub use link::*;
pub use space::*;

/// Program entry points, named as in the program's `#[program]` module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolInstruction {
    InitializeSpace,
    AttestIdentity,
    RevokeIdentity,
    LinkWallet,
    UnlinkWallet,
}

impl ProtocolInstruction {
    pub const ALL: [ProtocolInstruction; 5] = [
        ProtocolInstruction::InitializeSpace,
        ProtocolInstruction::AttestIdentity,
        ProtocolInstruction::RevokeIdentity,
        ProtocolInstruction::LinkWallet,
        ProtocolInstruction::UnlinkWallet,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ProtocolInstruction::InitializeSpace => "initialize_space",
            ProtocolInstruction::AttestIdentity => "attest_identity",
            ProtocolInstruction::RevokeIdentity => "revoke_identity",
            ProtocolInstruction::LinkWallet => "link_wallet",
            ProtocolInstruction::UnlinkWallet => "unlink_wallet",
        }
    }

    pub fn discriminator(self) -> [u8; DISCRIMINATOR_LEN] {
        instruction_discriminator(self.name())
    }

    /// Instruction data: discriminator followed by the encoded args
    pub(crate) fn data(self, args: &[&[u8]]) -> Vec<u8> {
        let discriminator = self.discriminator();
        let mut segments = Vec::with_capacity(args.len() + 1);
        segments.push(&discriminator[..]);
        segments.extend_from_slice(args);
        concat_bytes(&segments)
    }
}

/// Output of `initialize_space`
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceInstruction {
    pub space: Pubkey,
    pub ix: Instruction,
}

/// Output of `attest_identity` / `revoke_identity`
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityInstruction {
    pub space: Pubkey,
    pub identity: Pubkey,
    pub ix: Instruction,
}

/// Output of `link_wallet` / `unlink_wallet`
#[derive(Debug, Clone, PartialEq)]
pub struct LinkInstruction {
    pub space: Pubkey,
    pub identity: Pubkey,
    pub link: Pubkey,
    pub ix: Instruction,
}

/// The platform enum and the raw identity PDA seed are sent separately;
/// the program expects them to agree.
fn check_platform_seed(platform: Platform, platform_seed: u8) -> Result<()> {
    require_eq!(
        platform.as_u8(),
        platform_seed,
        ClientError::PlatformSeedMismatch
    );
    Ok(())
}
