//! Client for the DAO space identity program.
//!
//! Derives the program's PDAs, computes the salted identity and wallet
//! fingerprints used as seeds, and encodes the five program instructions
//! byte-for-byte. Reads are delegated to an [`reader::AccountTransport`].

use anchor_lang::prelude::*;

declare_id!("Ev4pb62pHYcFHLmV89JRcgQtS39ndBia51X9ne9NmBkH");

pub mod constants;
pub mod error;
pub mod hashing;
pub mod instructions;
pub mod pda;
pub mod platform;
pub mod reader;
#[cfg(feature = "rpc")]
pub mod rpc;
pub mod utils;

pub use error::ClientError;
pub use hashing::{identity_hash, instruction_discriminator, platform_identity_hash, wallet_hash};
pub use instructions::*;
pub use pda::{derive_identity_pda, derive_link_pda, derive_space_pda};
pub use platform::Platform;
pub use reader::{
    fetch_identity, fetch_links_for_identity, fetch_space, links_by_identity_filter,
    AccountTransport, MemcmpFilter,
};
