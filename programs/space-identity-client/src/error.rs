use anchor_lang::prelude::*;

#[error_code]
pub enum ClientError {
    #[msg("Expected 32-byte array")]
    InvalidArrayLength,

    #[msg("platformSeed must match platform enum discriminant")]
    PlatformSeedMismatch,

    #[msg("Unknown verification platform")]
    UnknownPlatform,

    #[msg("Unable to find a viable program address bump seed")]
    AddressDerivationFailed,
}
