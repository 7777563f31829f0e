use anchor_lang::error::Error;
use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Config has already been initialized")]
    AlreadyInitialized,
    #[msg("Signer is not allowed to perform this operation")]
    Unauthorized,
    #[msg("A project already exists for this mint")]
    MintAlreadyExists,
    #[msg("Invalid decimals - must be between 0 and 9")]
    InvalidDecimals,
    #[msg("Invalid token name - must be 1 to 32 bytes")]
    InvalidTokenName,
    #[msg("Invalid token symbol - must be 1 to 10 bytes")]
    InvalidTokenSymbol,
    #[msg("Invalid token uri - must be at most 200 bytes")]
    InvalidTokenUri,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Arithmetic overflow occurred during calculation")]
    ArithmeticOverflow,
    #[msg("Token metadata creation failed")]
    MetadataCreationFailed,
    #[msg("Project is already linked to a DAO")]
    DaoAlreadyLinked,
    #[msg("Invalid DAO name - must be 1 to 32 bytes")]
    InvalidDaoName,
    #[msg("Invalid vote threshold - must be between 1 and 100 percent")]
    InvalidVoteThreshold,
    #[msg("Invalid voting period - must be greater than zero")]
    InvalidVotingPeriod,
    #[msg("Council mint and holding accounts are required when use_council is set")]
    MissingCouncilMint,
    #[msg("Governance account does not match the derived address")]
    InvalidGovernanceAccount,
    #[msg("Governance program rejected the DAO creation")]
    GovernanceCreationFailed,
    #[msg("Airdrop would exceed the project's vault allocation")]
    AllocationExceeded,
    #[msg("Vault token balance is lower than the requested amount")]
    InsufficientVaultBalance,
    #[msg("Recipient cannot receive vault tokens")]
    InvalidRecipient,
    #[msg("Mint does not belong to this project")]
    InvalidMint,
    #[msg("Vault does not belong to this project")]
    InvalidVault,
}

impl ErrorCode {
    /// Logs which collaborator call failed and returns its error unchanged
    pub fn collaborator(self, step: &str, err: Error) -> Error {
        msg!("{} ({}): {}", self, step, err);
        err
    }
}
