use anchor_lang::prelude::*;
use crate::constants::VAULT_AUTHORITY_SEED;
use crate::errors::ErrorCode;

/// Program-wide singleton, stored at the `config` PDA
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Authority allowed to launch projects
    pub admin: Pubkey,
    /// Program-wide scalar (fee / version counter), copied onto each project
    pub param: u64,
    /// Number of projects launched so far
    pub project_count: u64,
    /// Set once by `create_config`
    pub is_initialized: bool,
    /// Bump of the vault authority PDA
    pub vault_authority_bump: u8,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl Config {
    /// First-call-wins initialization. A second call fails with `AlreadyInitialized`.
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        param: u64,
        vault_authority_bump: u8,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized, ErrorCode::AlreadyInitialized);

        self.admin = admin;
        self.param = param;
        self.project_count = 0;
        self.is_initialized = true;
        self.vault_authority_bump = vault_authority_bump;
        self.bump = bump;

        Ok(())
    }

    /// Reserves the next project index
    pub fn next_project_index(&mut self) -> Result<u64> {
        let index = self.project_count;
        self.project_count = self.project_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(index)
    }

    pub fn vault_authority_seeds(&self) -> [&[u8]; 2] {
        [VAULT_AUTHORITY_SEED, std::slice::from_ref(&self.vault_authority_bump)]
    }
}
