use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// External governance addresses recorded by `initialize_dao`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct DaoLink {
    /// SPL governance realm
    pub realm: Pubkey,
    /// Governance account governing the project's mint
    pub governance: Pubkey,
    /// Native SOL treasury owned by the governance
    pub native_treasury: Pubkey,
    /// Timestamp of the handoff
    pub linked_at: i64,
}

/// One record per launched token, stored at `[PROJECT_SEED, mint]`
#[account]
#[derive(InitSpace)]
pub struct Project {
    /// Admin that launched the project; gates DAO handoff and airdrops
    pub authority: Pubkey,
    /// Token mint, immutable
    pub mint: Pubkey,
    /// Vault token account (ATA of the vault authority)
    pub vault: Pubkey,
    /// Team token account that received the team allocation
    pub team_token_account: Pubkey,
    /// Mint decimals, immutable
    pub decimals: u8,
    /// Total supply minted at launch
    pub total_minted: u64,
    /// Amount minted to the team account
    pub team_allocation: u64,
    /// Amount minted to the vault, the airdrop cap
    pub vault_allocation: u64,
    /// Cumulative amount airdropped out of the vault
    pub distributed: u64,
    /// Launch schedule / ratio parameter
    pub schedule_param: u64,
    /// Config scalar at launch time
    pub config_param: u64,
    /// Launch index from the config counter
    pub index: u64,
    /// Launch timestamp
    pub launched_at: i64,
    /// Governance addresses, absent until `initialize_dao`
    pub dao_link: Option<DaoLink>,
    /// Bump seed for the PDA
    pub bump: u8,
}

/// Everything `Project::launch` needs to populate a fresh record
#[derive(Clone, Debug)]
pub struct ProjectLaunch {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub team_token_account: Pubkey,
    pub decimals: u8,
    pub team_allocation: u64,
    pub vault_allocation: u64,
    pub schedule_param: u64,
    pub config_param: u64,
    pub index: u64,
    pub launched_at: i64,
    pub bump: u8,
}

impl Project {
    /// Total supply of a launch split, failing on u64 overflow
    pub fn split_total(team_allocation: u64, vault_allocation: u64) -> Result<u64> {
        let total = team_allocation
            .checked_add(vault_allocation)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(total)
    }

    pub fn is_launched(&self) -> bool {
        self.mint != Pubkey::default()
    }

    /// Populates a fresh record. Distribution starts at zero.
    pub fn launch(&mut self, launch: ProjectLaunch) -> Result<()> {
        require!(!self.is_launched(), ErrorCode::MintAlreadyExists);

        let total_minted = Self::split_total(launch.team_allocation, launch.vault_allocation)?;

        self.authority = launch.authority;
        self.mint = launch.mint;
        self.vault = launch.vault;
        self.team_token_account = launch.team_token_account;
        self.decimals = launch.decimals;
        self.total_minted = total_minted;
        self.team_allocation = launch.team_allocation;
        self.vault_allocation = launch.vault_allocation;
        self.distributed = 0;
        self.schedule_param = launch.schedule_param;
        self.config_param = launch.config_param;
        self.index = launch.index;
        self.launched_at = launch.launched_at;
        self.dao_link = None;
        self.bump = launch.bump;

        Ok(())
    }

    /// Allocation still available for airdrops
    pub fn remaining_allocation(&self) -> Result<u64> {
        let remaining = self.vault_allocation
            .checked_sub(self.distributed)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(remaining)
    }

    /// Validates an airdrop against the allocation cap and the observed vault balance,
    /// then commits it. Returns the new `distributed` total.
    pub fn record_distribution(&mut self, amount: u64, vault_balance: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        let distributed = self.distributed
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        require!(
            distributed <= self.vault_allocation,
            ErrorCode::AllocationExceeded
        );
        require!(
            vault_balance >= amount,
            ErrorCode::InsufficientVaultBalance
        );

        self.distributed = distributed;
        Ok(distributed)
    }

    /// Records the governance handoff. Only allowed once.
    pub fn link_dao(&mut self, link: DaoLink) -> Result<()> {
        require!(self.dao_link.is_none(), ErrorCode::DaoAlreadyLinked);
        self.dao_link = Some(link);
        Ok(())
    }

    pub fn is_dao_linked(&self) -> bool {
        self.dao_link.is_some()
    }
}
