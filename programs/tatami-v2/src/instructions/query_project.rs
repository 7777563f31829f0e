use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::constants::PROJECT_SEED;
use crate::errors::ErrorCode;
use crate::states::{DaoLink, Project};

/// Read-only snapshot of a project and its vault
#[derive(Accounts)]
pub struct GetProjectInfo<'info> {
    #[account(
        seeds = [PROJECT_SEED, mint.key().as_ref()],
        bump = project.bump,
        has_one = mint @ ErrorCode::InvalidMint,
        has_one = vault @ ErrorCode::InvalidVault
    )]
    pub project: Box<Account<'info, Project>>,

    pub mint: Box<Account<'info, Mint>>,

    pub vault: Box<Account<'info, TokenAccount>>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub decimals: u8,
    pub total_minted: u64,
    pub team_allocation: u64,
    pub vault_allocation: u64,
    pub distributed: u64,
    pub remaining_allocation: u64,
    pub vault_balance: u64,
    pub index: u64,
    pub launched_at: i64,
    pub dao_link: Option<DaoLink>,
}

impl ProjectInfo {
    pub fn snapshot(project: &Project, vault_balance: u64) -> Result<Self> {
        Ok(Self {
            mint: project.mint,
            authority: project.authority,
            decimals: project.decimals,
            total_minted: project.total_minted,
            team_allocation: project.team_allocation,
            vault_allocation: project.vault_allocation,
            distributed: project.distributed,
            remaining_allocation: project.remaining_allocation()?,
            vault_balance,
            index: project.index,
            launched_at: project.launched_at,
            dao_link: project.dao_link,
        })
    }
}

impl<'info> GetProjectInfo<'info> {
    pub fn handle(ctx: Context<GetProjectInfo>) -> Result<ProjectInfo> {
        let info = ProjectInfo::snapshot(&ctx.accounts.project, ctx.accounts.vault.amount)?;

        msg!("Project #{} for mint: {}", info.index, info.mint);
        msg!("Total minted: {} units", info.total_minted);
        msg!("Team allocation: {} units", info.team_allocation);
        msg!("Vault allocation: {} units", info.vault_allocation);
        msg!("Distributed: {} units", info.distributed);
        msg!("Remaining: {} units", info.remaining_allocation);
        msg!("Vault balance: {} units", info.vault_balance);
        if let Some(link) = &info.dao_link {
            msg!("DAO realm: {}", link.realm);
        }

        Ok(info)
    }
}
