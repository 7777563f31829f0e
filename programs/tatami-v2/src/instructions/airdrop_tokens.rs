use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, TransferChecked},
};

use crate::constants::{CONFIG_SEED, PROJECT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::ErrorCode;
use crate::states::{Config, Project};

#[derive(Accounts)]
pub struct AirdropTokens<'info> {
    /// Project authority, pays for the recipient token account if needed
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [PROJECT_SEED, mint.key().as_ref()],
        bump = project.bump,
        has_one = authority @ ErrorCode::Unauthorized,
        has_one = mint @ ErrorCode::InvalidMint,
        has_one = vault @ ErrorCode::InvalidVault
    )]
    pub project: Box<Account<'info, Project>>,

    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: Vault authority PDA, signs the transfer
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = config.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault_authority
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: Recipient wallet, validated in the handler
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = recipient
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AirdropParams {
    /// Amount in base units
    pub amount: u64,
}

/// The vault can never be its own recipient
pub fn check_recipient(recipient: &Pubkey, vault_authority: &Pubkey) -> Result<()> {
    require!(
        *recipient != Pubkey::default() && recipient != vault_authority,
        ErrorCode::InvalidRecipient
    );
    Ok(())
}

impl<'info> AirdropTokens<'info> {
    pub fn handle(ctx: Context<AirdropTokens>, params: AirdropParams) -> Result<()> {
        let recipient = ctx.accounts.recipient.key();
        let vault_balance = ctx.accounts.vault.amount;

        msg!("Airdrop of {} units to {}", params.amount, recipient);
        msg!("Vault balance before: {} units", vault_balance);

        check_recipient(&recipient, &ctx.accounts.vault_authority.key())?;

        let distributed = ctx
            .accounts
            .project
            .record_distribution(params.amount, vault_balance)?;

        let seeds = ctx.accounts.config.vault_authority_seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        token::transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.vault.to_account_info(),
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.recipient_token_account.to_account_info(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            params.amount,
            ctx.accounts.mint.decimals,
        )?;

        ctx.accounts.vault.reload()?;

        let expected_balance = vault_balance
            .checked_sub(params.amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        require!(
            ctx.accounts.vault.amount == expected_balance,
            ErrorCode::InsufficientVaultBalance
        );

        let remaining = ctx.accounts.project.remaining_allocation()?;

        msg!("Distributed: {} / {} units", distributed, ctx.accounts.project.vault_allocation);
        msg!("Vault balance after: {} units", ctx.accounts.vault.amount);

        emit!(crate::events::TokensAirdropped {
            project: ctx.accounts.project.key(),
            mint: ctx.accounts.mint.key(),
            recipient,
            recipient_token_account: ctx.accounts.recipient_token_account.key(),
            amount: params.amount,
            distributed,
            remaining_allocation: remaining,
            vault_balance: ctx.accounts.vault.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
