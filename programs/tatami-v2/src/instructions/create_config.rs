use anchor_lang::prelude::*;
use crate::constants::{CONFIG_SEED, VAULT_AUTHORITY_SEED};
use crate::states::Config;

#[derive(Accounts)]
pub struct CreateConfig<'info> {
    /// Becomes the config admin (first call wins)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global config PDA
    #[account(
        init_if_needed,
        payer = admin,
        space = Config::DISCRIMINATOR.len() + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Vault authority PDA, holds no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateConfigParams {
    /// Program-wide scalar (fee / version counter)
    pub param: u64,
}

impl<'info> CreateConfig<'info> {
    pub fn handle(ctx: Context<CreateConfig>, params: CreateConfigParams) -> Result<()> {
        msg!("Creating config with admin: {}", ctx.accounts.admin.key());

        let config_key = ctx.accounts.config.key();
        let admin = ctx.accounts.admin.key();
        let config = &mut ctx.accounts.config;

        config.initialize(
            admin,
            params.param,
            ctx.bumps.vault_authority,
            ctx.bumps.config,
        )?;

        msg!("Config param: {}", params.param);
        msg!("Vault authority: {}", ctx.accounts.vault_authority.key());

        emit!(crate::events::ConfigCreated {
            config: config_key,
            admin,
            param: params.param,
            vault_authority: ctx.accounts.vault_authority.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
