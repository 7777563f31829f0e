use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount};
use anchor_spl::{
    associated_token::{self, AssociatedToken},
    metadata::{self, mpl_token_metadata::types::DataV2, Metadata},
    token::{
        self, spl_token::instruction::AuthorityType, InitializeMint2, Mint, MintTo, SetAuthority,
        Token,
    },
};

use crate::constants::{
    CONFIG_SEED, MAX_DECIMALS, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH, METADATA_SEED,
    PROJECT_SEED, VAULT_AUTHORITY_SEED,
};
use crate::errors::ErrorCode;
use crate::states::{Config, Project, ProjectLaunch};

#[derive(Accounts)]
pub struct InitProject<'info> {
    /// Config admin, pays for every account created here
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub config: Box<Account<'info, Config>>,

    /// CHECK: Vault authority PDA, mint authority during launch and owner of the vault
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = config.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// New mint keypair; the account is created in the handler
    #[account(mut)]
    pub mint: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = Project::DISCRIMINATOR.len() + Project::INIT_SPACE,
        seeds = [PROJECT_SEED, mint.key().as_ref()],
        bump
    )]
    pub project: Box<Account<'info, Project>>,

    /// CHECK: Metaplex metadata PDA for the mint
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            metadata::ID.as_ref(),
            mint.key().as_ref(),
        ],
        bump,
        seeds::program = metadata::ID
    )]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: Team wallet, owner of the team token account
    pub team_wallet: UncheckedAccount<'info>,

    /// CHECK: Vault ATA (vault_authority, mint), created in the handler
    #[account(
        mut,
        seeds = [
            vault_authority.key().as_ref(),
            token::ID.as_ref(),
            mint.key().as_ref(),
        ],
        bump,
        seeds::program = associated_token::ID
    )]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: Team ATA (team_wallet, mint), created in the handler
    #[account(
        mut,
        seeds = [
            team_wallet.key().as_ref(),
            token::ID.as_ref(),
            mint.key().as_ref(),
        ],
        bump,
        seeds::program = associated_token::ID
    )]
    pub team_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitProjectParams {
    /// Mint decimals (0-9)
    pub decimals: u8,
    /// Metadata name
    pub name: String,
    /// Metadata symbol
    pub symbol: String,
    /// Metadata uri, may be empty
    pub uri: String,
    /// Launch schedule / ratio parameter
    pub schedule_param: u64,
    /// Initial split: [team amount, vault amount]
    pub amounts: [u64; 2],
}

impl InitProjectParams {
    pub fn team_amount(&self) -> u64 {
        self.amounts[0]
    }

    pub fn vault_amount(&self) -> u64 {
        self.amounts[1]
    }

    /// Checks decimals, metadata bounds and the split. Returns the total supply.
    pub fn validate(&self) -> Result<u64> {
        require!(self.decimals <= MAX_DECIMALS, ErrorCode::InvalidDecimals);
        require!(
            !self.name.is_empty() && self.name.len() <= MAX_NAME_LENGTH,
            ErrorCode::InvalidTokenName
        );
        require!(
            !self.symbol.is_empty() && self.symbol.len() <= MAX_SYMBOL_LENGTH,
            ErrorCode::InvalidTokenSymbol
        );
        require!(self.uri.len() <= MAX_URI_LENGTH, ErrorCode::InvalidTokenUri);

        Project::split_total(self.team_amount(), self.vault_amount())
    }
}

impl<'info> InitProject<'info> {
    pub fn handle(ctx: Context<InitProject>, params: InitProjectParams) -> Result<()> {
        msg!("Launching project for mint: {}", ctx.accounts.mint.key());
        msg!("Team amount: {} units", params.team_amount());
        msg!("Vault amount: {} units", params.vault_amount());

        let total_minted = params.validate()?;

        require!(!ctx.accounts.project.is_launched(), ErrorCode::MintAlreadyExists);
        require!(
            ctx.accounts.mint.data_is_empty() && ctx.accounts.mint.owner == &system_program::ID,
            ErrorCode::MintAlreadyExists
        );

        let seeds = ctx.accounts.config.vault_authority_seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        create_mint(&ctx, params.decimals)?;
        create_token_metadata(&ctx, &params, signer_seeds)?;
        create_token_accounts(&ctx)?;
        mint_initial_split(&ctx, &params, signer_seeds)?;
        revoke_mint_authority(&ctx, signer_seeds)?;

        let launched_at = Clock::get()?.unix_timestamp;
        let config = &mut ctx.accounts.config;
        let index = config.next_project_index()?;
        let config_param = config.param;

        let launch = ProjectLaunch {
            authority: ctx.accounts.admin.key(),
            mint: ctx.accounts.mint.key(),
            vault: ctx.accounts.vault.key(),
            team_token_account: ctx.accounts.team_token_account.key(),
            decimals: params.decimals,
            team_allocation: params.team_amount(),
            vault_allocation: params.vault_amount(),
            schedule_param: params.schedule_param,
            config_param,
            index,
            launched_at,
            bump: ctx.bumps.project,
        };
        ctx.accounts.project.launch(launch)?;

        let project = &ctx.accounts.project;

        msg!("Project #{} launched", project.index);
        msg!("Total minted: {} units", total_minted);
        msg!("Vault: {}", project.vault);
        msg!("Team token account: {}", project.team_token_account);

        emit!(crate::events::ProjectLaunched {
            project: project.key(),
            mint: project.mint,
            authority: project.authority,
            metadata: ctx.accounts.metadata.key(),
            vault: project.vault,
            team_token_account: project.team_token_account,
            decimals: project.decimals,
            total_minted: project.total_minted,
            team_allocation: project.team_allocation,
            vault_allocation: project.vault_allocation,
            schedule_param: project.schedule_param,
            index: project.index,
            timestamp: launched_at,
        });

        Ok(())
    }
}

/// Allocates the mint account and initializes it with the vault authority as
/// mint authority and no freeze authority
fn create_mint(ctx: &Context<InitProject>, decimals: u8) -> Result<()> {
    let lamports = ctx.accounts.rent.minimum_balance(Mint::LEN);

    system_program::create_account(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.admin.to_account_info(),
                to: ctx.accounts.mint.to_account_info(),
            },
        ),
        lamports,
        Mint::LEN as u64,
        &token::ID,
    )?;

    token::initialize_mint2(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            InitializeMint2 {
                mint: ctx.accounts.mint.to_account_info(),
            },
        ),
        decimals,
        &ctx.accounts.vault_authority.key(),
        None,
    )?;

    msg!("Mint created with {} decimals", decimals);
    Ok(())
}

fn create_token_metadata(
    ctx: &Context<InitProject>,
    params: &InitProjectParams,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let result = metadata::create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.token_metadata_program.to_account_info(),
            metadata::CreateMetadataAccountsV3 {
                metadata: ctx.accounts.metadata.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.vault_authority.to_account_info(),
                payer: ctx.accounts.admin.to_account_info(),
                update_authority: ctx.accounts.vault_authority.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        DataV2 {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            uri: params.uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        false,
        true,
        None,
    );

    if let Err(e) = result {
        return Err(ErrorCode::MetadataCreationFailed.collaborator("CreateMetadataAccountsV3", e));
    }

    msg!("Metadata created: {}", ctx.accounts.metadata.key());
    Ok(())
}

fn create_token_accounts(ctx: &Context<InitProject>) -> Result<()> {
    associated_token::create(CpiContext::new(
        ctx.accounts.associated_token_program.to_account_info(),
        associated_token::Create {
            payer: ctx.accounts.admin.to_account_info(),
            associated_token: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        },
    ))?;

    associated_token::create(CpiContext::new(
        ctx.accounts.associated_token_program.to_account_info(),
        associated_token::Create {
            payer: ctx.accounts.admin.to_account_info(),
            associated_token: ctx.accounts.team_token_account.to_account_info(),
            authority: ctx.accounts.team_wallet.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        },
    ))?;

    Ok(())
}

fn mint_initial_split(
    ctx: &Context<InitProject>,
    params: &InitProjectParams,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let splits = [
        (ctx.accounts.team_token_account.to_account_info(), params.team_amount()),
        (ctx.accounts.vault.to_account_info(), params.vault_amount()),
    ];

    for (to, amount) in splits {
        if amount == 0 {
            continue;
        }

        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: to.clone(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        msg!("Minted {} units to {}", amount, to.key());
    }

    Ok(())
}

/// Fixes the supply: nobody can mint after launch
fn revoke_mint_authority(ctx: &Context<InitProject>, signer_seeds: &[&[&[u8]]]) -> Result<()> {
    token::set_authority(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            SetAuthority {
                current_authority: ctx.accounts.vault_authority.to_account_info(),
                account_or_mint: ctx.accounts.mint.to_account_info(),
            },
            signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )?;

    msg!("Mint authority revoked");
    Ok(())
}
