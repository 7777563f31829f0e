use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{
    CONFIG_SEED, DEFAULT_DEPOSIT_EXEMPT_PROPOSAL_COUNT, DISABLED_VOTER_WEIGHT, MAX_DAO_NAME_LENGTH,
    MAX_VOTE_THRESHOLD_PCT, MIN_VOTE_THRESHOLD_PCT, MIN_VOTING_PERIOD_SECONDS, PROJECT_SEED,
    VAULT_AUTHORITY_SEED,
};
use crate::errors::ErrorCode;
use crate::governance::{
    self, cpi::CouncilAccounts, GovernanceConfig, GoverningTokenConfigArgs, GoverningTokenType,
    MintMaxVoterWeightSource, RealmConfigArgs, VoteThreshold, VoteTipping,
};
use crate::states::{Config, DaoLink, Project};

#[derive(Accounts)]
pub struct InitializeDao<'info> {
    /// Project authority, pays for the governance accounts
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
        has_one = mint @ ErrorCode::InvalidMint
    )]
    pub project: Box<Account<'info, Project>>,

    /// Community token of the realm
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: Vault authority PDA, installed as realm authority
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = config.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// CHECK: Realm PDA of the governance program, address verified in the handler
    #[account(mut)]
    pub realm: UncheckedAccount<'info>,

    /// CHECK: Community token holding PDA, address verified in the handler
    #[account(mut)]
    pub community_token_holding: UncheckedAccount<'info>,

    /// CHECK: Realm config PDA, address verified in the handler
    #[account(mut)]
    pub realm_config: UncheckedAccount<'info>,

    /// CHECK: Token owner record PDA of the vault authority, address verified in the handler
    pub token_owner_record: UncheckedAccount<'info>,

    /// CHECK: Mint governance PDA, address verified in the handler
    #[account(mut)]
    pub governance: UncheckedAccount<'info>,

    /// CHECK: Native treasury PDA, address verified in the handler
    #[account(mut)]
    pub native_treasury: UncheckedAccount<'info>,

    /// Required when `use_council` is set
    pub council_mint: Option<Account<'info, Mint>>,

    /// CHECK: Council token holding PDA, address verified in the handler
    #[account(mut)]
    pub council_token_holding: Option<UncheckedAccount<'info>>,

    /// CHECK: SPL governance program
    #[account(address = governance::ID)]
    pub governance_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeDaoParams {
    /// Realm name, also its PDA seed
    pub name: String,
    /// 0 = full community supply, otherwise an absolute cap
    pub max_voter_weight: u64,
    /// Community weight required to create governances and proposals
    pub min_weight_to_create_governance: u64,
    /// Attach a council mint to the realm
    pub use_council: bool,
    /// Yes-vote threshold in percent (1-100)
    pub vote_threshold: u8,
    /// Base voting time in seconds
    pub voting_period: u32,
}

impl InitializeDaoParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.name.is_empty() && self.name.len() <= MAX_DAO_NAME_LENGTH,
            ErrorCode::InvalidDaoName
        );
        require!(
            (MIN_VOTE_THRESHOLD_PCT..=MAX_VOTE_THRESHOLD_PCT).contains(&self.vote_threshold),
            ErrorCode::InvalidVoteThreshold
        );
        require!(
            self.voting_period >= MIN_VOTING_PERIOD_SECONDS,
            ErrorCode::InvalidVotingPeriod
        );
        Ok(())
    }

    pub fn realm_config_args(&self) -> RealmConfigArgs {
        RealmConfigArgs {
            use_council_mint: self.use_council,
            min_community_weight_to_create_governance: self.min_weight_to_create_governance,
            community_mint_max_voter_weight_source: MintMaxVoterWeightSource::from_max_voter_weight(
                self.max_voter_weight,
            ),
            community_token_config_args:
                GoverningTokenConfigArgs::plain(GoverningTokenType::Liquid),
            council_token_config_args:
                GoverningTokenConfigArgs::plain(GoverningTokenType::Membership),
        }
    }

    /// Community votes with a yes-percentage threshold; the council, when present, votes
    /// and can veto with the same threshold
    pub fn governance_config(&self) -> GovernanceConfig {
        let threshold = VoteThreshold::YesVotePercentage(self.vote_threshold);
        let (council_vote_threshold, council_veto_vote_threshold, min_council_weight) =
            if self.use_council {
                (threshold, threshold, 1)
            } else {
                (VoteThreshold::Disabled, VoteThreshold::Disabled, DISABLED_VOTER_WEIGHT)
            };

        GovernanceConfig {
            community_vote_threshold: threshold,
            min_community_weight_to_create_proposal: self.min_weight_to_create_governance,
            min_transaction_hold_up_time: 0,
            voting_base_time: self.voting_period,
            community_vote_tipping: VoteTipping::Strict,
            council_vote_threshold,
            council_veto_vote_threshold,
            min_council_weight_to_create_proposal: min_council_weight,
            council_vote_tipping: VoteTipping::Strict,
            community_veto_vote_threshold: VoteThreshold::Disabled,
            voting_cool_off_time: 0,
            deposit_exempt_proposal_count: DEFAULT_DEPOSIT_EXEMPT_PROPOSAL_COUNT,
        }
    }
}

impl<'info> InitializeDao<'info> {
    /// Creates the realm, the mint governance and its native treasury, then links them to
    /// the project.
    ///
    /// The deployment-wide vault authority PDA becomes the realm authority of every realm
    /// created here, and stays so for good. The program has no `SetRealmAuthority` path, so
    /// realm-authority actions (config changes, new governances) are deliberately out of
    /// reach once the DAO is live.
    pub fn handle(ctx: Context<InitializeDao>, params: InitializeDaoParams) -> Result<()> {
        msg!("Initializing DAO '{}' for mint: {}", params.name, ctx.accounts.mint.key());

        params.validate()?;
        require!(!ctx.accounts.project.is_dao_linked(), ErrorCode::DaoAlreadyLinked);

        let program_id = governance::ID;
        let mint = ctx.accounts.mint.key();
        let vault_authority = ctx.accounts.vault_authority.key();

        let realm = governance::find_realm_address(&program_id, &params.name);
        let governance_key = governance::find_governance_address(&program_id, &realm, &mint);
        let native_treasury =
            governance::find_native_treasury_address(&program_id, &governance_key);

        require_keys_eq!(ctx.accounts.realm.key(), realm, ErrorCode::InvalidGovernanceAccount);
        require_keys_eq!(
            ctx.accounts.community_token_holding.key(),
            governance::find_governing_token_holding_address(&program_id, &realm, &mint),
            ErrorCode::InvalidGovernanceAccount
        );
        require_keys_eq!(
            ctx.accounts.realm_config.key(),
            governance::find_realm_config_address(&program_id, &realm),
            ErrorCode::InvalidGovernanceAccount
        );
        require_keys_eq!(
            ctx.accounts.token_owner_record.key(),
            governance::find_token_owner_record_address(
                &program_id,
                &realm,
                &mint,
                &vault_authority,
            ),
            ErrorCode::InvalidGovernanceAccount
        );
        require_keys_eq!(
            ctx.accounts.governance.key(),
            governance_key,
            ErrorCode::InvalidGovernanceAccount
        );
        require_keys_eq!(
            ctx.accounts.native_treasury.key(),
            native_treasury,
            ErrorCode::InvalidGovernanceAccount
        );

        let council = council_accounts(ctx.accounts, &params, &realm)?;

        msg!("Realm: {}", realm);
        msg!("Governance: {}", governance_key);
        msg!("Native treasury: {}", native_treasury);

        governance::cpi::create_realm(
            governance::cpi::CreateRealm {
                governance_program: ctx.accounts.governance_program.to_account_info(),
                realm: ctx.accounts.realm.to_account_info(),
                realm_authority: ctx.accounts.vault_authority.to_account_info(),
                community_mint: ctx.accounts.mint.to_account_info(),
                community_token_holding: ctx.accounts.community_token_holding.to_account_info(),
                payer: ctx.accounts.authority.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
                council,
                realm_config: ctx.accounts.realm_config.to_account_info(),
            },
            &params.name,
            &params.realm_config_args(),
        )
        .map_err(|e| ErrorCode::GovernanceCreationFailed.collaborator("CreateRealm", e))?;

        let seeds = ctx.accounts.config.vault_authority_seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        governance::cpi::create_governance(
            governance::cpi::CreateGovernance {
                governance_program: ctx.accounts.governance_program.to_account_info(),
                realm: ctx.accounts.realm.to_account_info(),
                governance: ctx.accounts.governance.to_account_info(),
                governed_account: ctx.accounts.mint.to_account_info(),
                token_owner_record: ctx.accounts.token_owner_record.to_account_info(),
                payer: ctx.accounts.authority.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                create_authority: ctx.accounts.vault_authority.to_account_info(),
                realm_config: ctx.accounts.realm_config.to_account_info(),
            },
            &params.governance_config(),
            signer_seeds,
        )
        .map_err(|e| ErrorCode::GovernanceCreationFailed.collaborator("CreateGovernance", e))?;

        governance::cpi::create_native_treasury(governance::cpi::CreateNativeTreasury {
            governance_program: ctx.accounts.governance_program.to_account_info(),
            governance: ctx.accounts.governance.to_account_info(),
            native_treasury: ctx.accounts.native_treasury.to_account_info(),
            payer: ctx.accounts.authority.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
        })
        .map_err(|e| ErrorCode::GovernanceCreationFailed.collaborator("CreateNativeTreasury", e))?;

        let linked_at = Clock::get()?.unix_timestamp;
        ctx.accounts.project.link_dao(DaoLink {
            realm,
            governance: governance_key,
            native_treasury,
            linked_at,
        })?;

        msg!("DAO linked to project #{}", ctx.accounts.project.index);

        emit!(crate::events::DaoLinked {
            project: ctx.accounts.project.key(),
            mint,
            realm,
            governance: governance_key,
            native_treasury,
            realm_authority: vault_authority,
            use_council: params.use_council,
            vote_threshold: params.vote_threshold,
            voting_period: params.voting_period,
            timestamp: linked_at,
        });

        Ok(())
    }
}

fn council_accounts<'info>(
    accounts: &InitializeDao<'info>,
    params: &InitializeDaoParams,
    realm: &Pubkey,
) -> Result<Option<CouncilAccounts<'info>>> {
    if !params.use_council {
        return Ok(None);
    }

    let council_mint = accounts.council_mint.as_ref().ok_or(ErrorCode::MissingCouncilMint)?;
    let council_token_holding = accounts
        .council_token_holding
        .as_ref()
        .ok_or(ErrorCode::MissingCouncilMint)?;

    require_keys_eq!(
        council_token_holding.key(),
        governance::find_governing_token_holding_address(
            &governance::ID,
            realm,
            &council_mint.key(),
        ),
        ErrorCode::InvalidGovernanceAccount
    );

    msg!("Council mint: {}", council_mint.key());

    Ok(Some(CouncilAccounts {
        council_mint: council_mint.to_account_info(),
        council_token_holding: council_token_holding.to_account_info(),
    }))
}
