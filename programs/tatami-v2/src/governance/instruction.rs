use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    sysvar,
};
use anchor_spl::token;

use super::pda::{
    find_governance_address, find_governing_token_holding_address, find_native_treasury_address,
    find_realm_address, find_realm_config_address,
};

// Variant indices of the governance program's instruction enum
pub const CREATE_REALM_IX: u8 = 0;
pub const CREATE_GOVERNANCE_IX: u8 = 4;
pub const CREATE_NATIVE_TREASURY_IX: u8 = 25;

/// 100% of the mint supply for `MintMaxVoterWeightSource::SupplyFraction`
pub const SUPPLY_FRACTION_BASE: u64 = 10_000_000_000;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintMaxVoterWeightSource {
    SupplyFraction(u64),
    Absolute(u64),
}

impl MintMaxVoterWeightSource {
    /// `0` means the whole community supply, anything else is an absolute cap
    pub fn from_max_voter_weight(max_voter_weight: u64) -> Self {
        if max_voter_weight == 0 {
            Self::SupplyFraction(SUPPLY_FRACTION_BASE)
        } else {
            Self::Absolute(max_voter_weight)
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoverningTokenType {
    Liquid,
    Membership,
    Dormant,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoverningTokenConfigArgs {
    pub use_voter_weight_addin: bool,
    pub use_max_voter_weight_addin: bool,
    pub token_type: GoverningTokenType,
}

impl GoverningTokenConfigArgs {
    pub fn plain(token_type: GoverningTokenType) -> Self {
        Self {
            use_voter_weight_addin: false,
            use_max_voter_weight_addin: false,
            token_type,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RealmConfigArgs {
    pub use_council_mint: bool,
    pub min_community_weight_to_create_governance: u64,
    pub community_mint_max_voter_weight_source: MintMaxVoterWeightSource,
    pub community_token_config_args: GoverningTokenConfigArgs,
    pub council_token_config_args: GoverningTokenConfigArgs,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteThreshold {
    YesVotePercentage(u8),
    QuorumPercentage(u8),
    Disabled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteTipping {
    Strict,
    Early,
    Disabled,
}

/// Field order matches the governance program's borsh layout
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GovernanceConfig {
    pub community_vote_threshold: VoteThreshold,
    pub min_community_weight_to_create_proposal: u64,
    pub min_transaction_hold_up_time: u32,
    pub voting_base_time: u32,
    pub community_vote_tipping: VoteTipping,
    pub council_vote_threshold: VoteThreshold,
    pub council_veto_vote_threshold: VoteThreshold,
    pub min_council_weight_to_create_proposal: u64,
    pub council_vote_tipping: VoteTipping,
    pub community_veto_vote_threshold: VoteThreshold,
    pub voting_cool_off_time: u32,
    pub deposit_exempt_proposal_count: u8,
}

fn encode<T: AnchorSerialize + ?Sized>(data: &mut Vec<u8>, value: &T) -> Result<()> {
    value.serialize(data).map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(())
}

/// `CreateRealm`: realm keyed by `name`, community voting with `community_mint`
pub fn create_realm(
    program_id: &Pubkey,
    realm_authority: &Pubkey,
    community_mint: &Pubkey,
    payer: &Pubkey,
    council_mint: Option<&Pubkey>,
    name: &str,
    config_args: &RealmConfigArgs,
) -> Result<Instruction> {
    let realm = find_realm_address(program_id, name);
    let community_token_holding =
        find_governing_token_holding_address(program_id, &realm, community_mint);

    let mut accounts = vec![
        AccountMeta::new(realm, false),
        AccountMeta::new_readonly(*realm_authority, false),
        AccountMeta::new_readonly(*community_mint, false),
        AccountMeta::new(community_token_holding, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(anchor_lang::system_program::ID, false),
        AccountMeta::new_readonly(token::ID, false),
        AccountMeta::new_readonly(sysvar::rent::ID, false),
    ];

    if let Some(council_mint) = council_mint {
        let council_token_holding =
            find_governing_token_holding_address(program_id, &realm, council_mint);
        accounts.push(AccountMeta::new_readonly(*council_mint, false));
        accounts.push(AccountMeta::new(council_token_holding, false));
    }

    accounts.push(AccountMeta::new(
        find_realm_config_address(program_id, &realm),
        false,
    ));

    let mut data = vec![CREATE_REALM_IX];
    encode(&mut data, name)?;
    encode(&mut data, config_args)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// `CreateGovernance` over `governed_account`, authorized by the realm authority
pub fn create_governance(
    program_id: &Pubkey,
    realm: &Pubkey,
    governed_account: &Pubkey,
    token_owner_record: &Pubkey,
    payer: &Pubkey,
    create_authority: &Pubkey,
    config: &GovernanceConfig,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new_readonly(*realm, false),
        AccountMeta::new(find_governance_address(program_id, realm, governed_account), false),
        AccountMeta::new_readonly(*governed_account, false),
        AccountMeta::new_readonly(*token_owner_record, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(anchor_lang::system_program::ID, false),
        AccountMeta::new_readonly(*create_authority, true),
        AccountMeta::new_readonly(find_realm_config_address(program_id, realm), false),
    ];

    let mut data = vec![CREATE_GOVERNANCE_IX];
    encode(&mut data, config)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// `CreateNativeTreasury` for `governance`
pub fn create_native_treasury(
    program_id: &Pubkey,
    governance: &Pubkey,
    payer: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*governance, false),
            AccountMeta::new(find_native_treasury_address(program_id, governance), false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(anchor_lang::system_program::ID, false),
        ],
        data: vec![CREATE_NATIVE_TREASURY_IX],
    }
}
