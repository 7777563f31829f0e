use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::{invoke, invoke_signed};

use super::instruction::{self, GovernanceConfig, RealmConfigArgs};

/// Council mint and its holding account, forwarded to `CreateRealm` together
pub struct CouncilAccounts<'info> {
    pub council_mint: AccountInfo<'info>,
    pub council_token_holding: AccountInfo<'info>,
}

pub struct CreateRealm<'info> {
    pub governance_program: AccountInfo<'info>,
    pub realm: AccountInfo<'info>,
    pub realm_authority: AccountInfo<'info>,
    pub community_mint: AccountInfo<'info>,
    pub community_token_holding: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub rent: AccountInfo<'info>,
    pub council: Option<CouncilAccounts<'info>>,
    pub realm_config: AccountInfo<'info>,
}

pub struct CreateGovernance<'info> {
    pub governance_program: AccountInfo<'info>,
    pub realm: AccountInfo<'info>,
    pub governance: AccountInfo<'info>,
    pub governed_account: AccountInfo<'info>,
    pub token_owner_record: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub create_authority: AccountInfo<'info>,
    pub realm_config: AccountInfo<'info>,
}

pub struct CreateNativeTreasury<'info> {
    pub governance_program: AccountInfo<'info>,
    pub governance: AccountInfo<'info>,
    pub native_treasury: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

pub fn create_realm(
    accounts: CreateRealm<'_>,
    name: &str,
    config_args: &RealmConfigArgs,
) -> Result<()> {
    let ix = instruction::create_realm(
        accounts.governance_program.key,
        accounts.realm_authority.key,
        accounts.community_mint.key,
        accounts.payer.key,
        accounts.council.as_ref().map(|council| council.council_mint.key),
        name,
        config_args,
    )?;

    let mut infos = vec![
        accounts.realm,
        accounts.realm_authority,
        accounts.community_mint,
        accounts.community_token_holding,
        accounts.payer,
        accounts.system_program,
        accounts.token_program,
        accounts.rent,
    ];
    if let Some(council) = accounts.council {
        infos.push(council.council_mint);
        infos.push(council.council_token_holding);
    }
    infos.push(accounts.realm_config);
    infos.push(accounts.governance_program);

    invoke(&ix, &infos)?;
    Ok(())
}

/// The create authority is the realm authority PDA, so this call is signed with its seeds
pub fn create_governance(
    accounts: CreateGovernance<'_>,
    config: &GovernanceConfig,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let ix = instruction::create_governance(
        accounts.governance_program.key,
        accounts.realm.key,
        accounts.governed_account.key,
        accounts.token_owner_record.key,
        accounts.payer.key,
        accounts.create_authority.key,
        config,
    )?;

    invoke_signed(
        &ix,
        &[
            accounts.realm,
            accounts.governance,
            accounts.governed_account,
            accounts.token_owner_record,
            accounts.payer,
            accounts.system_program,
            accounts.create_authority,
            accounts.realm_config,
            accounts.governance_program,
        ],
        signer_seeds,
    )?;
    Ok(())
}

pub fn create_native_treasury(accounts: CreateNativeTreasury<'_>) -> Result<()> {
    let ix = instruction::create_native_treasury(
        accounts.governance_program.key,
        accounts.governance.key,
        accounts.payer.key,
    );

    invoke(
        &ix,
        &[
            accounts.governance,
            accounts.native_treasury,
            accounts.payer,
            accounts.system_program,
            accounts.governance_program,
        ],
    )?;
    Ok(())
}
