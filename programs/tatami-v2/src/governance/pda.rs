use anchor_lang::prelude::*;

pub const GOVERNANCE_SEED: &[u8] = b"governance";
pub const REALM_CONFIG_SEED: &[u8] = b"realm-config";
pub const ACCOUNT_GOVERNANCE_SEED: &[u8] = b"account-governance";
pub const NATIVE_TREASURY_SEED: &[u8] = b"native-treasury";

/// `['governance', name]`
pub fn find_realm_address(program_id: &Pubkey, name: &str) -> Pubkey {
    Pubkey::find_program_address(&[GOVERNANCE_SEED, name.as_bytes()], program_id).0
}

/// `['realm-config', realm]`
pub fn find_realm_config_address(program_id: &Pubkey, realm: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[REALM_CONFIG_SEED, realm.as_ref()], program_id).0
}

/// `['governance', realm, governing_token_mint]`
pub fn find_governing_token_holding_address(
    program_id: &Pubkey,
    realm: &Pubkey,
    governing_token_mint: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[GOVERNANCE_SEED, realm.as_ref(), governing_token_mint.as_ref()],
        program_id,
    )
    .0
}

/// `['governance', realm, governing_token_mint, governing_token_owner]`
pub fn find_token_owner_record_address(
    program_id: &Pubkey,
    realm: &Pubkey,
    governing_token_mint: &Pubkey,
    governing_token_owner: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            GOVERNANCE_SEED,
            realm.as_ref(),
            governing_token_mint.as_ref(),
            governing_token_owner.as_ref(),
        ],
        program_id,
    )
    .0
}

/// `['account-governance', realm, governed_account]`
pub fn find_governance_address(
    program_id: &Pubkey,
    realm: &Pubkey,
    governed_account: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[ACCOUNT_GOVERNANCE_SEED, realm.as_ref(), governed_account.as_ref()],
        program_id,
    )
    .0
}

/// `['native-treasury', governance]`
pub fn find_native_treasury_address(program_id: &Pubkey, governance: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[NATIVE_TREASURY_SEED, governance.as_ref()], program_id).0
}
