use anchor_lang::prelude::*;

/// Event emitted when the global config is created
#[event]
pub struct ConfigCreated {
    /// Config PDA
    pub config: Pubkey,
    /// Admin allowed to launch projects
    pub admin: Pubkey,
    /// Program-wide scalar
    pub param: u64,
    /// Vault authority PDA
    pub vault_authority: Pubkey,
    /// Timestamp of creation
    pub timestamp: i64,
}

/// Event emitted when a token is launched and its initial supply split
#[event]
pub struct ProjectLaunched {
    /// Project PDA
    pub project: Pubkey,
    /// Token mint
    pub mint: Pubkey,
    /// Launching admin, now the project authority
    pub authority: Pubkey,
    /// Metaplex metadata account
    pub metadata: Pubkey,
    /// Vault token account
    pub vault: Pubkey,
    /// Team token account
    pub team_token_account: Pubkey,
    /// Mint decimals
    pub decimals: u8,
    /// Fixed total supply
    pub total_minted: u64,
    /// Amount minted to the team
    pub team_allocation: u64,
    /// Amount minted to the vault
    pub vault_allocation: u64,
    /// Launch schedule parameter
    pub schedule_param: u64,
    /// Launch index
    pub index: u64,
    /// Timestamp of launch
    pub timestamp: i64,
}

/// Event emitted when a project is handed off to its DAO
#[event]
pub struct DaoLinked {
    /// Project PDA
    pub project: Pubkey,
    /// Community mint
    pub mint: Pubkey,
    /// Realm address
    pub realm: Pubkey,
    /// Mint governance address
    pub governance: Pubkey,
    /// Native treasury address
    pub native_treasury: Pubkey,
    /// Realm authority (vault authority PDA)
    pub realm_authority: Pubkey,
    /// Whether the realm has a council
    pub use_council: bool,
    /// Yes-vote threshold in percent
    pub vote_threshold: u8,
    /// Voting period in seconds
    pub voting_period: u32,
    /// Timestamp of the handoff
    pub timestamp: i64,
}

/// Event emitted for every airdrop out of the vault
#[event]
pub struct TokensAirdropped {
    /// Project PDA
    pub project: Pubkey,
    /// Token mint
    pub mint: Pubkey,
    /// Recipient wallet
    pub recipient: Pubkey,
    /// Recipient token account
    pub recipient_token_account: Pubkey,
    /// Amount transferred
    pub amount: u64,
    /// Cumulative distributed after this airdrop
    pub distributed: u64,
    /// Allocation still available
    pub remaining_allocation: u64,
    /// Vault balance after the transfer
    pub vault_balance: u64,
    /// Timestamp of the airdrop
    pub timestamp: i64,
}
