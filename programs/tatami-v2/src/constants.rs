// PDA Seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const PROJECT_SEED: &[u8] = b"project";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
pub const METADATA_SEED: &[u8] = b"metadata";

// Token launch bounds (Metaplex token-metadata limits)
pub const MAX_DECIMALS: u8 = 9;
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

// DAO handoff bounds
pub const MAX_DAO_NAME_LENGTH: usize = 32; // realm name is a single PDA seed
pub const MIN_VOTE_THRESHOLD_PCT: u8 = 1;
pub const MAX_VOTE_THRESHOLD_PCT: u8 = 100;
pub const MIN_VOTING_PERIOD_SECONDS: u32 = 1;

// Governance defaults
pub const DEFAULT_DEPOSIT_EXEMPT_PROPOSAL_COUNT: u8 = 10;
pub const DISABLED_VOTER_WEIGHT: u64 = u64::MAX;
