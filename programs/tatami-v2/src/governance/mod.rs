//! Boundary to the SPL governance program: PDA derivation, instruction
//! builders and the CPI helpers used by `initialize_dao`.

pub mod cpi;
pub mod instruction;
pub mod pda;

use anchor_lang::prelude::*;

/// SPL governance program (mainnet / devnet deployment)
pub const ID: Pubkey =
    anchor_lang::solana_program::pubkey!("GovER5Lthms3bLBqWub97yVrMmEogzX7xNjdXpPPCVZw");

pub use instruction::*;
pub use pda::*;
