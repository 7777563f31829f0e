pub mod create_config;
pub use create_config::*;

pub mod init_project;
pub use init_project::*;

pub mod initialize_dao;
pub use initialize_dao::*;

pub mod airdrop_tokens;
pub use airdrop_tokens::*;

pub mod query_project;
pub use query_project::*;
