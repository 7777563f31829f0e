use anchor_lang::prelude::*;

declare_id!("HrKLeJB6yoSWkFzVSfsg8Yi3Zs4PKZ7qqjkMz978qqZv");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod governance;
mod tests;

pub use instructions::*;
pub use events::*;

#[program]
pub mod tatami_v2 {
    use super::*;

    pub fn create_config(ctx: Context<CreateConfig>, params: CreateConfigParams) -> Result<()> {
        CreateConfig::handle(ctx, params)
    }

    pub fn init_project(ctx: Context<InitProject>, params: InitProjectParams) -> Result<()> {
        InitProject::handle(ctx, params)
    }

    pub fn initialize_dao(ctx: Context<InitializeDao>, params: InitializeDaoParams) -> Result<()> {
        InitializeDao::handle(ctx, params)
    }

    pub fn airdrop_tokens(ctx: Context<AirdropTokens>, params: AirdropParams) -> Result<()> {
        AirdropTokens::handle(ctx, params)
    }

    pub fn get_project_info(ctx: Context<GetProjectInfo>) -> Result<ProjectInfo> {
        GetProjectInfo::handle(ctx)
    }
}
