#[cfg(test)]
mod tests {

    use {
        crate::{
            constants::{CONFIG_SEED, METADATA_SEED, PROJECT_SEED, VAULT_AUTHORITY_SEED},
            errors::ErrorCode,
            governance,
            states::{Config, Project},
            AirdropParams, CreateConfigParams, InitProjectParams, InitializeDaoParams, ProjectInfo,
        },
        anchor_lang::{
            error::ERROR_CODE_OFFSET,
            solana_program::{
                instruction::{Instruction, InstructionError},
                program_pack::Pack,
                pubkey::Pubkey,
                system_program, sysvar,
            },
            AccountDeserialize, AnchorDeserialize, InstructionData, ToAccountMetas,
        },
        anchor_spl::{
            associated_token::{self, get_associated_token_address},
            metadata,
            token::{self, spl_token},
        },
        litesvm::{types::TransactionResult, LiteSVM},
        solana_compute_budget_interface::ComputeBudgetInstruction,
        solana_keypair::Keypair,
        solana_message::Message,
        solana_native_token::LAMPORTS_PER_SOL,
        solana_signer::Signer,
        solana_transaction::Transaction,
        solana_transaction_error::TransactionError,
        std::path::PathBuf,
    };

    static PROGRAM_ID: Pubkey = crate::ID;

    const PROGRAM_SO: &str = "../../target/deploy/tatami_v2.so";
    const METADATA_SO: &str = "tests/fixtures/mpl_token_metadata.so";

    const TEAM_AMOUNT: u64 = 568_500_000;
    const VAULT_AMOUNT: u64 = 789_562_000;

    struct TestEnv {
        svm: LiteSVM,
        admin: Keypair,
        config: Pubkey,
        vault_authority: Pubkey,
    }

    struct Launched {
        mint: Pubkey,
        project: Pubkey,
        vault: Pubkey,
        team_wallet: Pubkey,
        team_token_account: Pubkey,
    }

    /// Reads a program binary relative to the crate; `None` when it has not been built yet
    fn read_program(relative: &str) -> Option<Vec<u8>> {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative);
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(_) => {
                println!("skipping: {} not found", path.display());
                None
            }
        }
    }

    fn setup(with_metadata: bool) -> Option<TestEnv> {
        let mut svm = LiteSVM::new();

        let program_data = read_program(PROGRAM_SO)?;
        let _ = svm.add_program(PROGRAM_ID, &program_data);

        if with_metadata {
            let metadata_data = read_program(METADATA_SO)?;
            let _ = svm.add_program(metadata::ID, &metadata_data);
        }

        let admin = Keypair::new();
        svm.airdrop(&admin.pubkey(), 100 * LAMPORTS_PER_SOL)
            .expect("Failed to airdrop SOL to admin");

        let config = Pubkey::find_program_address(&[CONFIG_SEED], &PROGRAM_ID).0;
        let vault_authority = Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED], &PROGRAM_ID).0;

        Some(TestEnv {
            svm,
            admin,
            config,
            vault_authority,
        })
    }

    fn funded_keypair(svm: &mut LiteSVM) -> Keypair {
        let keypair = Keypair::new();
        svm.airdrop(&keypair.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to airdrop SOL");
        keypair
    }

    fn send(svm: &mut LiteSVM, ixs: &[Instruction], signers: &[&Keypair]) -> TransactionResult {
        let message = Message::new(ixs, Some(&signers[0].pubkey()));
        let transaction = Transaction::new(signers, message, svm.latest_blockhash());
        let result = svm.send_transaction(transaction);
        svm.expire_blockhash();
        result
    }

    fn assert_program_error(result: TransactionResult, code: ErrorCode) {
        let expected = ERROR_CODE_OFFSET + code as u32;
        let failed = result.expect_err("transaction should have failed");
        assert_eq!(
            failed.err,
            TransactionError::InstructionError(0, InstructionError::Custom(expected)),
            "logs: {:#?}",
            failed.meta.logs
        );
        assert!(failed
            .meta
            .logs
            .iter()
            .any(|log| log.contains(&format!("Error Number: {}.", expected))));
    }

    fn create_config_ix(env: &TestEnv, admin: &Pubkey, param: u64) -> Instruction {
        Instruction {
            program_id: PROGRAM_ID,
            accounts: crate::accounts::CreateConfig {
                admin: *admin,
                config: env.config,
                vault_authority: env.vault_authority,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: crate::instruction::CreateConfig {
                params: CreateConfigParams { param },
            }
            .data(),
        }
    }

    fn create_config(env: &mut TestEnv) {
        let ix = create_config_ix(env, &env.admin.pubkey(), 0);
        send(&mut env.svm, &[ix], &[&env.admin]).expect("createConfig failed");
    }

    fn tatami_coin(amounts: [u64; 2]) -> InitProjectParams {
        InitProjectParams {
            decimals: 6,
            name: "Tatami Coin".to_string(),
            symbol: "TATAMI".to_string(),
            uri: "".to_string(),
            schedule_param: 560,
            amounts,
        }
    }

    fn init_project(
        env: &mut TestEnv,
        mint: &Keypair,
        amounts: [u64; 2],
    ) -> (TransactionResult, Launched) {
        let mint_key = mint.pubkey();
        let team_wallet = Keypair::new().pubkey();
        let launched = Launched {
            mint: mint_key,
            project: Pubkey::find_program_address(&[PROJECT_SEED, mint_key.as_ref()], &PROGRAM_ID)
                .0,
            vault: get_associated_token_address(&env.vault_authority, &mint_key),
            team_wallet,
            team_token_account: get_associated_token_address(&team_wallet, &mint_key),
        };
        let metadata_account = Pubkey::find_program_address(
            &[METADATA_SEED, metadata::ID.as_ref(), mint_key.as_ref()],
            &metadata::ID,
        )
        .0;

        let init_ix = Instruction {
            program_id: PROGRAM_ID,
            accounts: crate::accounts::InitProject {
                admin: env.admin.pubkey(),
                config: env.config,
                vault_authority: env.vault_authority,
                mint: mint_key,
                project: launched.project,
                metadata: metadata_account,
                team_wallet: launched.team_wallet,
                vault: launched.vault,
                team_token_account: launched.team_token_account,
                token_program: token::ID,
                associated_token_program: associated_token::ID,
                token_metadata_program: metadata::ID,
                system_program: system_program::ID,
                rent: sysvar::rent::ID,
            }
            .to_account_metas(None),
            data: crate::instruction::InitProject {
                params: tatami_coin(amounts),
            }
            .data(),
        };

        let result = send(
            &mut env.svm,
            &[ComputeBudgetInstruction::set_compute_unit_limit(1_400_000), init_ix],
            &[&env.admin, mint],
        );
        (result, launched)
    }

    fn launch(env: &mut TestEnv) -> Launched {
        let mint = Keypair::new();
        let (result, launched) = init_project(env, &mint, [TEAM_AMOUNT, VAULT_AMOUNT]);
        result.expect("initProject failed");
        launched
    }

    fn airdrop_ix(
        env: &TestEnv,
        authority: &Pubkey,
        launched: &Launched,
        vault: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: PROGRAM_ID,
            accounts: crate::accounts::AirdropTokens {
                authority: *authority,
                config: env.config,
                project: launched.project,
                mint: launched.mint,
                vault_authority: env.vault_authority,
                vault: *vault,
                recipient: *recipient,
                recipient_token_account: get_associated_token_address(recipient, &launched.mint),
                token_program: token::ID,
                associated_token_program: associated_token::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: crate::instruction::AirdropTokens {
                params: AirdropParams { amount },
            }
            .data(),
        }
    }

    fn airdrop(
        env: &mut TestEnv,
        launched: &Launched,
        recipient: &Pubkey,
        amount: u64,
    ) -> TransactionResult {
        let ix = airdrop_ix(env, &env.admin.pubkey(), launched, &launched.vault, recipient, amount);
        send(&mut env.svm, &[ix], &[&env.admin])
    }

    fn initialize_dao_ix(
        env: &TestEnv,
        launched: &Launched,
        realm: &Pubkey,
        params: InitializeDaoParams,
    ) -> Instruction {
        let program_id = governance::ID;
        let governance_key =
            governance::find_governance_address(&program_id, realm, &launched.mint);

        Instruction {
            program_id: PROGRAM_ID,
            accounts: crate::accounts::InitializeDao {
                authority: env.admin.pubkey(),
                config: env.config,
                project: launched.project,
                mint: launched.mint,
                vault_authority: env.vault_authority,
                realm: *realm,
                community_token_holding: governance::find_governing_token_holding_address(
                    &program_id,
                    realm,
                    &launched.mint,
                ),
                realm_config: governance::find_realm_config_address(&program_id, realm),
                token_owner_record: governance::find_token_owner_record_address(
                    &program_id,
                    realm,
                    &launched.mint,
                    &env.vault_authority,
                ),
                governance: governance_key,
                native_treasury: governance::find_native_treasury_address(
                    &program_id,
                    &governance_key,
                ),
                council_mint: None,
                council_token_holding: None,
                governance_program: program_id,
                token_program: token::ID,
                system_program: system_program::ID,
                rent: sysvar::rent::ID,
            }
            .to_account_metas(None),
            data: crate::instruction::InitializeDao { params }.data(),
        }
    }

    fn tatami_dao(use_council: bool) -> InitializeDaoParams {
        InitializeDaoParams {
            name: "Tatami DAO".to_string(),
            max_voter_weight: 0,
            min_weight_to_create_governance: 1_000_000,
            use_council,
            vote_threshold: 60,
            voting_period: 3 * 24 * 60 * 60,
        }
    }

    fn read_config(svm: &LiteSVM, config: &Pubkey) -> Config {
        let account = svm.get_account(config).expect("config account missing");
        Config::try_deserialize(&mut account.data.as_ref()).expect("config data")
    }

    fn read_project(svm: &LiteSVM, project: &Pubkey) -> Project {
        let account = svm.get_account(project).expect("project account missing");
        Project::try_deserialize(&mut account.data.as_ref()).expect("project data")
    }

    fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
        let account = svm.get_account(token_account).expect("token account missing");
        spl_token::state::Account::unpack(&account.data)
            .expect("token account data")
            .amount
    }

    fn is_empty(svm: &LiteSVM, address: &Pubkey) -> bool {
        svm.get_account(address)
            .map_or(true, |account| account.data.is_empty() && account.lamports == 0)
    }

    #[test]
    fn test_tatami_coin_launch_and_airdrops() {
        let Some(mut env) = setup(true) else { return };
        create_config(&mut env);

        let launched = launch(&mut env);

        let mint_account = env.svm.get_account(&launched.mint).unwrap();
        let mint = spl_token::state::Mint::unpack(&mint_account.data).unwrap();
        assert_eq!(mint.supply, 1_358_062_000);
        assert_eq!(mint.decimals, 6);
        assert!(mint.mint_authority.is_none());
        assert!(mint.freeze_authority.is_none());

        assert_eq!(token_balance(&env.svm, &launched.team_token_account), TEAM_AMOUNT);
        assert_eq!(token_balance(&env.svm, &launched.vault), VAULT_AMOUNT);

        let project = read_project(&env.svm, &launched.project);
        assert_eq!(project.total_minted, 1_358_062_000);
        assert_eq!(project.vault_allocation, VAULT_AMOUNT);
        assert_eq!(project.distributed, 0);
        assert_eq!(project.authority, env.admin.pubkey());
        assert_eq!(read_config(&env.svm, &env.config).project_count, 1);

        let recipient = Keypair::new().pubkey();
        let tx = airdrop(&mut env, &launched, &recipient, 5_000_000).expect("airdrop failed");
        println!("Airdrop CUs consumed: {}", tx.compute_units_consumed);

        let recipient_ata = get_associated_token_address(&recipient, &launched.mint);
        assert_eq!(token_balance(&env.svm, &launched.vault), 784_562_000);
        assert_eq!(token_balance(&env.svm, &recipient_ata), 5_000_000);
        assert_eq!(read_project(&env.svm, &launched.project).distributed, 5_000_000);

        let result = airdrop(&mut env, &launched, &recipient, VAULT_AMOUNT);
        assert_program_error(result, ErrorCode::AllocationExceeded);

        assert_eq!(read_project(&env.svm, &launched.project).distributed, 5_000_000);
        assert_eq!(token_balance(&env.svm, &launched.vault), 784_562_000);
        assert_eq!(token_balance(&env.svm, &recipient_ata), 5_000_000);

        // The query reports the same numbers through return data
        let query_ix = Instruction {
            program_id: PROGRAM_ID,
            accounts: crate::accounts::GetProjectInfo {
                project: launched.project,
                mint: launched.mint,
                vault: launched.vault,
            }
            .to_account_metas(None),
            data: crate::instruction::GetProjectInfo {}.data(),
        };
        let tx = send(&mut env.svm, &[query_ix], &[&env.admin]).expect("getProjectInfo failed");
        let info = ProjectInfo::try_from_slice(&tx.return_data.data).unwrap();
        assert_eq!(info.distributed, 5_000_000);
        assert_eq!(info.remaining_allocation, 784_562_000);
        assert_eq!(info.vault_balance, 784_562_000);
        assert_eq!(info.index, 0);
    }

    #[test]
    fn test_create_config_twice() {
        let Some(mut env) = setup(false) else { return };
        create_config(&mut env);

        let other_admin = funded_keypair(&mut env.svm);
        let ix = create_config_ix(&env, &other_admin.pubkey(), 7);
        let result = send(&mut env.svm, &[ix], &[&other_admin]);
        assert_program_error(result, ErrorCode::AlreadyInitialized);

        let config = read_config(&env.svm, &env.config);
        assert_eq!(config.admin, env.admin.pubkey());
        assert_eq!(config.param, 0);
        assert_eq!(config.project_count, 0);
    }

    #[test]
    fn test_airdrop_by_non_authority() {
        let Some(mut env) = setup(true) else { return };
        create_config(&mut env);
        let launched = launch(&mut env);

        let intruder = funded_keypair(&mut env.svm);
        let recipient = intruder.pubkey();
        let ix = airdrop_ix(
            &env,
            &intruder.pubkey(),
            &launched,
            &launched.vault,
            &recipient,
            1_000,
        );
        let result = send(&mut env.svm, &[ix], &[&intruder]);
        assert_program_error(result, ErrorCode::Unauthorized);

        assert_eq!(token_balance(&env.svm, &launched.vault), VAULT_AMOUNT);
        assert_eq!(read_project(&env.svm, &launched.project).distributed, 0);
    }

    #[test]
    fn test_airdrop_from_foreign_vault() {
        let Some(mut env) = setup(true) else { return };
        create_config(&mut env);
        let launched = launch(&mut env);

        let recipient = Keypair::new().pubkey();
        let ix = airdrop_ix(
            &env,
            &env.admin.pubkey(),
            &launched,
            &launched.team_token_account,
            &recipient,
            1_000,
        );
        let result = send(&mut env.svm, &[ix], &[&env.admin]);
        assert_program_error(result, ErrorCode::InvalidVault);

        assert_eq!(token_balance(&env.svm, &launched.team_token_account), TEAM_AMOUNT);
    }

    #[test]
    fn test_overflowing_split_creates_nothing() {
        let Some(mut env) = setup(true) else { return };
        create_config(&mut env);

        let mint = Keypair::new();
        let (result, launched) = init_project(&mut env, &mint, [u64::MAX, 1]);
        // Instruction 0 is the compute budget request
        let failed = result.expect_err("initProject should have failed");
        assert_eq!(
            failed.err,
            TransactionError::InstructionError(
                1,
                InstructionError::Custom(ERROR_CODE_OFFSET + ErrorCode::ArithmeticOverflow as u32)
            )
        );

        assert!(is_empty(&env.svm, &launched.mint));
        assert!(is_empty(&env.svm, &launched.project));
        assert!(is_empty(&env.svm, &launched.vault));
        assert!(is_empty(&env.svm, &launched.team_token_account));
        assert_eq!(read_config(&env.svm, &env.config).project_count, 0);
    }

    #[test]
    fn test_initialize_dao_with_foreign_realm() {
        let Some(mut env) = setup(true) else { return };
        create_config(&mut env);
        let launched = launch(&mut env);

        let ix = initialize_dao_ix(&env, &launched, &Pubkey::new_unique(), tatami_dao(false));
        let result = send(&mut env.svm, &[ix], &[&env.admin]);
        assert_program_error(result, ErrorCode::InvalidGovernanceAccount);

        assert!(read_project(&env.svm, &launched.project).dao_link.is_none());
    }

    #[test]
    fn test_initialize_dao_council_without_mint() {
        let Some(mut env) = setup(true) else { return };
        create_config(&mut env);
        let launched = launch(&mut env);

        let params = tatami_dao(true);
        let realm = governance::find_realm_address(&governance::ID, &params.name);
        let ix = initialize_dao_ix(&env, &launched, &realm, params);
        let result = send(&mut env.svm, &[ix], &[&env.admin]);
        assert_program_error(result, ErrorCode::MissingCouncilMint);

        assert!(is_empty(&env.svm, &realm));
        assert!(read_project(&env.svm, &launched.project).dao_link.is_none());
    }
}
