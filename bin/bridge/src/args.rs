use alloy_primitives::{Address, Bytes};
use rollup_bridge_primitives::{ContractAddressBook, L1Config, RollupId};

/// The rollup bridge command line.
#[derive(Debug, clap::Parser)]
#[command(name = "rollup-bridge", version, about = "Reads the L1 state of the rollup and prepares its verification calls")]
pub struct Cli {
    /// The L1 arguments.
    #[command(flatten)]
    pub l1: L1Args,
    /// The database arguments.
    #[command(flatten)]
    pub database: DatabaseArgs,
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The commands of the rollup bridge.
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Prints the last verified batch, the L2 chain id and the latest L1 block number.
    Status,
    /// Prints the destination and calldata verifying a range of batches.
    VerifyCalldata(VerifyCalldataArgs),
    /// Records the batch range covered by a sequence.
    RecordSequence(RecordSequenceArgs),
}

/// The arguments for the L1.
#[derive(Debug, Clone, clap::Args)]
pub struct L1Args {
    /// The URL for the L1 RPC.
    #[arg(long = "l1.url", id = "l1_url", value_name = "L1_URL", env = "L1_URL")]
    pub url: Option<reqwest::Url>,
    /// The chain id of the L1.
    #[arg(long = "l1.chain-id", id = "l1_chain_id", value_name = "L1_CHAIN_ID", env = "L1_CHAIN_ID", default_value_t = 1)]
    pub chain_id: u64,
    /// The identifier of the rollup in the rollup manager.
    #[arg(long = "l1.rollup-id", id = "l1_rollup_id", value_name = "L1_ROLLUP_ID", env = "L1_ROLLUP_ID", default_value_t = 1)]
    pub rollup_id: RollupId,
    /// The address of the rollup manager contract.
    #[arg(long = "l1.rollup-manager", id = "l1_rollup_manager", value_name = "ADDRESS", env = "L1_ROLLUP_MANAGER")]
    pub rollup_manager: Option<Address>,
    /// The address of the legacy rollup contract. When unset, every legacy read fails and the
    /// rollup manager answers.
    #[arg(long = "l1.legacy-rollup", id = "l1_legacy_rollup", value_name = "ADDRESS", env = "L1_LEGACY_ROLLUP")]
    pub legacy_rollup: Option<Address>,
}

impl L1Args {
    /// Returns the [`L1Config`] described by the arguments.
    pub fn config(&self) -> eyre::Result<L1Config> {
        let rollup_manager =
            self.rollup_manager.ok_or_else(|| eyre::eyre!("missing --l1.rollup-manager"))?;
        Ok(L1Config {
            l1_chain_id: self.chain_id,
            rollup_id: self.rollup_id,
            address_book: ContractAddressBook {
                rollup_manager,
                legacy_rollup: self.legacy_rollup.unwrap_or_default(),
            },
        })
    }

    /// Returns the URL for the L1 RPC.
    pub fn url(&self) -> eyre::Result<reqwest::Url> {
        self.url.clone().ok_or_else(|| eyre::eyre!("missing --l1.url"))
    }
}

/// The database arguments.
#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    /// The URL of the database.
    #[arg(
        long = "database.url",
        id = "database_url",
        value_name = "DATABASE_URL",
        env = "DATABASE_URL",
        default_value = "sqlite://bridge.db?mode=rwc"
    )]
    pub url: String,
}

/// The arguments of the verify calldata command.
#[derive(Debug, Clone, clap::Args)]
pub struct VerifyCalldataArgs {
    /// The last batch verified on the L1.
    #[arg(long, value_name = "BATCH")]
    pub last: u64,
    /// The last batch covered by the proof.
    #[arg(long, value_name = "BATCH")]
    pub new: u64,
    /// The hex encoded final proof.
    #[arg(long, value_name = "HEX")]
    pub proof: String,
    /// The new local exit root.
    #[arg(long = "exit-root", value_name = "HEX")]
    pub exit_root: Bytes,
    /// The new state root.
    #[arg(long = "state-root", value_name = "HEX")]
    pub state_root: Bytes,
    /// The address receiving the verification rewards.
    #[arg(long, value_name = "ADDRESS")]
    pub beneficiary: Address,
}

/// The arguments of the record sequence command.
#[derive(Debug, Clone, clap::Args)]
pub struct RecordSequenceArgs {
    /// The first batch of the sequence.
    #[arg(long, value_name = "BATCH")]
    pub from: u64,
    /// The last batch of the sequence.
    #[arg(long, value_name = "BATCH")]
    pub to: u64,
}
