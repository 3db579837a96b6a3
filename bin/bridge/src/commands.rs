use crate::{Cli, Command, L1Args, RecordSequenceArgs, VerifyCalldataArgs};

use alloy_provider::ProviderBuilder;
use alloy_sol_types::SolCall;
use rollup_bridge_db::{
    Database, DatabaseConnectionProvider, DatabaseTransactionProvider, DatabaseWriteOperations,
};
use rollup_bridge_l1::{abi::calls::RollupManager::verifyBatchesTrustedAggregatorCall, decode_proof};
use rollup_bridge_migration::{Migrator, MigratorTrait};
use rollup_bridge_primitives::{FinalProofInputs, Sequence, VerifyBatchesCalldata};
use rollup_bridge_providers::L1Client;

impl Cli {
    /// Runs the command.
    pub async fn run(self) -> eyre::Result<()> {
        match &self.command {
            Command::Status => status(&self.l1).await,
            Command::VerifyCalldata(args) => {
                let calldata = verify_calldata(&self.l1, args)?;
                println!("to: {}", calldata.to);
                println!("data: {}", calldata.data);
                Ok(())
            }
            Command::RecordSequence(args) => {
                let db = Database::new(&self.database.url).await?;
                let sequence = record_sequence(&db, args).await?;
                println!(
                    "recorded sequence {}..={}",
                    sequence.from_batch_number, sequence.to_batch_number
                );
                Ok(())
            }
        }
    }
}

async fn status(l1: &L1Args) -> eyre::Result<()> {
    let provider = ProviderBuilder::new().connect_http(l1.url()?);
    let client = L1Client::from_provider(provider, &l1.config()?);

    let latest_verified_batch = client.latest_verified_batch().await?;
    let l2_chain_id = client.l2_chain_id().await?;
    let l1_head = client.latest_l1_block_header().await?.map(|header| header.number);

    println!("rollup id: {}", client.rollup_id());
    println!("l2 chain id: {l2_chain_id}");
    println!("latest verified batch: {latest_verified_batch}");
    match l1_head {
        Some(number) => println!("latest l1 block: {number}"),
        None => println!("latest l1 block: none"),
    }
    Ok(())
}

/// Builds the destination and calldata verifying `args.last..=args.new` with the provided proof.
///
/// Nothing is sent to the L1.
pub fn verify_calldata(
    l1: &L1Args,
    args: &VerifyCalldataArgs,
) -> eyre::Result<VerifyBatchesCalldata> {
    let provider = ProviderBuilder::new().connect_http(l1.url()?);
    let client = L1Client::from_provider(provider, &l1.config()?);

    let inputs = FinalProofInputs {
        final_proof: args.proof.clone(),
        new_local_exit_root: args.exit_root.clone(),
        new_state_root: args.state_root.clone(),
    };
    let calldata =
        client.build_trusted_verify_batches_tx_data(args.last, args.new, &inputs, args.beneficiary)?;

    let call = verifyBatchesTrustedAggregatorCall::abi_decode(&calldata.data)?;
    tracing::info!(
        target: "bridge::cli",
        to = %calldata.to,
        init_batch = call.initNumBatch,
        final_batch = call.finalNewBatch,
        proof = %decode_proof(&call.proof),
        "Built verify batches calldata"
    );

    Ok(calldata)
}

/// Records the sequence in a single committed transaction, migrating the database first.
pub async fn record_sequence(db: &Database, args: &RecordSequenceArgs) -> eyre::Result<Sequence> {
    Migrator::up(db.get_connection(), None).await?;

    let sequence = Sequence::new(args.from, args.to);
    let tx = db.tx_mut().await?;
    tx.insert_sequence(sequence).await?;
    tx.commit().await?;

    tracing::info!(target: "bridge::cli", from = args.from, to = args.to, "Recorded sequence");
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex, Address, Bytes, B256};
    use rollup_bridge_db::{test_utils::setup_test_db, DatabaseReadOperations};
    use rollup_bridge_l1::PROOF_WORDS;

    const ROLLUP_MANAGER: Address = address!("0x32d33D5137a7cFFb54c5Bf8371172bcEc5f310ff");

    fn l1_args() -> L1Args {
        L1Args {
            url: Some("http://localhost:8545".parse().unwrap()),
            chain_id: 1,
            rollup_id: 1,
            rollup_manager: Some(ROLLUP_MANAGER),
            legacy_rollup: None,
        }
    }

    fn verify_args(proof: String) -> VerifyCalldataArgs {
        VerifyCalldataArgs {
            last: 10,
            new: 20,
            proof,
            exit_root: Bytes::from(vec![0x01; 32]),
            state_root: Bytes::from(vec![0x02; 32]),
            beneficiary: Address::repeat_byte(0x0b),
        }
    }

    #[test]
    fn test_verify_calldata() {
        reth_tracing::init_test_tracing();

        let proof = "ab".repeat(PROOF_WORDS * 32);
        let calldata = verify_calldata(&l1_args(), &verify_args(proof)).unwrap();

        assert_eq!(calldata.to, ROLLUP_MANAGER);
        let call = verifyBatchesTrustedAggregatorCall::abi_decode(&calldata.data).unwrap();
        assert_eq!(call.proof, [B256::repeat_byte(0xab); PROOF_WORDS]);
        assert_eq!(decode_proof(&call.proof), format!("0x{}", hex::encode([0xab; 768])));
    }

    #[test]
    fn test_verify_calldata_invalid_proof() {
        assert!(verify_calldata(&l1_args(), &verify_args("0xabcd".to_owned())).is_err());
    }

    #[tokio::test]
    async fn test_record_sequence() {
        let db = setup_test_db().await;

        record_sequence(&db, &RecordSequenceArgs { from: 100, to: 200 }).await.unwrap();
        record_sequence(&db, &RecordSequenceArgs { from: 100, to: 250 }).await.unwrap();

        assert_eq!(db.get_sequences().await.unwrap(), vec![Sequence::new(100, 250)]);
    }
}
