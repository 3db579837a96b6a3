//! Tests for the [`L1Client`] against a mocked L1 transport.

use alloy_primitives::{address, hex, Address, Bytes, B256, U256};
use alloy_provider::ProviderBuilder;
use alloy_sol_types::SolCall;
use alloy_transport::mock::Asserter;
use rollup_bridge_l1::{
    abi::calls::RollupManager::verifyBatchesTrustedAggregatorCall, PENDING_STATE_NUM, PROOF_WORDS,
};
use rollup_bridge_primitives::{ContractAddressBook, FinalProofInputs, L1Config};
use rollup_bridge_providers::{L1Client, L1ClientError};

const ROLLUP_MANAGER: Address = address!("0x5132A183E9F3CB7C848b0AAC5Ae0c4f0491B7aB2");
const LEGACY_ROLLUP: Address = address!("0x519E42c24163192Dca44CD3fBDCEBF6be9130987");

fn config() -> L1Config {
    L1Config {
        l1_chain_id: 1,
        rollup_id: 1,
        address_book: ContractAddressBook {
            rollup_manager: ROLLUP_MANAGER,
            legacy_rollup: LEGACY_ROLLUP,
        },
    }
}

fn word(value: u64) -> [u8; 32] {
    U256::from(value).to_be_bytes::<32>()
}

#[tokio::test]
async fn test_latest_verified_batch_falls_back_over_rpc() -> eyre::Result<()> {
    reth_tracing::init_test_tracing();

    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    let client = L1Client::from_provider(provider, &config());

    // the manager call fails, the legacy contract answers.
    asserter.push_failure_msg("execution reverted");
    asserter.push_success(&Bytes::from(word(4242).to_vec()));

    assert_eq!(client.latest_verified_batch().await?, 4242);

    Ok(())
}

#[tokio::test]
async fn test_acc_input_hash_over_rpc() -> eyre::Result<()> {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    let client = L1Client::from_provider(provider, &config());

    let hash = B256::repeat_byte(0x42);
    let mut data = hash.to_vec();
    data.extend_from_slice(&word(1_700_000_000));
    data.extend_from_slice(&word(99));
    asserter.push_success(&Bytes::from(data));

    assert_eq!(client.acc_input_hash(100).await?, hash);

    Ok(())
}

#[tokio::test]
async fn test_latest_l1_block_header_without_head() -> eyre::Result<()> {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    let client = L1Client::from_provider(provider, &config());

    asserter.push_success(&Option::<()>::None);

    assert!(client.latest_l1_block_header().await?.is_none());

    Ok(())
}

#[test]
fn test_build_verify_calldata_end_to_end() -> eyre::Result<()> {
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(Asserter::new());
    let client = L1Client::from_provider(provider, &config());

    let final_proof = (0..PROOF_WORDS as u8).map(|i| hex::encode([i; 32])).collect::<String>();
    let inputs = FinalProofInputs {
        final_proof,
        new_local_exit_root: Bytes::from(vec![0xaa; 32]),
        new_state_root: Bytes::from(vec![0xbb; 32]),
    };
    let beneficiary = address!("0x000000000000000000000000000000000000dEaD");

    let calldata = client.build_trusted_verify_batches_tx_data(7, 9, &inputs, beneficiary)?;
    assert_eq!(calldata.to, ROLLUP_MANAGER);

    let call = verifyBatchesTrustedAggregatorCall::abi_decode(&calldata.data)?;
    assert_eq!(call.rollupID, 1);
    assert_eq!(call.pendingStateNum, PENDING_STATE_NUM);
    assert_eq!((call.initNumBatch, call.finalNewBatch), (7, 9));
    assert_eq!(call.newLocalExitRoot, B256::repeat_byte(0xaa));
    assert_eq!(call.newStateRoot, B256::repeat_byte(0xbb));
    assert_eq!(call.beneficiary, beneficiary);
    assert_eq!(call.proof[23], B256::repeat_byte(23));

    // the same inputs with an empty root are rejected before anything is encoded.
    let inputs = FinalProofInputs { new_state_root: Bytes::new(), ..inputs };
    let err = client.build_trusted_verify_batches_tx_data(7, 9, &inputs, beneficiary).unwrap_err();
    assert!(matches!(err, L1ClientError::InvalidRootLength { length: 0, .. }));

    Ok(())
}
