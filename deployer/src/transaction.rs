// deployer/src/transaction.rs

use crate::client::DeployClient;
use crate::errors::Error;
use ethers::{
    abi::Detokenize,
    contract::ContractCall,
    providers::{JsonRpcClient, PendingTransaction},
    types::{TransactionReceipt, U64},
};
use eyre::{Result, WrapErr};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

const TX_SUCCESS_STATUS: U64 = U64([1]);

/// Sends a state-changing contract call and waits for its receipt.
/// A missing receipt, a revert status or an elapsed `wait` are all errors.
#[instrument(skip(call, wait))]
pub async fn send_and_confirm<D: Detokenize>(
    call: ContractCall<DeployClient, D>,
    label: &str,
    wait: Duration,
) -> Result<TransactionReceipt> {
    let pending = call
        .send()
        .await
        .wrap_err_with(|| format!("{}: send failed", label))?;
    confirm(pending, label, wait).await
}

/// Awaits an already-submitted transaction.
pub async fn confirm<P: JsonRpcClient>(
    pending: PendingTransaction<'_, P>,
    label: &str,
    wait: Duration,
) -> Result<TransactionReceipt> {
    let tx_hash = pending.tx_hash();
    debug!(?tx_hash, "Waiting for receipt...");
    let receipt = match timeout(wait, pending).await {
        Ok(result) => result.wrap_err_with(|| format!("{}: error waiting for receipt", label))?,
        Err(_) => {
            return Err(Error::Timeout { label: label.to_string(), secs: wait.as_secs() }.into());
        }
    };
    let receipt = receipt.ok_or_else(|| Error::Dropped { label: label.to_string(), tx_hash })?;
    ensure_success(&receipt, label)?;
    info!(
        ?tx_hash,
        block = %receipt.block_number.unwrap_or_default(),
        gas_used = %receipt.gas_used.unwrap_or_default(),
        "{} confirmed", label
    );
    Ok(receipt)
}

/// Errors with [`Error::Reverted`] unless the receipt status is 1.
pub fn ensure_success(receipt: &TransactionReceipt, label: &str) -> Result<(), Error> {
    if receipt.status != Some(TX_SUCCESS_STATUS) {
        return Err(Error::Reverted { label: label.to_string(), tx_hash: receipt.transaction_hash });
    }
    Ok(())
}

// END OF FILE: deployer/src/transaction.rs
