// deployer/src/deploy.rs

use crate::artifact::Artifact;
use crate::bindings::Deeznuts;
use crate::client::DeployClient;
use crate::errors::Error;
use crate::transaction::ensure_success;
use ethers::{
    prelude::ContractFactory,
    types::{Address, TransactionReceipt},
};
use eyre::{eyre, Result, WrapErr};
use std::{sync::Arc, time::Duration};
use tokio::time::timeout;
use tracing::{info, instrument};

/// Deploys DEEZNUTS with `(charityWallet, marketingWallet)` and waits for
/// `confirmations` blocks. The returned handle is bound to `client`'s signer.
///
/// Gives up with [`Error::Timeout`] once `wait` elapses; the creation
/// transaction may still be pending (and later mine) when that happens.
pub async fn deploy_deeznuts(
    client: Arc<DeployClient>,
    artifact: &Artifact,
    charity_wallet: Address,
    marketing_wallet: Address,
    confirmations: usize,
    wait: Duration,
) -> Result<Deeznuts<DeployClient>> {
    let (token, _receipt) =
        deploy_with_receipt(client, artifact, charity_wallet, marketing_wallet, confirmations, wait).await?;
    Ok(token)
}

/// Like [`deploy_deeznuts`], also returning the creation receipt.
#[instrument(skip(client, artifact, wait), fields(contract = %artifact.contract_name))]
pub async fn deploy_with_receipt(
    client: Arc<DeployClient>,
    artifact: &Artifact,
    charity_wallet: Address,
    marketing_wallet: Address,
    confirmations: usize,
    wait: Duration,
) -> Result<(Deeznuts<DeployClient>, TransactionReceipt)> {
    let factory = ContractFactory::new(artifact.abi.clone(), artifact.bytecode.clone(), client.clone());

    let deployer = factory
        .deploy((charity_wallet, marketing_wallet))
        .map_err(|e| eyre!("Failed to construct deployment call: {}", e))?
        .confirmations(confirmations);

    info!("Sending deployment transaction...");
    let (instance, receipt) = match timeout(wait, deployer.send_with_receipt()).await {
        Ok(result) => result.wrap_err("Failed to deploy contract")?,
        Err(_) => {
            return Err(Error::Timeout { label: "deploy".to_string(), secs: wait.as_secs() }.into());
        }
    };
    ensure_success(&receipt, "deploy")?;

    let address = instance.address();
    info!(
        ?address,
        tx_hash = ?receipt.transaction_hash,
        block = %receipt.block_number.unwrap_or_default(),
        "✅ {} deployed", artifact.contract_name
    );
    Ok((Deeznuts::new(address, client), receipt))
}

// END OF FILE: deployer/src/deploy.rs
