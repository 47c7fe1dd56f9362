// deployer/src/client.rs

use crate::config::Config;
use ethers::{
    prelude::{Http, LocalWallet, Middleware, Provider, SignerMiddleware},
    signers::Signer,
};
use eyre::{Result, WrapErr};
use std::{sync::Arc, time::Duration};
use tracing::{info, instrument};

pub type DeployClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// HTTP provider for `config.rpc_url` with the configured polling interval.
pub fn provider(config: &Config) -> Result<Provider<Http>> {
    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .wrap_err_with(|| format!("Failed to create HTTP provider for {}", config.rpc_url))?
        .interval(Duration::from_millis(config.poll_interval_ms));
    Ok(provider)
}

/// Chain id from config, or asked from the node when unset.
#[instrument(skip_all)]
pub async fn resolve_chain_id(config: &Config, provider: &Provider<Http>) -> Result<u64> {
    if let Some(id) = config.chain_id {
        return Ok(id);
    }
    let id = provider
        .get_chainid()
        .await
        .wrap_err("Failed to query chain id from RPC")?
        .as_u64();
    info!("RPC OK. Chain ID: {}", id);
    Ok(id)
}

/// Signing client for one wallet. The wallet must already carry the chain id.
pub fn connect(provider: Provider<Http>, wallet: LocalWallet) -> Arc<DeployClient> {
    Arc::new(SignerMiddleware::new(provider, wallet))
}

/// Same provider, different signer. Mirrors `contract.connect(signer)`.
pub fn connect_as(client: &DeployClient, wallet: &LocalWallet) -> Arc<DeployClient> {
    let wallet = wallet.clone().with_chain_id(client.signer().chain_id());
    connect(client.inner().clone(), wallet)
}

// END OF FILE: deployer/src/client.rs
