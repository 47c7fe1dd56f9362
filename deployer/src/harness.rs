// deployer/src/harness.rs
// Fresh deployment plus the six dev accounts, for the node-backed suite.
#![cfg(feature = "node_tests")]

use crate::accounts::{load_accounts, TestRoles};
use crate::artifact::Artifact;
use crate::bindings::{Deeznuts, IUniswapV2Router02};
use crate::client::{connect, connect_as, provider, resolve_chain_id, DeployClient};
use crate::config::{load_config, Config};
use crate::deploy::deploy_deeznuts;
use ethers::{
    providers::Middleware,
    signers::{LocalWallet, Signer},
    types::{Address, U256},
};
use eyre::{eyre, Result, WrapErr};
use std::{sync::Arc, time::Duration};
use tracing::{info, instrument};

#[derive(Debug)]
pub struct TestEnv {
    pub config: Config,
    pub roles: TestRoles,
    pub admin_client: Arc<DeployClient>,
    pub token: Deeznuts<DeployClient>,
    pub wait: Duration,
}

#[instrument(skip_all, name = "test_setup")]
pub async fn setup_test_env() -> Result<TestEnv> {
    info!("Setting up test environment...");
    let config = load_config()?;
    let provider = provider(&config)?;
    let chain_id = resolve_chain_id(&config, &provider).await?;
    let accounts = load_accounts(&config, chain_id)?;
    let roles = TestRoles::resolve(&accounts)?;

    let artifact = Artifact::load(&config.artifact_path)?;
    let admin_client = connect(provider, roles.admin.clone());
    let wait = Duration::from_secs(config.tx_timeout_secs);

    let token = deploy_deeznuts(
        admin_client.clone(),
        &artifact,
        roles.charity.address(),
        roles.marketing.address(),
        config.confirmations,
        wait,
    )
    .await
    .wrap_err("Failed to deploy DEEZNUTS for tests")?;
    info!("✅ Test token deployed at {:?}", token.address());

    Ok(TestEnv { config, roles, admin_client, token, wait })
}

impl TestEnv {
    /// Token handle whose transactions are signed by `wallet`.
    pub fn token_as(&self, wallet: &LocalWallet) -> Deeznuts<DeployClient> {
        Deeznuts::new(self.token.address(), connect_as(&self.admin_client, wallet))
    }

    pub fn token_address(&self) -> Address {
        self.token.address()
    }

    /// Router the token was wired to in its constructor, signed by the admin.
    pub async fn router(&self) -> Result<IUniswapV2Router02<DeployClient>> {
        let addr = self
            .token
            .uniswap_v2_router()
            .call()
            .await
            .wrap_err("uniswapV2Router() failed")?;
        Ok(IUniswapV2Router02::new(addr, self.admin_client.clone()))
    }

    pub async fn latest_timestamp(&self) -> Result<U256> {
        let block_number = self.admin_client.get_block_number().await?;
        let block = self
            .admin_client
            .get_block(block_number)
            .await?
            .ok_or_else(|| eyre!("Failed to get block {}", block_number))?;
        Ok(block.timestamp)
    }
}
