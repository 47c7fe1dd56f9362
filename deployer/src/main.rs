// deployer/src/main.rs
// Deploy script: accounts #1 and #2 become the charity and marketing wallets

use deeznuts_deployer::{
    accounts::{load_accounts, Roles},
    artifact::Artifact,
    client::{connect, provider, resolve_chain_id},
    config::load_config,
    deploy::deploy_with_receipt,
    record::DeploymentRecord,
};
use ethers::signers::Signer;
use eyre::Result;
use std::{process::ExitCode, time::Duration};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Deployment failed: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = load_config()?;

    let provider = provider(&config)?;
    let chain_id = resolve_chain_id(&config, &provider).await?;
    let accounts = load_accounts(&config, chain_id)?;
    let roles = Roles::resolve(&accounts)?;
    info!(
        deployer = ?roles.deployer.address(),
        charity = ?roles.charity_address(),
        marketing = ?roles.marketing_address(),
        "Accounts resolved"
    );

    let artifact = Artifact::load(&config.artifact_path)?;
    let client = connect(provider, roles.deployer.clone());

    let (token, receipt) = deploy_with_receipt(
        client,
        &artifact,
        roles.charity_address(),
        roles.marketing_address(),
        config.confirmations,
        Duration::from_secs(config.tx_timeout_secs),
    )
    .await?;

    println!("{} deployed to {:?}", artifact.contract_name, token.address());

    if let Some(dir) = &config.deployments_dir {
        let record = DeploymentRecord::from_receipt(
            &artifact.contract_name,
            token.address(),
            chain_id,
            roles.deployer.address(),
            roles.charity_address(),
            roles.marketing_address(),
            &receipt,
        );
        record.write_to(dir)?;
    }

    Ok(())
}

// END OF FILE: deployer/src/main.rs
