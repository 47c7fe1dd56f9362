// deployer/src/config.rs

use crate::errors::Error;
use dotenv::dotenv;
use eyre::Result;
use std::{env, path::PathBuf, str::FromStr};
use tracing::{debug, info};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
/// Mnemonic Hardhat and Anvil seed their dev accounts from.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/DEEZNUTS.sol/DEEZNUTS.json";
pub const DEFAULT_ACCOUNT_COUNT: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    // Network
    pub rpc_url: String,
    pub chain_id: Option<u64>,
    pub poll_interval_ms: u64,

    // Accounts
    pub mnemonic: String,
    pub account_count: u32,
    pub private_keys: Vec<String>,

    // Deployment
    pub artifact_path: PathBuf,
    pub confirmations: usize,
    pub tx_timeout_secs: u64,
    pub deployments_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain_id: None,
            poll_interval_ms: 10,
            mnemonic: DEFAULT_MNEMONIC.to_string(),
            account_count: DEFAULT_ACCOUNT_COUNT,
            private_keys: Vec::new(),
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            confirmations: 1,
            tx_timeout_secs: 120,
            deployments_dir: None,
        }
    }
}

/// Reads `.env` (if present) and then the process environment.
pub fn load_config() -> Result<Config> {
    info!("Loading configuration from environment...");
    dotenv().ok();
    let config = config_from_lookup(|key| env::var(key).ok())?;
    debug!(rpc_url = %config.rpc_url, artifact = ?config.artifact_path, accounts = config.account_count, "Configuration loaded");
    Ok(config)
}

/// Builds a [`Config`] from an arbitrary key lookup. Unset or empty keys fall
/// back to defaults; set but unparsable keys are errors.
pub fn config_from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    fn parse_num<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, Error> {
        match raw {
            Some(s) => s.parse::<T>().map_err(|_| Error::InvalidEnv(key, s)),
            None => Ok(default),
        }
    }

    let defaults = Config::default();

    let chain_id = match get("CHAIN_ID") {
        Some(s) => Some(s.parse::<u64>().map_err(|_| Error::InvalidEnv("CHAIN_ID", s))?),
        None => None,
    };
    let private_keys = get("PRIVATE_KEYS")
        .map(|s| {
            s.split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(Config {
        rpc_url: get("RPC_URL").unwrap_or(defaults.rpc_url),
        chain_id,
        poll_interval_ms: parse_num("POLL_INTERVAL_MS", get("POLL_INTERVAL_MS"), defaults.poll_interval_ms)?,
        mnemonic: get("MNEMONIC").unwrap_or(defaults.mnemonic),
        account_count: parse_num("ACCOUNT_COUNT", get("ACCOUNT_COUNT"), defaults.account_count)?,
        private_keys,
        artifact_path: get("ARTIFACT_PATH").map(PathBuf::from).unwrap_or(defaults.artifact_path),
        confirmations: parse_num("CONFIRMATIONS", get("CONFIRMATIONS"), defaults.confirmations)?,
        tx_timeout_secs: parse_num("TX_TIMEOUT_SECS", get("TX_TIMEOUT_SECS"), defaults.tx_timeout_secs)?,
        deployments_dir: get("DEPLOYMENTS_DIR").map(PathBuf::from),
    })
}

// END OF FILE: deployer/src/config.rs
