// deployer/src/record.rs
// JSON record written next to a deploy, one file per chain

use chrono::{DateTime, Utc};
use ethers::types::{Address, TransactionReceipt, TxHash, U256};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub address: Address,
    pub chain_id: u64,
    pub deployer: Address,
    pub charity_wallet: Address,
    pub marketing_wallet: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: Option<U256>,
    pub deployed_at: DateTime<Utc>,
}

impl DeploymentRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn from_receipt(
        contract_name: &str,
        address: Address,
        chain_id: u64,
        deployer: Address,
        charity_wallet: Address,
        marketing_wallet: Address,
        receipt: &TransactionReceipt,
    ) -> Self {
        Self {
            contract_name: contract_name.to_string(),
            address,
            chain_id,
            deployer,
            charity_wallet,
            marketing_wallet,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number.map(|b| b.as_u64()),
            gas_used: receipt.gas_used,
            deployed_at: Utc::now(),
        }
    }

    /// `<dir>/<chain_id>/<contract_name>.json`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.chain_id.to_string()).join(format!("{}.json", self.contract_name))
    }

    /// Writes the record, replacing an earlier one for the same chain.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = self.path_in(dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).wrap_err_with(|| format!("Failed to create {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).wrap_err_with(|| format!("Failed to write deployment record {:?}", path))?;
        info!("Deployment record written to {:?}", path);
        Ok(path)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let raw = fs::read_to_string(path_ref)
            .wrap_err_with(|| format!("Failed to read deployment record {:?}", path_ref))?;
        Ok(serde_json::from_str(&raw)?)
    }
}
