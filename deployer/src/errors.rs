// deployer/src/errors.rs

use ethers::types::TxHash;
use thiserror::Error;

/// Failure modes raised by this crate itself. Client and provider errors
/// travel inside `eyre::Report` untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("need at least {needed} accounts, provider supplied {found}")]
    NotEnoughAccounts { needed: usize, found: usize },

    #[error("{label}: transaction {tx_hash:?} reverted on-chain")]
    Reverted { label: String, tx_hash: TxHash },

    #[error("{label}: transaction {tx_hash:?} dropped before a receipt was produced")]
    Dropped { label: String, tx_hash: TxHash },

    #[error("{label}: no receipt after {secs}s")]
    Timeout { label: String, secs: u64 },

    #[error("artifact {0} has no creation bytecode")]
    EmptyBytecode(String),

    #[error("environment variable {0} has an invalid value: {1}")]
    InvalidEnv(&'static str, String),
}
