// deployer/src/lib.rs
// Library interface shared by the deploy binary and the integration suite

use ethers::contract::EthEvent;
use ethers::types::{Address, H256, U256};
use lazy_static::lazy_static;

pub mod accounts;
pub mod artifact;
pub mod balances;
pub mod bindings;
pub mod client;
pub mod config;
pub mod deploy;
pub mod errors;
pub mod events;
pub mod fees;
pub mod record;
pub mod transaction;

#[cfg(feature = "node_tests")]
pub mod harness;

// Public types re-exported for convenience
pub use accounts::{load_accounts, Roles, TestRoles};
pub use artifact::Artifact;
pub use bindings::{Deeznuts, IUniswapV2Router02};
pub use client::{connect, DeployClient};
pub use config::{load_config, Config};
pub use deploy::{deploy_deeznuts, deploy_with_receipt};
pub use errors::Error;
pub use transaction::send_and_confirm;

/// Name of the contract as it appears in Hardhat artifacts.
pub const CONTRACT_NAME: &str = "DEEZNUTS";

/// One whole token in base units (18 decimals).
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

lazy_static! {
    pub static ref SWAP_AND_LIQUIFY_TOPIC: H256 = bindings::deeznuts::SwapAndLiquifyFilter::signature();
    /// 0x000000000000000000000000000000000000dEaD
    pub static ref BURN_ADDRESS: Address = Address::from_low_u64_be(0xdead);
    /// 1_000_000_000_000 tokens.
    pub static ref EXPECTED_TOTAL_SUPPLY: U256 = U256::from(1_000_000_000_000u64) * U256::from(ONE_TOKEN);
    /// Contract balance that has to be crossed before swap-and-liquify fires.
    pub static ref NUM_TOKENS_SELL_TO_ADD_TO_LIQUIDITY: U256 = U256::from(1_000_000u64) * U256::from(ONE_TOKEN);
}
