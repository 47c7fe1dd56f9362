// deployer/src/events.rs

use crate::bindings::deeznuts::SwapAndLiquifyFilter;
use crate::SWAP_AND_LIQUIFY_TOPIC;
use ethers::{
    contract::parse_log,
    types::{Address, Log, TransactionReceipt},
};
use tracing::warn;

/// Decodes every `SwapAndLiquify` emitted by `token` in `receipt`.
/// Logs from other addresses, or with other topics, are skipped.
pub fn swap_and_liquify_events(receipt: &TransactionReceipt, token: Address) -> Vec<SwapAndLiquifyFilter> {
    receipt
        .logs
        .iter()
        .filter(|log| log.address == token)
        .filter_map(decode_swap_and_liquify)
        .collect()
}

pub fn decode_swap_and_liquify(log: &Log) -> Option<SwapAndLiquifyFilter> {
    if log.topics.first() != Some(&*SWAP_AND_LIQUIFY_TOPIC) {
        return None;
    }
    match parse_log::<SwapAndLiquifyFilter>(log.clone()) {
        Ok(event) => Some(event),
        Err(e) => {
            warn!(tx_hash = ?log.transaction_hash, error = %e, "SwapAndLiquify log failed to decode");
            None
        }
    }
}
