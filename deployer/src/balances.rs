// deployer/src/balances.rs

use crate::bindings::Deeznuts;
use crate::client::DeployClient;
use ethers::{
    providers::Middleware,
    types::{Address, I256, U256},
};
use eyre::{eyre, Result, WrapErr};

/// Signed per-index change between two balance snapshots.
pub fn balance_deltas(before: &[U256], after: &[U256]) -> Result<Vec<I256>> {
    if before.len() != after.len() {
        return Err(eyre!(
            "snapshot length mismatch: {} before, {} after",
            before.len(),
            after.len()
        ));
    }
    before
        .iter()
        .zip(after)
        .map(|(b, a)| {
            let b = I256::try_from(*b).map_err(|_| eyre!("balance {} exceeds I256", b))?;
            let a = I256::try_from(*a).map_err(|_| eyre!("balance {} exceeds I256", a))?;
            Ok(a - b)
        })
        .collect()
}

/// Token balances of `holders`, in order.
pub async fn token_balances(token: &Deeznuts<DeployClient>, holders: &[Address]) -> Result<Vec<U256>> {
    let mut out = Vec::with_capacity(holders.len());
    for holder in holders {
        let balance = token
            .balance_of(*holder)
            .call()
            .await
            .wrap_err_with(|| format!("balanceOf({:?}) failed", holder))?;
        out.push(balance);
    }
    Ok(out)
}

/// Native-currency balance of `holder` at the latest block.
pub async fn eth_balance(client: &DeployClient, holder: Address) -> Result<U256> {
    client
        .get_balance(holder, None)
        .await
        .wrap_err_with(|| format!("getBalance({:?}) failed", holder))
}
