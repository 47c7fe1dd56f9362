// tests/deeznuts_test.rs

// Needs a dev node (Hardhat or Anvil fork with a Uniswap V2 router) and a
// compiled artifact at ARTIFACT_PATH.
// Run with: cargo test --features node_tests --test deeznuts_test

#![cfg(feature = "node_tests")]

use deeznuts_deployer::{
    balances::{balance_deltas, eth_balance, token_balances},
    events::swap_and_liquify_events,
    fees::{expected_total_fee, fee_error, fee_tolerance, fee_within_tolerance},
    harness::{setup_test_env, TestEnv},
    send_and_confirm, BURN_ADDRESS, EXPECTED_TOTAL_SUPPLY, NUM_TOKENS_SELL_TO_ADD_TO_LIQUIDITY,
};
use ethers::{
    signers::Signer,
    types::{I256, U256},
    utils::{format_ether, parse_ether},
};
use eyre::{eyre, Result};
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

const TEST_TIMEOUT: Duration = Duration::from_secs(240);

fn setup_tracing() {
    let _ = fmt()
        .with_max_level(LevelFilter::INFO)
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn transfer_amount() -> U256 {
    U256::from(10u64) * U256::exp10(18)
}

async fn total_supply_matches(env: &TestEnv) -> Result<()> {
    let supply = env.token.total_supply().call().await?;
    assert_eq!(supply, *EXPECTED_TOTAL_SUPPLY, "total supply");
    Ok(())
}

async fn transfer_to_excluded_address_is_untaxed(env: &TestEnv) -> Result<()> {
    let admin = env.roles.admin.address();
    let user_a = env.roles.user_a.address();

    send_and_confirm(env.token.exclude_from_fee(user_a), "excludeFromFee(userA)", env.wait).await?;
    assert!(env.token.is_excluded_from_fee(user_a).call().await?);

    let before = token_balances(&env.token, &[admin, user_a]).await?;
    send_and_confirm(env.token.transfer(user_a, transfer_amount()), "transfer(admin -> userA)", env.wait).await?;
    let after = token_balances(&env.token, &[admin, user_a]).await?;

    let amount = I256::try_from(transfer_amount()).map_err(|_| eyre!("amount exceeds I256"))?;
    assert_eq!(balance_deltas(&before, &after)?, vec![-amount, amount]);
    Ok(())
}

async fn transfer_between_included_addresses_takes_twelve_percent(env: &TestEnv) -> Result<()> {
    let user_a = env.roles.user_a.address();
    let user_b = env.roles.user_b.address();

    send_and_confirm(env.token.include_in_fee(user_a), "includeInFee(userA)", env.wait).await?;
    assert!(!env.token.is_excluded_from_fee(user_a).call().await?);
    send_and_confirm(env.token.include_in_fee(user_b), "includeInFee(userB)", env.wait).await?;
    assert!(!env.token.is_excluded_from_fee(user_b).call().await?);

    let balance_before = env.token.balance_of(user_b).call().await?;
    let as_user_a = env.token_as(&env.roles.user_a);
    send_and_confirm(as_user_a.transfer(user_b, transfer_amount()), "transfer(userA -> userB)", env.wait).await?;
    let balance_after = env.token.balance_of(user_b).call().await?;

    let received = balance_after - balance_before;
    info!(
        received = %format_ether(received),
        expected_fee = %format_ether(expected_total_fee(transfer_amount())),
        "fee-paying transfer"
    );
    assert!(
        fee_within_tolerance(transfer_amount(), received),
        "fee off by {} (tolerance {})",
        fee_error(transfer_amount(), received),
        fee_tolerance(transfer_amount())
    );
    Ok(())
}

async fn adding_liquidity_works(env: &TestEnv) -> Result<()> {
    let router = env.router().await?;
    let liquidity_amount = parse_ether(100)?;
    let admin = env.roles.admin.address();

    send_and_confirm(env.token.approve(router.address(), liquidity_amount), "approve(router)", env.wait).await?;

    let deadline = env.latest_timestamp().await? + U256::from(60u64);
    info!(balance = %format_ether(eth_balance(&env.admin_client, admin).await?), "admin ETH before addLiquidityETH");
    let add = router
        .add_liquidity_eth(env.token_address(), liquidity_amount, U256::zero(), U256::zero(), admin, deadline)
        .value(parse_ether(10)?);
    send_and_confirm(add, "addLiquidityETH", env.wait).await?;
    Ok(())
}

async fn fees_reach_beneficiary_wallets(env: &TestEnv) -> Result<()> {
    let user_a = env.roles.user_a.address();
    let user_b = env.roles.user_b.address();
    let marketing = env.roles.marketing.address();
    let charity = env.roles.charity.address();

    send_and_confirm(env.token.transfer(user_a, transfer_amount()), "transfer(admin -> userA)", env.wait).await?;
    send_and_confirm(env.token.include_in_fee(user_a), "includeInFee(userA)", env.wait).await?;
    send_and_confirm(env.token.include_in_fee(user_b), "includeInFee(userB)", env.wait).await?;
    assert!(!env.token.is_excluded_from_fee(user_a).call().await?);
    assert!(!env.token.is_excluded_from_fee(user_b).call().await?);

    let seed = *NUM_TOKENS_SELL_TO_ADD_TO_LIQUIDITY * U256::from(2u64);
    send_and_confirm(env.token.transfer(env.token_address(), seed), "transfer(admin -> token)", env.wait).await?;

    let marketing_before = eth_balance(&env.admin_client, marketing).await?;
    let charity_before = eth_balance(&env.admin_client, charity).await?;
    let burn_before = env.token.balance_of(*BURN_ADDRESS).call().await?;

    let as_user_a = env.token_as(&env.roles.user_a);
    send_and_confirm(as_user_a.transfer(user_b, transfer_amount()), "transfer(userA -> userB)", env.wait).await?;

    let marketing_after = eth_balance(&env.admin_client, marketing).await?;
    let charity_after = eth_balance(&env.admin_client, charity).await?;
    let burn_after = env.token.balance_of(*BURN_ADDRESS).call().await?;

    info!(%marketing_before, %marketing_after, "marketing wallet ETH");
    info!(%charity_before, %charity_after, "charity wallet ETH");
    info!(%burn_before, %burn_after, "burn address tokens");
    assert!(marketing_after > marketing_before, "marketing wallet received no ETH");
    assert!(charity_after > charity_before, "charity wallet received no ETH");
    assert!(burn_after > burn_before, "nothing was burned");
    Ok(())
}

async fn transfer_triggers_swap_and_liquify(env: &TestEnv) -> Result<()> {
    let user_a = env.roles.user_a.address();
    let receipt = send_and_confirm(env.token.transfer(user_a, transfer_amount()), "transfer(admin -> userA)", env.wait).await?;
    let events = swap_and_liquify_events(&receipt, env.token_address());
    assert!(!events.is_empty(), "no SwapAndLiquify in {:?}", receipt.transaction_hash);
    info!(?events, "SwapAndLiquify emitted");
    Ok(())
}

// Steps share one deployment and build on each other's state, so they run
// in order inside a single test.
#[tokio::test]
async fn deeznuts_scenarios() -> Result<()> {
    setup_tracing();
    timeout(TEST_TIMEOUT, async {
        let env = setup_test_env().await?;

        info!("1. total supply");
        total_supply_matches(&env).await?;
        info!("2a. transfer to fee-excluded address");
        transfer_to_excluded_address_is_untaxed(&env).await?;
        info!("2b. transfer between fee-included addresses");
        transfer_between_included_addresses_takes_twelve_percent(&env).await?;
        info!("3. add liquidity");
        adding_liquidity_works(&env).await?;
        info!("4. fee routing");
        fees_reach_beneficiary_wallets(&env).await?;
        info!("5. swap and liquify");
        transfer_triggers_swap_and_liquify(&env).await?;
        Ok::<(), eyre::Report>(())
    })
    .await
    .map_err(|e| eyre!("deeznuts_scenarios timed out: {}", e))?
}
