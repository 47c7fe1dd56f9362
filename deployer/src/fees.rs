// deployer/src/fees.rs
// Expected fee figures the integration suite checks the contract against.
// The contract does its own integer math; nothing here feeds back into it.

use ethers::types::U256;

/// Per-transfer fee split, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    pub tax: u64,
    pub liquidity: u64,
    pub marketing: u64,
    pub charity: u64,
    pub burn: u64,
}

pub const DEEZNUTS_FEES: FeeSchedule = FeeSchedule {
    tax: 2,
    liquidity: 3,
    marketing: 3,
    charity: 3,
    burn: 1,
};

/// Relative error accepted between expected and observed fee: 10^-12.
pub const FEE_TOLERANCE_DIVISOR: u64 = 1_000_000_000_000;

impl FeeSchedule {
    pub fn total_percent(&self) -> u64 {
        self.tax + self.liquidity + self.marketing + self.charity + self.burn
    }

    /// `floor(amount * total_percent / 100)`, split so no `amount` overflows
    /// while the schedule stays at or below 100%.
    pub fn total_fee(&self, amount: U256) -> U256 {
        let pct = U256::from(self.total_percent());
        let hundred = U256::from(100u64);
        (amount / hundred) * pct + (amount % hundred) * pct / hundred
    }
}

/// 12% of `amount`, rounded down.
pub fn expected_total_fee(amount: U256) -> U256 {
    DEEZNUTS_FEES.total_fee(amount)
}

pub fn fee_tolerance(amount: U256) -> U256 {
    amount / U256::from(FEE_TOLERANCE_DIVISOR)
}

/// Distance between the fee the contract actually took (`amount - received`)
/// and the expected 12%. Works when `received > amount` too.
pub fn fee_error(amount: U256, received: U256) -> U256 {
    let expected_received = amount.saturating_sub(expected_total_fee(amount));
    if received > expected_received {
        received - expected_received
    } else {
        expected_received - received
    }
}

pub fn fee_within_tolerance(amount: U256, received: U256) -> bool {
    fee_error(amount, received) <= fee_tolerance(amount)
}
