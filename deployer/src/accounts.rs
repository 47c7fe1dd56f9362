// deployer/src/accounts.rs
// Ordered signer list, the Rust side of Hardhat's `getSigners()`

use crate::config::Config;
use crate::errors::Error;
use ethers::{
    signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer},
    types::Address,
};
use eyre::{Result, WrapErr};
use tracing::{debug, instrument};

/// Builds the ordered account list. Explicit `PRIVATE_KEYS` win over the
/// mnemonic; otherwise `account_count` wallets are derived at
/// `m/44'/60'/0'/0/{i}`.
#[instrument(skip(config))]
pub fn load_accounts(config: &Config, chain_id: u64) -> Result<Vec<LocalWallet>> {
    let wallets = if !config.private_keys.is_empty() {
        config
            .private_keys
            .iter()
            .enumerate()
            .map(|(i, key)| {
                key.parse::<LocalWallet>()
                    .wrap_err_with(|| format!("PRIVATE_KEYS entry #{} is not a valid private key", i))
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        (0..config.account_count)
            .map(|i| {
                MnemonicBuilder::<English>::default()
                    .phrase(config.mnemonic.as_str())
                    .index(i)
                    .and_then(|builder| builder.build())
                    .wrap_err_with(|| format!("Failed to derive account #{} from mnemonic", i))
            })
            .collect::<Result<Vec<_>>>()?
    };

    let wallets: Vec<LocalWallet> = wallets.into_iter().map(|w| w.with_chain_id(chain_id)).collect();
    debug!(count = wallets.len(), "Accounts loaded");
    Ok(wallets)
}

fn require(accounts: &[LocalWallet], needed: usize) -> Result<(), Error> {
    if accounts.len() < needed {
        return Err(Error::NotEnoughAccounts { needed, found: accounts.len() });
    }
    Ok(())
}

/// Accounts the deploy script needs. Positions are fixed:
/// 0 = deployer, 1 = charity wallet, 2 = marketing wallet.
#[derive(Debug, Clone)]
pub struct Roles {
    pub deployer: LocalWallet,
    pub charity: LocalWallet,
    pub marketing: LocalWallet,
}

impl Roles {
    pub fn resolve(accounts: &[LocalWallet]) -> Result<Self, Error> {
        require(accounts, 3)?;
        Ok(Self {
            deployer: accounts[0].clone(),
            charity: accounts[1].clone(),
            marketing: accounts[2].clone(),
        })
    }

    pub fn charity_address(&self) -> Address {
        self.charity.address()
    }

    pub fn marketing_address(&self) -> Address {
        self.marketing.address()
    }
}

/// Accounts the integration suite needs: the deploy roles plus three users
/// at positions 3, 4 and 5.
#[derive(Debug, Clone)]
pub struct TestRoles {
    pub admin: LocalWallet,
    pub charity: LocalWallet,
    pub marketing: LocalWallet,
    pub user_a: LocalWallet,
    pub user_b: LocalWallet,
    pub user_c: LocalWallet,
}

impl TestRoles {
    pub fn resolve(accounts: &[LocalWallet]) -> Result<Self, Error> {
        require(accounts, 6)?;
        let roles = Roles::resolve(accounts)?;
        Ok(Self {
            admin: roles.deployer,
            charity: roles.charity,
            marketing: roles.marketing,
            user_a: accounts[3].clone(),
            user_b: accounts[4].clone(),
            user_c: accounts[5].clone(),
        })
    }

    pub fn deploy_roles(&self) -> Roles {
        Roles {
            deployer: self.admin.clone(),
            charity: self.charity.clone(),
            marketing: self.marketing.clone(),
        }
    }
}

// END OF FILE: deployer/src/accounts.rs
