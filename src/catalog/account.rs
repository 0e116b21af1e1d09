//! Account Tiers
//!
//! RajaOngkir subscription levels and the features each one unlocks.

use crate::error::WoongkirError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RajaOngkir subscription level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Starter,
    Basic,
    Pro,
}

impl AccountType {
    /// Key used in settings and option bags
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Starter => "starter",
            AccountType::Basic => "basic",
            AccountType::Pro => "pro",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = WoongkirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Account::get(s)
            .map(|account| account.account_type)
            .ok_or_else(|| WoongkirError::Config(format!("Unknown account type '{}'", s)))
    }
}

/// Fixed descriptor of an account tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Account {
    pub account_type: AccountType,

    /// Display label
    pub label: &'static str,

    /// Base API URL, without trailing slash
    pub api_url: &'static str,

    /// Whether costs may be addressed by subdistrict
    pub subdistrict: bool,

    /// Whether several couriers may be queried at once
    pub multiple: bool,
}

/// All account tiers
pub const ACCOUNTS: [Account; 3] = [
    Account {
        account_type: AccountType::Starter,
        label: "Starter",
        api_url: "http://api.rajaongkir.com/starter",
        subdistrict: false,
        multiple: false,
    },
    Account {
        account_type: AccountType::Basic,
        label: "Basic",
        api_url: "http://api.rajaongkir.com/basic",
        subdistrict: true,
        multiple: true,
    },
    Account {
        account_type: AccountType::Pro,
        label: "Pro",
        api_url: "http://pro.rajaongkir.com/api",
        subdistrict: true,
        multiple: true,
    },
];

impl Account {
    /// Look up a tier by key, `None` for unknown keys
    pub fn get(key: &str) -> Option<&'static Account> {
        ACCOUNTS.iter().find(|a| a.account_type.as_str() == key)
    }

    /// Descriptor of a known tier
    pub fn for_type(account_type: AccountType) -> &'static Account {
        match account_type {
            AccountType::Starter => &ACCOUNTS[0],
            AccountType::Basic => &ACCOUNTS[1],
            AccountType::Pro => &ACCOUNTS[2],
        }
    }

    pub fn all() -> &'static [Account] {
        &ACCOUNTS
    }
}
