//! Courier Catalog
//!
//! Couriers and services supported per shipping zone.

use crate::catalog::account::AccountType::{self, Basic, Pro, Starter};
use serde::Serialize;
use std::fmt;

/// Shipping zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Domestic,
    International,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Domestic => "domestic",
            Zone::International => "international",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A courier and the tiers it can be used with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Courier {
    /// Code sent in the `courier` parameter
    pub code: &'static str,

    pub label: &'static str,

    /// Service codes as they appear in cost results
    pub services: &'static [&'static str],

    /// Tiers allowed to query this courier
    pub accounts: &'static [AccountType],

    /// Tiers allowed to query this courier together with others
    pub multiple: &'static [AccountType],
}

impl Courier {
    pub fn is_available_for(&self, account_type: AccountType) -> bool {
        self.accounts.contains(&account_type)
    }

    pub fn allows_multiple(&self, account_type: AccountType) -> bool {
        self.multiple.contains(&account_type)
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| *s == service)
    }
}

/// Couriers of one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourierZone {
    pub zone: Zone,
    pub couriers: &'static [Courier],
}

impl CourierZone {
    /// Look up a zone by key, `None` for unknown keys
    pub fn get(key: &str) -> Option<&'static CourierZone> {
        COURIERS.iter().find(|z| z.zone.as_str() == key)
    }

    pub fn for_zone(zone: Zone) -> &'static CourierZone {
        match zone {
            Zone::Domestic => &COURIERS[0],
            Zone::International => &COURIERS[1],
        }
    }

    pub fn all() -> &'static [CourierZone] {
        &COURIERS
    }

    /// Find a courier by code
    pub fn courier(&self, code: &str) -> Option<&'static Courier> {
        self.couriers.iter().find(|c| c.code == code)
    }

    /// Couriers usable with the given tier, in catalog order
    pub fn available_for(&self, account_type: AccountType) -> Vec<&'static Courier> {
        self.couriers
            .iter()
            .filter(|c| c.is_available_for(account_type))
            .collect()
    }
}

const DOMESTIC: [Courier; 5] = [
    Courier {
        code: "jne",
        label: "Jalur Nugraha Ekakurir",
        services: &["CTC", "CTCYES", "OKE", "REG", "YES"],
        accounts: &[Starter, Basic, Pro],
        multiple: &[Basic, Pro],
    },
    Courier {
        code: "tiki",
        label: "Citra Van Titipan Kilat",
        services: &["TRC", "REG", "ECO", "ONS", "SDS", "HDS"],
        accounts: &[Starter, Basic, Pro],
        multiple: &[Basic, Pro],
    },
    Courier {
        code: "pos",
        label: "POS Indonesia",
        services: &[
            "Surat Kilat Khusus",
            "Paketpos Biasa",
            "Paket Kilat Khusus",
            "Express Sameday Dokumen",
            "Express Sameday Barang",
            "Express Next Day Dokumen",
            "Express Next Day Barang",
            "Paketpos Dangerous Goods",
            "Paketpos Valuable Goods",
        ],
        accounts: &[Starter, Basic, Pro],
        multiple: &[Basic, Pro],
    },
    Courier {
        code: "pcp",
        label: "Priority Cargo and Package",
        services: &["ONS", "NFS", "REG"],
        accounts: &[Basic, Pro],
        multiple: &[Basic, Pro],
    },
    Courier {
        code: "rpx",
        label: "RPX Holding",
        services: &["SDP", "MDP", "NDP", "RGP", "REP", "ERP"],
        accounts: &[Basic, Pro],
        multiple: &[Basic, Pro],
    },
];

const INTERNATIONAL: [Courier; 2] = [
    Courier {
        code: "jne",
        label: "Jalur Nugraha Ekakurir",
        services: &["INTL"],
        accounts: &[Basic, Pro],
        multiple: &[Basic, Pro],
    },
    Courier {
        code: "pos",
        label: "POS Indonesia",
        services: &[
            "Surat R LN",
            "EMS BARANG",
            "PAKETPOS CEPAT LN",
            "PAKETPOS BIASA LN",
        ],
        accounts: &[Basic, Pro],
        multiple: &[Basic, Pro],
    },
];

/// Courier catalog, domestic zone first
pub const COURIERS: [CourierZone; 2] = [
    CourierZone {
        zone: Zone::Domestic,
        couriers: &DOMESTIC,
    },
    CourierZone {
        zone: Zone::International,
        couriers: &INTERNATIONAL,
    },
];
