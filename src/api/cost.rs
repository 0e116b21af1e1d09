//! Shipping Cost Requests
//!
//! Shapes caller supplied locations, package data and couriers into the
//! parameters of a `cost` or `internationalCost` request.

use crate::api::endpoint::{COST, INTERNATIONAL_COST};
use crate::catalog::Account;
use crate::error::{Result, WoongkirError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Origin or destination of a shipment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// RajaOngkir city ID
    #[serde(default)]
    pub city: String,

    /// RajaOngkir subdistrict ID, only honoured on tiers with subdistrict support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdistrict: Option<String>,

    /// Country ID; a non-empty value makes the request international
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    /// Location addressed by city
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Default::default()
        }
    }

    /// Location addressed by country
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            ..Default::default()
        }
    }

    pub fn with_subdistrict(mut self, subdistrict: impl Into<String>) -> Self {
        self.subdistrict = Some(subdistrict.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Subdistrict ID, if set and non-empty
    pub fn subdistrict_id(&self) -> Option<&str> {
        non_empty(&self.subdistrict)
    }

    /// Country ID, if set and non-empty
    pub fn country_id(&self) -> Option<&str> {
        non_empty(&self.country)
    }

    /// Whether this destination needs the international endpoint
    pub fn is_international(&self) -> bool {
        self.country_id().is_some()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Package weight and dimensions, forwarded as-is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDimensions {
    /// Weight in grams
    pub weight: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<u32>,

    /// Additional fields merged into the request verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl PackageDimensions {
    pub fn new(weight: u32) -> Self {
        Self {
            weight,
            ..Default::default()
        }
    }

    /// Set length, width and height at once
    pub fn with_size(mut self, length: u32, width: u32, height: u32) -> Self {
        self.length = Some(length);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_diameter(mut self, diameter: u32) -> Self {
        self.diameter = Some(diameter);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Form parameters for this package
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("weight".to_string(), self.weight.to_string());

        let sizes = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("diameter", self.diameter),
        ];
        for (name, value) in sizes {
            if let Some(value) = value {
                params.insert(name.to_string(), value.to_string());
            }
        }

        params.extend(self.extra.clone());
        params
    }
}

/// A fully shaped cost request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostQuery {
    /// `cost` or `internationalCost`
    pub endpoint: &'static str,

    /// Form body
    pub params: BTreeMap<String, String>,
}

impl CostQuery {
    /// Shape a cost request for the given account tier.
    ///
    /// Package fields are merged last and win over location and courier
    /// fields of the same name.
    pub fn build<S: AsRef<str>>(
        account: &Account,
        destination: &Location,
        origin: &Location,
        dimensions: &PackageDimensions,
        couriers: &[S],
    ) -> Result<Self> {
        let courier = courier_param(account, couriers)?;
        let mut params = BTreeMap::new();

        let endpoint = match destination.country_id() {
            Some(country) => {
                params.insert("destination".to_string(), country.to_string());
                params.insert("origin".to_string(), origin.city.clone());
                INTERNATIONAL_COST
            }
            None => {
                let (destination_id, destination_type) = address(account, destination);
                let (origin_id, origin_type) = address(account, origin);
                params.insert("destination".to_string(), destination_id.to_string());
                params.insert("destinationType".to_string(), destination_type.to_string());
                params.insert("origin".to_string(), origin_id.to_string());
                params.insert("originType".to_string(), origin_type.to_string());
                COST
            }
        };

        params.insert("courier".to_string(), courier);
        params.extend(dimensions.to_params());

        Ok(Self { endpoint, params })
    }
}

/// ID and address type of a domestic location
fn address<'a>(account: &Account, location: &'a Location) -> (&'a str, &'static str) {
    match location.subdistrict_id() {
        Some(subdistrict) if account.subdistrict => (subdistrict, "subdistrict"),
        _ => (location.city.as_str(), "city"),
    }
}

/// `jne:pos` on tiers with multi-courier queries, the first courier otherwise
fn courier_param<S: AsRef<str>>(account: &Account, couriers: &[S]) -> Result<String> {
    let first = couriers.first().ok_or_else(|| {
        WoongkirError::InvalidRequest("at least one courier is required".to_string())
    })?;

    if account.multiple {
        Ok(couriers
            .iter()
            .map(|c| c.as_ref())
            .collect::<Vec<_>>()
            .join(":"))
    } else {
        Ok(first.as_ref().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AccountType, ACCOUNTS};

    fn build(
        account_type: AccountType,
        destination: &Location,
        origin: &Location,
        couriers: &[&str],
    ) -> CostQuery {
        CostQuery::build(
            Account::for_type(account_type),
            destination,
            origin,
            &PackageDimensions::new(1000),
            couriers,
        )
        .unwrap()
    }

    #[test]
    fn test_domestic_uses_cost_endpoint() {
        let query = build(
            AccountType::Starter,
            &Location::city("501"),
            &Location::city("114"),
            &["jne"],
        );
        assert_eq!(query.endpoint, "cost");
        assert_eq!(query.params["destination"], "501");
        assert_eq!(query.params["origin"], "114");
        assert_eq!(query.params["weight"], "1000");
    }

    #[test]
    fn test_country_routes_international() {
        let query = build(
            AccountType::Pro,
            &Location::city("501").with_country("108"),
            &Location::city("152").with_subdistrict("2096"),
            &["jne", "pos"],
        );
        assert_eq!(query.endpoint, "internationalCost");
        assert_eq!(query.params["destination"], "108");
        assert_eq!(query.params["origin"], "152");
        assert!(!query.params.contains_key("destinationType"));
        assert!(!query.params.contains_key("originType"));
        assert_eq!(query.params["courier"], "jne:pos");
        assert_eq!(query.params["weight"], "1000");
    }

    #[test]
    fn test_international_single_courier_tier_sends_first_only() {
        let query = build(
            AccountType::Starter,
            &Location::country("108"),
            &Location::city("152"),
            &["jne", "pos"],
        );
        assert_eq!(query.endpoint, "internationalCost");
        assert_eq!(query.params["courier"], "jne");
        assert_eq!(query.params["weight"], "1000");
    }

    #[test]
    fn test_subdistrict_support_addresses_origin_by_subdistrict() {
        let query = build(
            AccountType::Pro,
            &Location::city("501"),
            &Location::city("114").with_subdistrict("1576"),
            &["jne"],
        );
        assert_eq!(query.params["origin"], "1576");
        assert_eq!(query.params["originType"], "subdistrict");
        assert_eq!(query.params["destination"], "501");
        assert_eq!(query.params["destinationType"], "city");
    }

    #[test]
    fn test_empty_country_stays_domestic() {
        let query = build(
            AccountType::Basic,
            &Location::city("501").with_country(""),
            &Location::city("114"),
            &["jne"],
        );
        assert_eq!(query.endpoint, "cost");
    }

    #[test]
    fn test_no_subdistrict_support_always_uses_city() {
        for account in ACCOUNTS.iter().filter(|a| !a.subdistrict) {
            let query = CostQuery::build(
                account,
                &Location::city("501").with_subdistrict("6981"),
                &Location::city("114").with_subdistrict("1576"),
                &PackageDimensions::new(500),
                &["jne"],
            )
            .unwrap();
            assert_eq!(query.params["destination"], "501");
            assert_eq!(query.params["destinationType"], "city");
            assert_eq!(query.params["origin"], "114");
            assert_eq!(query.params["originType"], "city");
        }
    }

    #[test]
    fn test_subdistrict_support_uses_subdistrict_when_given() {
        let query = build(
            AccountType::Pro,
            &Location::city("501").with_subdistrict("6981"),
            &Location::city("114"),
            &["jne"],
        );
        assert_eq!(query.params["destination"], "6981");
        assert_eq!(query.params["destinationType"], "subdistrict");
        assert_eq!(query.params["origin"], "114");
        assert_eq!(query.params["originType"], "city");
    }

    #[test]
    fn test_empty_subdistrict_falls_back_to_city() {
        let query = build(
            AccountType::Basic,
            &Location::city("501").with_subdistrict(""),
            &Location::city("114"),
            &["jne"],
        );
        assert_eq!(query.params["destination"], "501");
        assert_eq!(query.params["destinationType"], "city");
    }

    #[test]
    fn test_single_courier_tier_sends_first_only() {
        for account in ACCOUNTS.iter().filter(|a| !a.multiple) {
            let query = CostQuery::build(
                account,
                &Location::city("501"),
                &Location::city("114"),
                &PackageDimensions::new(500),
                &["tiki", "jne", "pos"],
            )
            .unwrap();
            assert_eq!(query.params["courier"], "tiki");
        }
    }

    #[test]
    fn test_multi_courier_tier_joins_codes() {
        for account_type in [AccountType::Basic, AccountType::Pro] {
            let query = build(
                account_type,
                &Location::city("501"),
                &Location::city("114"),
                &["jne", "pos"],
            );
            assert_eq!(query.params["courier"], "jne:pos");
        }
    }

    #[test]
    fn test_empty_courier_list_is_rejected() {
        let err = CostQuery::build(
            Account::for_type(AccountType::Pro),
            &Location::city("501"),
            &Location::city("114"),
            &PackageDimensions::new(500),
            &[] as &[&str],
        )
        .unwrap_err();
        assert_eq!(err.code(), "invalid_request");
    }

    #[test]
    fn test_dimensions_are_merged() {
        let dims = PackageDimensions::new(1700)
            .with_size(10, 20, 30)
            .with_extra("courier", "pos");
        let query = CostQuery::build(
            Account::for_type(AccountType::Pro),
            &Location::city("501"),
            &Location::city("114"),
            &dims,
            &["jne"],
        )
        .unwrap();

        assert_eq!(query.params["weight"], "1700");
        assert_eq!(query.params["length"], "10");
        assert_eq!(query.params["width"], "20");
        assert_eq!(query.params["height"], "30");
        assert!(!query.params.contains_key("diameter"));
        assert_eq!(query.params["courier"], "pos");
    }
}
