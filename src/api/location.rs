//! Location Lookups
//!
//! Query builders for the province, city, subdistrict and international
//! origin/destination listings.

use crate::api::endpoint::{
    CITY, INTERNATIONAL_DESTINATION, INTERNATIONAL_ORIGIN, PROVINCE, SUBDISTRICT,
};
use std::collections::BTreeMap;

/// A GET request against one of the location listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub endpoint: &'static str,

    /// Query string parameters; unset filters are left out
    pub params: BTreeMap<String, String>,
}

impl LocationQuery {
    fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            params: BTreeMap::new(),
        }
    }

    fn filter(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.params.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// All provinces, or one by ID
    pub fn province(id: Option<&str>) -> Self {
        Self::new(PROVINCE).filter("id", id)
    }

    /// Cities, optionally narrowed to a province or a single city
    pub fn city(province: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CITY).filter("province", province).filter("id", id)
    }

    /// Subdistricts of a city, or a single one by ID
    pub fn subdistrict(city: &str, id: Option<&str>) -> Self {
        Self::new(SUBDISTRICT)
            .filter("city", Some(city))
            .filter("id", id)
    }

    /// Indonesian cities that ship internationally
    pub fn international_origin(province: Option<&str>, id: Option<&str>) -> Self {
        Self::new(INTERNATIONAL_ORIGIN)
            .filter("province", province)
            .filter("id", id)
    }

    /// Destination countries
    pub fn international_destination(id: Option<&str>) -> Self {
        Self::new(INTERNATIONAL_DESTINATION).filter("id", id)
    }
}
