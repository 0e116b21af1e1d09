//! Blocking Client
//!
//! Synchronous wrapper around [`crate::RateClient`] for callers without an
//! async runtime. Each call blocks the current thread until the single HTTP
//! request it makes has completed.
//!
//! The client drives its own tokio runtime, so it must not be created or
//! used from within an async context: doing so panics when the nested
//! `block_on` runs. Async callers use [`crate::RateClient`] directly.

use crate::catalog::{Account, CourierZone};
use crate::client::RateResult;
use crate::config::ClientConfig;
use crate::error::{Result, WoongkirError};
use crate::{Location, PackageDimensions};
use reqwest::Method;
use std::collections::BTreeMap;

/// Blocking RajaOngkir client
pub struct RateClient {
    inner: crate::RateClient,
    runtime: tokio::runtime::Runtime,
}

impl RateClient {
    /// Create a client with default options
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Create a client from an option map
    pub fn with_options<I, K, V>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<serde_json::Value>,
    {
        let mut config = ClientConfig::default();
        config.set_options(options)?;
        Self::from_config(config)
    }

    /// Create a client from `.env`, config files and environment variables
    pub fn from_env() -> Result<Self> {
        Self::wrap(crate::RateClient::from_env()?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::wrap(crate::RateClient::from_config(config)?)
    }

    fn wrap(inner: crate::RateClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| WoongkirError::Config(format!("Failed to create runtime: {}", e)))?;

        Ok(Self { inner, runtime })
    }

    pub fn set_option(
        &mut self,
        key: &str,
        value: impl Into<serde_json::Value>,
    ) -> Result<&mut Self> {
        self.inner.set_option(key, value)?;
        Ok(self)
    }

    pub fn get_option(&self, key: &str) -> Option<serde_json::Value> {
        self.inner.get_option(key)
    }

    pub fn get_option_or(
        &self,
        key: &str,
        default: impl Into<serde_json::Value>,
    ) -> serde_json::Value {
        self.inner.get_option_or(key, default)
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    pub fn account(&self) -> &'static Account {
        self.inner.account()
    }

    pub fn get_account(&self, account_type: &str) -> Option<&'static Account> {
        self.inner.get_account(account_type)
    }

    pub fn accounts(&self) -> &'static [Account] {
        self.inner.accounts()
    }

    pub fn get_courier(&self, zone: &str) -> Option<&'static CourierZone> {
        self.inner.get_courier(zone)
    }

    pub fn couriers(&self) -> &'static [CourierZone] {
        self.inner.couriers()
    }

    pub fn url(&self, endpoint: &str) -> String {
        self.inner.url(endpoint)
    }

    /// Get shipping costs
    pub fn get_cost<S: AsRef<str>>(
        &self,
        destination: &Location,
        origin: &Location,
        dimensions: &PackageDimensions,
        couriers: &[S],
    ) -> Result<RateResult> {
        self.runtime
            .block_on(self.inner.get_cost(destination, origin, dimensions, couriers))
    }

    /// Get the IDR exchange rate
    pub fn get_currency(&self) -> Result<RateResult> {
        self.runtime.block_on(self.inner.get_currency())
    }

    pub fn get_province(&self, id: Option<&str>) -> Result<RateResult> {
        self.runtime.block_on(self.inner.get_province(id))
    }

    pub fn get_city(&self, province: Option<&str>, id: Option<&str>) -> Result<RateResult> {
        self.runtime.block_on(self.inner.get_city(province, id))
    }

    pub fn get_subdistrict(&self, city: &str, id: Option<&str>) -> Result<RateResult> {
        self.runtime.block_on(self.inner.get_subdistrict(city, id))
    }

    pub fn get_international_origin(
        &self,
        province: Option<&str>,
        id: Option<&str>,
    ) -> Result<RateResult> {
        self.runtime
            .block_on(self.inner.get_international_origin(province, id))
    }

    pub fn get_international_destination(&self, id: Option<&str>) -> Result<RateResult> {
        self.runtime
            .block_on(self.inner.get_international_destination(id))
    }

    pub fn remote_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        self.runtime
            .block_on(self.inner.remote_request(method, endpoint, params))
    }

    pub fn remote_post(
        &self,
        endpoint: &str,
        body: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        self.runtime.block_on(self.inner.remote_post(endpoint, body))
    }

    pub fn remote_get(
        &self,
        endpoint: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        self.runtime.block_on(self.inner.remote_get(endpoint, query))
    }
}
