//! Woongkir - RajaOngkir Shipping Cost Client
//!
//! Looks up Indonesian courier rates through the RajaOngkir API. The client
//! picks the domestic or international endpoint, addresses locations by city
//! or subdistrict, and queries one or several couriers depending on the
//! account tier, then unwraps the API envelope into a result or a typed error.

use reqwest::Method;
use std::collections::BTreeMap;
use tracing::debug;

pub mod api;
pub mod blocking;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;

use api::{endpoint, CostQuery, LocationQuery};
use client::HttpClient;

pub use api::{Location, PackageDimensions};
pub use catalog::{Account, AccountType, Courier, CourierZone, Zone};
pub use client::RateResult;
pub use config::{ClientConfig, ConfigLoader};
pub use error::{Result, WoongkirError};

/// The main RajaOngkir client
#[derive(Debug, Clone)]
pub struct RateClient {
    /// Options read on every request
    config: ClientConfig,

    /// HTTP client
    http_client: HttpClient,
}

impl RateClient {
    /// Create a client with default options
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Create a client from an option map, each entry applied through
    /// [`RateClient::set_option`]
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
        let _ = dotenvy::dotenv();
        Self::from_config(ConfigLoader::new()?.into_config())
    }

    /// Create a client from a config object
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            config,
            http_client: HttpClient::new()?,
        })
    }

    /// Store a named option
    pub fn set_option(
        &mut self,
        key: &str,
        value: impl Into<serde_json::Value>,
    ) -> Result<&mut Self> {
        self.config.set_option(key, value)?;
        Ok(self)
    }

    /// Read a named option
    pub fn get_option(&self, key: &str) -> Option<serde_json::Value> {
        self.config.get_option(key)
    }

    /// Read a named option, falling back to `default`
    pub fn get_option_or(
        &self,
        key: &str,
        default: impl Into<serde_json::Value>,
    ) -> serde_json::Value {
        self.config.get_option_or(key, default)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Descriptor of the configured account tier
    pub fn account(&self) -> &'static Account {
        Account::for_type(self.config.account_type)
    }

    /// Look up an account tier by key
    pub fn get_account(&self, account_type: &str) -> Option<&'static Account> {
        Account::get(account_type)
    }

    /// All account tiers
    pub fn accounts(&self) -> &'static [Account] {
        Account::all()
    }

    /// Look up the couriers of a zone by key
    pub fn get_courier(&self, zone: &str) -> Option<&'static CourierZone> {
        CourierZone::get(zone)
    }

    /// The whole courier catalog
    pub fn couriers(&self) -> &'static [CourierZone] {
        CourierZone::all()
    }

    /// Get shipping costs.
    ///
    /// A destination with a non-empty country goes to `internationalCost`,
    /// anything else to `cost`.
    pub async fn get_cost<S: AsRef<str>>(
        &self,
        destination: &Location,
        origin: &Location,
        dimensions: &PackageDimensions,
        couriers: &[S],
    ) -> Result<RateResult> {
        let query = CostQuery::build(self.account(), destination, origin, dimensions, couriers)?;
        self.remote_post(query.endpoint, &query.params).await
    }

    /// Get the IDR exchange rate
    pub async fn get_currency(&self) -> Result<RateResult> {
        self.remote_get(endpoint::CURRENCY, &BTreeMap::new()).await
    }

    /// List provinces, or get one by ID
    pub async fn get_province(&self, id: Option<&str>) -> Result<RateResult> {
        self.location(LocationQuery::province(id)).await
    }

    /// List cities, optionally within a province, or get one by ID
    pub async fn get_city(&self, province: Option<&str>, id: Option<&str>) -> Result<RateResult> {
        self.location(LocationQuery::city(province, id)).await
    }

    /// List subdistricts of a city, or get one by ID
    pub async fn get_subdistrict(&self, city: &str, id: Option<&str>) -> Result<RateResult> {
        self.location(LocationQuery::subdistrict(city, id)).await
    }

    /// List international shipping origins
    pub async fn get_international_origin(
        &self,
        province: Option<&str>,
        id: Option<&str>,
    ) -> Result<RateResult> {
        self.location(LocationQuery::international_origin(province, id))
            .await
    }

    /// List international destination countries
    pub async fn get_international_destination(&self, id: Option<&str>) -> Result<RateResult> {
        self.location(LocationQuery::international_destination(id))
            .await
    }

    async fn location(&self, query: LocationQuery) -> Result<RateResult> {
        self.remote_get(query.endpoint, &query.params).await
    }

    /// Full request URL of an endpoint for the configured tier
    pub fn url(&self, endpoint: &str) -> String {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(self.account().api_url);
        endpoint::endpoint_url(base_url, endpoint)
    }

    /// Make a request with any method
    pub async fn remote_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        debug!(%endpoint, account = %self.config.account_type, "Calling RajaOngkir");
        self.http_client
            .request(method, &self.url(endpoint), self.config.api_key.as_deref(), params)
            .await
    }

    /// Make a POST request with a form body
    pub async fn remote_post(
        &self,
        endpoint: &str,
        body: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        self.remote_request(Method::POST, endpoint, body).await
    }

    /// Make a GET request with an optional query string
    pub async fn remote_get(
        &self,
        endpoint: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        self.remote_request(Method::GET, endpoint, query).await
    }
}
