//! Client Options
//!
//! Typed client configuration that still accepts the loose key/value
//! options the WordPress settings store hands over.

use crate::catalog::AccountType;
use crate::error::{Result, WoongkirError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Configuration read on every request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// RajaOngkir API key, sent in the `key` header
    #[serde(default, alias = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Subscription tier, selects base URL and features
    #[serde(default, alias = "accountTier")]
    pub account_type: AccountType,

    /// Override for the tier's API URL
    #[serde(default, alias = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Options without meaning to the client, kept for the caller
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Store a named option.
    ///
    /// `api_key`, `account_type` and `base_url` (or their camelCase forms)
    /// go to the typed fields and must be strings or null; anything else is
    /// kept as-is.
    pub fn set_option(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        match key {
            "api_key" | "apiKey" => self.api_key = optional_string(key, value)?,
            "account_type" | "accountTier" => {
                self.account_type = match optional_string(key, value)? {
                    Some(account_type) => account_type.parse()?,
                    None => AccountType::default(),
                };
            }
            "base_url" | "baseUrl" => self.base_url = optional_string(key, value)?,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(self)
    }

    /// Apply every entry of an option map through [`ClientConfig::set_option`]
    pub fn set_options<I, K, V>(&mut self, options: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (key, value) in options {
            self.set_option(key.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Read a named option
    pub fn get_option(&self, key: &str) -> Option<Value> {
        match key {
            "api_key" | "apiKey" => self.api_key.clone().map(Value::String),
            "account_type" | "accountTier" => {
                Some(Value::String(self.account_type.as_str().to_string()))
            }
            "base_url" | "baseUrl" => self.base_url.clone().map(Value::String),
            _ => self.extra.get(key).cloned(),
        }
    }

    /// Read a named option, falling back to `default`
    pub fn get_option_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.get_option(key).unwrap_or_else(|| default.into())
    }
}

fn optional_string(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(WoongkirError::Config(format!(
            "Option '{}' must be a string, got {}",
            key, other
        ))),
    }
}
