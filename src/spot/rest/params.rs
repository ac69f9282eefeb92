//! Request parameter builder.
//!
//! BingX endpoints take flat key-value parameter sets, sent as the URL query
//! string (and signed for private endpoints). This builder replaces an untyped
//! string map with typed setters and an explicit omit-if-unset rule: optional
//! parameters are only present on the wire when the caller supplied a value,
//! since omission and an explicit default are semantically different upstream.

use std::collections::BTreeMap;
use std::fmt::Display;

use rust_decimal::Decimal;

use crate::error::BingXError;
use crate::types::serde_helpers::plain_string;

/// An ordered set of wire parameters.
///
/// Keys are kept sorted so the encoded query string - and therefore the
/// request signature - is deterministic for a given parameter set.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter from any displayable value.
    pub fn set(mut self, key: &str, value: impl Display) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Set a decimal parameter, formatted as a plain decimal string:
    /// no exponent, no trailing zeros, no rounding.
    pub fn set_decimal(self, key: &str, value: Decimal) -> Self {
        self.set(key, plain_string(&value))
    }

    /// Set a boolean parameter, serialized as `"true"` / `"false"`.
    pub fn set_bool(self, key: &str, value: bool) -> Self {
        self.set(key, if value { "true" } else { "false" })
    }

    /// Set a parameter only when the caller provided a value.
    pub fn set_opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Set a decimal parameter only when the caller provided a value.
    pub fn set_opt_decimal(self, key: &str, value: Option<Decimal>) -> Self {
        match value {
            Some(value) => self.set_decimal(key, value),
            None => self,
        }
    }

    /// Whether the parameter set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Encode the parameters as a URL query string, keys in sorted order.
    pub fn to_query_string(&self) -> Result<String, BingXError> {
        serde_urlencoded::to_string(&self.entries)
            .map_err(|e| BingXError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_formatting_is_exact() {
        let params = Params::new()
            .set_decimal("price", "0.1".parse().unwrap())
            .set_decimal("quantity", "100.0".parse().unwrap());
        assert_eq!(params.get("price"), Some("0.1"));
        assert_eq!(params.get("quantity"), Some("100"));
    }

    #[test]
    fn test_optional_parameters_are_omitted() {
        let params = Params::new()
            .set("symbol", "BTC-USDT")
            .set_opt("limit", None::<u32>);
        assert_eq!(params.get("limit"), None);
        assert_eq!(params.to_query_string().unwrap(), "symbol=BTC-USDT");

        let params = Params::new()
            .set("symbol", "BTC-USDT")
            .set_opt("limit", Some(50u32));
        assert_eq!(params.get("limit"), Some("50"));
    }

    #[test]
    fn test_query_string_is_sorted_and_encoded() {
        let params = Params::new()
            .set("symbol", "BTC-USDT")
            .set("data", r#"[{"a":1}]"#)
            .set_bool("sync", true);
        let query = params.to_query_string().unwrap();
        assert_eq!(
            query,
            "data=%5B%7B%22a%22%3A1%7D%5D&symbol=BTC-USDT&sync=true"
        );
    }
}
