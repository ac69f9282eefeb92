//! Custom serde helpers for BingX's wire formats.
//!
//! Prices and quantities must round-trip exactly: BingX expects plain decimal
//! strings with no exponent and no padding zeros, so `Decimal` values are
//! normalized before serialization.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize/deserialize a `Decimal` as a trailing-zero-free decimal string.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Serialize;
/// use bingx_api_client::types::serde_helpers::decimal_plain;
///
/// #[derive(Serialize)]
/// struct Request {
///     #[serde(with = "decimal_plain")]
///     quantity: Decimal,
/// }
///
/// let request = Request {
///     quantity: "100.0".parse().unwrap(),
/// };
///
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"quantity":"100"}"#);
/// ```
pub mod decimal_plain {
    use super::*;

    /// Serialize a Decimal as a normalized decimal string.
    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&plain_string(value))
    }

    /// Deserialize a Decimal from a decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Decimal::from_str(&s).map_err(de::Error::custom)
    }
}

/// Like [`decimal_plain`] but for `Option<Decimal>` fields.
///
/// Combine with `skip_serializing_if = "Option::is_none"` so that unset
/// optional parameters are omitted from the wire entirely.
pub mod decimal_plain_opt {
    use super::*;

    /// Serialize a present Decimal as a normalized decimal string.
    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&plain_string(v)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional Decimal from a decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        s.map(|s| Decimal::from_str(&s).map_err(de::Error::custom))
            .transpose()
    }
}

/// Format a `Decimal` as a plain decimal string: no exponent, no trailing
/// zeros, no rounding. `0.1` formats as `"0.1"` and `100.0` as `"100"`.
pub fn plain_string(value: &Decimal) -> String {
    value.normalize().to_string()
}

/// Helper for decimal fields that BingX returns as `""` when unset.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use bingx_api_client::types::serde_helpers::empty_decimal_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_decimal_as_none::deserialize", default)]
///     stop_price: Option<Decimal>,
/// }
///
/// let json = r#"{"stop_price":""}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.stop_price.is_none());
///
/// let json = r#"{"stop_price":"123.4"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert_eq!(response.stop_price.unwrap(), "123.4".parse().unwrap());
/// ```
pub mod empty_decimal_as_none {
    use std::fmt;

    use super::*;

    /// Deserialize a decimal string, treating `""` and null as None.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EmptyDecimalVisitor;

        impl<'de> de::Visitor<'de> for EmptyDecimalVisitor {
            type Value = Option<Decimal>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string, empty string, or null")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v.is_empty() {
                    return Ok(None);
                }
                v.parse().map(Some).map_err(de::Error::custom)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }
        }

        deserializer.deserialize_any(EmptyDecimalVisitor)
    }
}
