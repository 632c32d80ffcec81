//! Decimal field readers for CSV and JSON records.
//!
//! Values are parsed from their text form so they stay exact across the whole
//! `Decimal` range instead of passing through a float.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

fn parse<E: serde::de::Error>(text: &str) -> Result<Decimal, E> {
    Decimal::from_str(text.trim()).map_err(E::custom)
}

pub(crate) fn exact<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text)
}

/// Like [`exact`], but blank cells mean zero.
pub(crate) fn empty_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => parse(&text),
        _ => Ok(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde::de::IntoDeserializer;
    use serde::de::value::{Error, StrDeserializer};

    fn read(text: &str) -> Result<Decimal, Error> {
        let deserializer: StrDeserializer<'_, Error> = text.into_deserializer();
        exact(deserializer)
    }

    #[test]
    fn test_full_range_is_exact() {
        assert_eq!(read("79228162514264337593543950335").unwrap(), Decimal::MAX);
        assert_eq!(read("0.0001").unwrap(), dec!(0.0001));
        assert_eq!(read("1.50").unwrap().to_string(), "1.50");
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert!(read("79228162514264337593543950336").is_err());
        assert!(read("not_a_number").is_err());
        assert!(read("").is_err());
    }
}
