use crate::error::{RebateError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads typed records (rebates, products, calculation requests) from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating short rows so that
/// trailing optional columns may be left out.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RebateError::from))
    }

    /// Reads every record, failing on the first malformed row.
    pub fn read_all<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        self.records().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculation::CalculationRequest;
    use crate::domain::incentive::IncentiveType;
    use crate::domain::product::Product;
    use crate::domain::rebate::Rebate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_rebates() {
        let data = "identifier, incentive, amount, percentage\n\
                    R1, fixed_cash_amount, 100, \n\
                    R2, fixed_rate_rebate, , 0.05\n\
                    R3, amount_per_unit, 5";
        let rebates: Vec<Rebate> = RecordReader::new(data.as_bytes()).read_all().unwrap();

        assert_eq!(rebates.len(), 3);
        assert_eq!(rebates[0].incentive, IncentiveType::FixedCashAmount);
        assert_eq!(rebates[0].amount, dec!(100));
        assert_eq!(rebates[0].percentage, Decimal::ZERO);
        assert_eq!(rebates[1].percentage, dec!(0.05));
        assert_eq!(rebates[1].amount, Decimal::ZERO);
        assert_eq!(rebates[2].percentage, Decimal::ZERO);
    }

    #[test]
    fn test_read_products() {
        let data = "identifier, price, supported_incentives\n\
                    P1, 75, amount_per_unit|fixed_cash_amount\n\
                    P2, 10, ";
        let products: Vec<Product> = RecordReader::new(data.as_bytes()).read_all().unwrap();

        assert!(products[0].supports(IncentiveType::AmountPerUnit));
        assert!(products[0].supports(IncentiveType::FixedCashAmount));
        assert!(!products[0].supports(IncentiveType::FixedRateRebate));
        assert!(products[1].supported_incentives.is_empty());
    }

    #[test]
    fn test_read_requests_stream() {
        let data = "rebate, product, volume\nR1, P1, 10\nR2, P2, not_a_number\nR3, P3, 0.5";
        let results: Vec<Result<CalculationRequest>> =
            RecordReader::new(data.as_bytes()).records().collect();

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.rebate_identifier, "R1");
        assert_eq!(first.volume, dec!(10));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().volume, dec!(0.5));
    }

    #[test]
    fn test_unknown_incentive_is_rejected() {
        let data = "identifier, incentive, amount, percentage\nR1, bogus, 1, 0";
        let result: Result<Vec<Rebate>> = RecordReader::new(data.as_bytes()).read_all();
        assert!(matches!(result, Err(RebateError::CsvError(_))));
    }
}
