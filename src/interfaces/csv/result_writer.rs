use crate::domain::calculation::{CalculationRequest, CalculationResult};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    rebate: &'a str,
    product: &'a str,
    volume: Decimal,
    success: bool,
    amount: Decimal,
    error: &'a str,
}

/// Writes one CSV row per calculation: the request echoed back plus its outcome.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(
        &mut self,
        request: &CalculationRequest,
        result: &CalculationResult,
    ) -> Result<()> {
        self.writer.serialize(OutcomeRecord {
            rebate: &request.rebate_identifier,
            product: &request.product_identifier,
            volume: request.volume,
            success: result.is_success(),
            amount: result.amount(),
            error: result.error_message(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
