use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes `rows` below `header` into a temporary CSV file.
pub fn csv_file(header: &str, rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", header)?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

pub fn requests_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    csv_file("rebate,product,volume", rows)
}

pub fn rebates_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    csv_file("identifier,incentive,amount,percentage", rows)
}

pub fn products_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    csv_file("identifier,price,supported_incentives", rows)
}
