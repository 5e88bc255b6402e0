#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const ITEMS_HEADER: &str = "id,name,price,weight,category,quantity";
pub const DISCOUNTS_HEADER: &str = "kind,value,category,min_amount";
pub const TRANSACTIONS_HEADER: &str = "id,amount,currency,created_at";

/// Writes `header` followed by `rows` into a fresh temporary CSV file.
pub fn csv_file(header: &str, rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{header}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// A transactions file with `rows` deposits of 1.0 in `currency`.
pub fn generate_transactions(currency: &str, rows: usize) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file.reopen()?);

    wtr.write_record(["id", "amount", "currency"])?;
    for i in 1..=rows {
        let id = format!("tx-{i}");
        wtr.write_record([id.as_str(), "1.0", currency])?;
    }

    wtr.flush()?;
    Ok(file)
}
