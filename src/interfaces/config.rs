use crate::domain::region::Region;
use crate::error::{PricingError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a region definition such as
/// `{"code": "MSK", "tax_rate": "0.20", "shipping_rate": "300"}`.
pub fn read_region<R: Read>(source: R) -> Result<Region> {
    let region: Region = serde_json::from_reader(source)?;
    if region.code.trim().is_empty() {
        return Err(PricingError::ValidationError(
            "Region code must not be empty".to_string(),
        ));
    }
    Ok(region)
}

pub fn load_region(path: impl AsRef<Path>) -> Result<Region> {
    let file = File::open(path)?;
    read_region(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_region_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"code": "SPB", "tax_rate": "0.1", "shipping_rate": "250.5"}}"#
        )
        .unwrap();

        let region = load_region(file.path()).unwrap();
        assert_eq!(region.code, "SPB");
        assert_eq!(region.tax_rate, dec!(0.1));
        assert_eq!(region.shipping_rate, Money::new(dec!(250.5)));
    }

    #[test]
    fn test_missing_field() {
        let result = read_region(r#"{"code": "SPB", "tax_rate": 0.1}"#.as_bytes());
        assert!(matches!(result, Err(PricingError::JsonError(_))));
    }

    #[test]
    fn test_blank_code() {
        let result =
            read_region(r#"{"code": " ", "tax_rate": 0.1, "shipping_rate": 1}"#.as_bytes());
        assert!(matches!(result, Err(PricingError::ValidationError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_region("does/not/exist.json");
        assert!(matches!(result, Err(PricingError::IoError(_))));
    }
}
