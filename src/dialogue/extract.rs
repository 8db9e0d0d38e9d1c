//! Slot value extraction from free text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"\d+(?:,\d+)*(?:\.\d+)?").unwrap();
    static ref INTEGER: Regex = Regex::new(r"\d+").unwrap();
    static ref AMOUNT: Regex = Regex::new(r"₹?(\d+(?:,\d+)*)").unwrap();
}

/// First non-negative decimal in the text. Thousands separators are dropped.
pub fn first_decimal(text: &str) -> Option<f64> {
    let found = DECIMAL.find(text)?;
    found.as_str().replace(',', "").parse().ok()
}

/// First run of digits.
pub fn first_integer(text: &str) -> Option<i64> {
    INTEGER.find(text)?.as_str().parse().ok()
}

/// First currency amount, tolerating a leading ₹ and comma grouping.
pub fn first_amount(text: &str) -> Option<i64> {
    let captures = AMOUNT.captures(text)?;
    captures.get(1)?.as_str().replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_decimal() {
        assert_eq!(first_decimal("My monthly income is ₹75,000"), Some(75000.0));
        assert_eq!(first_decimal("I earn 80000 per month"), Some(80000.0));
        assert_eq!(first_decimal("about 1.2 lakhs"), Some(1.2));
        assert_eq!(first_decimal("0"), Some(0.0));
        assert_eq!(first_decimal("50000 salary and 5000 rent"), Some(50000.0));
        assert_eq!(first_decimal("-3000"), Some(3000.0));
        assert_eq!(first_decimal("no idea"), None);
        assert_eq!(first_decimal(""), None);
    }

    #[test]
    fn test_first_integer() {
        assert_eq!(first_integer("She is 8"), Some(8));
        assert_eq!(first_integer("5 years old"), Some(5));
        assert_eq!(first_integer("3.5 years"), Some(3));
        assert_eq!(first_integer("just born"), None);
    }

    #[test]
    fn test_first_amount() {
        assert_eq!(first_amount("₹3000"), Some(3000));
        assert_eq!(first_amount("I can invest ₹3,000 monthly"), Some(3000));
        assert_eq!(first_amount("around 1,50,000"), Some(150000));
        assert_eq!(first_amount("5000 rupees"), Some(5000));
        assert_eq!(first_amount("not sure yet"), None);
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        assert_eq!(first_integer("99999999999999999999999"), None);
    }
}
