use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

/// A contact's date of birth, parsed strictly from `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Strict parse: four-digit year, zero-padded month and day, `-`
    /// separators, and a real calendar date. `chrono`'s `%m`/`%d` accept
    /// unpadded numbers, so the shape is checked before the date is.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let bytes = raw.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
        if !shape_ok {
            return Err(CoreError::InvalidDate(raw.to_string()));
        }

        let year: i32 = raw[0..4]
            .parse()
            .map_err(|_| CoreError::InvalidDate(raw.to_string()))?;
        let month: u32 = raw[5..7]
            .parse()
            .map_err(|_| CoreError::InvalidDate(raw.to_string()))?;
        let day: u32 = raw[8..10]
            .parse()
            .map_err(|_| CoreError::InvalidDate(raw.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
