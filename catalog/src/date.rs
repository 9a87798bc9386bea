use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::error;
use std::fmt::{Display, Formatter};

/// Format of a release date, both when entered and when stored
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Release date of a product, always a real calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    /// Parses a date supplied as `2024-05-26`.
    ///
    /// Only the ISO 8601 calendar format with a four digit year and two digit month and day
    /// is accepted. Leading and trailing white space is ignored.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the text is not in the `YYYY-MM-DD` format or does not
    /// name an existing day, i.e. `2023-02-29`.
    #[allow(clippy::missing_panics_doc)]
    pub fn parse(s: &str) -> Result<Self, Error> {
        lazy_static! {
            static ref DATE_EXPR: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        }
        let s = s.trim();
        if !DATE_EXPR.is_match(s) {
            return Err(Error::InvalidInput(s.to_string()));
        }
        NaiveDate::parse_from_str(s, RELEASE_DATE_FORMAT)
            .map(ReleaseDate)
            .map_err(|_| Error::InvalidInput(s.to_string()))
    }

    #[must_use]
    pub fn naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ReleaseDate {
    fn from(date: NaiveDate) -> Self {
        ReleaseDate(date)
    }
}

impl Display for ReleaseDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(RELEASE_DATE_FORMAT))
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    InvalidInput(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(s) => {
                write!(f, "Invalid date '{s}', use the format YYYY-MM-DD")
            }
        }
    }
}

impl error::Error for Error {}
