//! Validation of the raw text a user types into the product form.
//!
//! A submission is all-or-nothing: either every numeric field and the release date parse, or no
//! [`ProductDraft`] is produced. Failures are reported once per category, numeric fields first.
use crate::date::{self, ReleaseDate};
use crate::types::{Product, ProductDraft, Scores};
use std::error;
use std::fmt::{Display, Formatter};

/// Labels of the numeric fields, as shown to the user
pub const TRAINING_LABEL: &str = "Training";
pub const MANUAL_DATASHEET_LABEL: &str = "Manual/Datasheet";
pub const LABORATORY_LABEL: &str = "Laboratory";

/// The six text inputs of the product form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub sector: String,
    pub released: String,
    pub training: String,
    pub manual_datasheet: String,
    pub laboratory: String,
}

/// A category of rejected input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more of the sub-scores is not an integer. Holds the labels of the offending fields.
    NonNumericScores(Vec<&'static str>),
    /// The release date is not a `YYYY-MM-DD` calendar date
    InvalidReleaseDate(date::Error),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::NonNumericScores(fields) => write!(
                f,
                "Please enter whole numbers for training, manual/datasheet and laboratory (invalid: {})",
                fields.join(", ")
            ),
            FormError::InvalidReleaseDate(e) => write!(f, "{e}"),
        }
    }
}

/// Every reason a submission was rejected, at most one per [`FormError`] category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidProductForm {
    errors: Vec<FormError>,
}

impl InvalidProductForm {
    #[must_use]
    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }
}

impl Display for InvalidProductForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl error::Error for InvalidProductForm {}

impl ProductForm {
    /// Pre-fills a form with the values of a stored product, as the edit dialog does
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            name: product.name.clone(),
            sector: product.sector.clone(),
            released: product.released.clone(),
            training: product.training.to_string(),
            manual_datasheet: product.manual_datasheet.to_string(),
            laboratory: product.laboratory.to_string(),
        }
    }

    /// Validates the form and converts it into a `ProductDraft`.
    ///
    /// # Errors
    /// Returns `InvalidProductForm` holding a `FormError::NonNumericScores` if any of the three
    /// sub-scores is not an integer, and a `FormError::InvalidReleaseDate` if the release date is
    /// not in the `YYYY-MM-DD` format.
    pub fn validate(&self) -> Result<ProductDraft, InvalidProductForm> {
        let mut errors = Vec::new();

        let training = parse_score(&self.training);
        let manual_datasheet = parse_score(&self.manual_datasheet);
        let laboratory = parse_score(&self.laboratory);

        let invalid_fields: Vec<&'static str> = [
            (TRAINING_LABEL, training.is_none()),
            (MANUAL_DATASHEET_LABEL, manual_datasheet.is_none()),
            (LABORATORY_LABEL, laboratory.is_none()),
        ]
        .into_iter()
        .filter_map(|(label, invalid)| invalid.then_some(label))
        .collect();
        if !invalid_fields.is_empty() {
            errors.push(FormError::NonNumericScores(invalid_fields));
        }

        let released = ReleaseDate::parse(&self.released);
        if let Err(e) = &released {
            errors.push(FormError::InvalidReleaseDate(e.clone()));
        }

        match (training, manual_datasheet, laboratory, released) {
            (Some(training), Some(manual_datasheet), Some(laboratory), Ok(released)) => {
                Ok(ProductDraft {
                    name: self.name.clone(),
                    sector: self.sector.clone(),
                    released,
                    scores: Scores::new(training, manual_datasheet, laboratory),
                })
            }
            _ => Err(InvalidProductForm { errors }),
        }
    }
}

fn parse_score(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}
