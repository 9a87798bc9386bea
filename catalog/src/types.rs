use crate::date::ReleaseDate;
use crate::qualification;
use serde::{Deserialize, Serialize};

/// Column names of the `produtos` table, in declaration order.
/// The export header uses the same names in the same order.
pub const PRODUCT_COLUMNS: [&str; 8] = [
    "id",
    "produto",
    "setor",
    "lancamento",
    "qualificacao",
    "treinamento",
    "manual_datasheet",
    "laboratorio",
];

/// The three sub-scores a qualification is derived from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scores {
    pub training: i64,
    pub manual_datasheet: i64,
    pub laboratory: i64,
}

impl Scores {
    #[must_use]
    pub fn new(training: i64, manual_datasheet: i64, laboratory: i64) -> Self {
        Scores {
            training,
            manual_datasheet,
            laboratory,
        }
    }

    #[must_use]
    pub fn qualification(&self) -> i64 {
        qualification::qualification(self.training, self.manual_datasheet, self.laboratory)
    }
}

/// A validated submission from the product form.
///
/// This is the only input the repository accepts for inserts and updates, which is what
/// guarantees the stored qualification is always derived from the stored sub-scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub sector: String,
    pub released: ReleaseDate,
    pub scores: Scores,
}

/// A product as stored in the `produtos` table.
///
/// The serialized field names and their order are those of the table columns, see
/// [`PRODUCT_COLUMNS`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "produto")]
    pub name: String,
    #[serde(rename = "setor")]
    pub sector: String,
    /// Kept as text, this is what the column holds
    #[serde(rename = "lancamento")]
    pub released: String,
    #[serde(rename = "qualificacao")]
    pub qualification: i64,
    #[serde(rename = "treinamento")]
    pub training: i64,
    pub manual_datasheet: i64,
    #[serde(rename = "laboratorio")]
    pub laboratory: i64,
}

impl Product {
    /// The product `id` holds once `draft` has been written to it.
    #[must_use]
    pub fn from_draft(id: i64, draft: &ProductDraft) -> Self {
        Product {
            id,
            name: draft.name.clone(),
            sector: draft.sector.clone(),
            released: draft.released.to_string(),
            qualification: draft.scores.qualification(),
            training: draft.scores.training,
            manual_datasheet: draft.scores.manual_datasheet,
            laboratory: draft.scores.laboratory,
        }
    }

    #[must_use]
    pub fn scores(&self) -> Scores {
        Scores::new(self.training, self.manual_datasheet, self.laboratory)
    }

    /// The values of this product as text, one per column of [`PRODUCT_COLUMNS`]
    #[must_use]
    pub fn to_row(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.sector.clone(),
            self.released.clone(),
            self.qualification.to_string(),
            self.training.to_string(),
            self.manual_datasheet.to_string(),
            self.laboratory.to_string(),
        ]
    }
}
