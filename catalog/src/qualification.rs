//! The qualification score of a product.
//!
//! The score is the weighted average of three sub-scores, rounded to the nearest integer:
//!
//! ```text
//! round((training * 3 + manual_datasheet * 1 + laboratory * 2) / 6)
//! ```
//!
//! Ties are rounded half to even (`0.5 -> 0`, `1.5 -> 2`, `2.5 -> 2`). The computation is done on
//! the exact rational value with integer arithmetic, so there is no floating point error and
//! no input triple can overflow.
use std::cmp::Ordering;

pub const TRAINING_WEIGHT: i64 = 3;
pub const MANUAL_DATASHEET_WEIGHT: i64 = 1;
pub const LABORATORY_WEIGHT: i64 = 2;
pub const TOTAL_WEIGHT: i64 = TRAINING_WEIGHT + MANUAL_DATASHEET_WEIGHT + LABORATORY_WEIGHT;

/// Computes the qualification score from the three sub-scores.
///
/// The inputs are not range checked, negative values and zero are accepted as is.
#[must_use]
pub fn qualification(training: i64, manual_datasheet: i64, laboratory: i64) -> i64 {
    let weighted = i128::from(training) * i128::from(TRAINING_WEIGHT)
        + i128::from(manual_datasheet) * i128::from(MANUAL_DATASHEET_WEIGHT)
        + i128::from(laboratory) * i128::from(LABORATORY_WEIGHT);

    let rounded = round_half_to_even(weighted, i128::from(TOTAL_WEIGHT));

    // A weighted average never leaves the range of its inputs
    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

/// Divides `numerator` by the positive `denominator`, rounding ties to the even neighbour.
fn round_half_to_even(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);

    match (remainder * 2).cmp(&denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => {
            if quotient.rem_euclid(2) == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    }
}
