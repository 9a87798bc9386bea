// catalog/tests/test_helpers/fixtures.rs

use catalog::form::ProductForm;

/// Constants for test data
pub const TEST_PRODUCT_NAME: &str = "IP camera VIP 1230";
pub const TEST_SECTOR: &str = "Video surveillance";
pub const TEST_RELEASE_DATE: &str = "2024-03-18";

/// Creates a valid form with the given sub-scores
pub fn product_form(training: i64, manual_datasheet: i64, laboratory: i64) -> ProductForm {
    ProductForm {
        name: TEST_PRODUCT_NAME.to_string(),
        sector: TEST_SECTOR.to_string(),
        released: TEST_RELEASE_DATE.to_string(),
        training: training.to_string(),
        manual_datasheet: manual_datasheet.to_string(),
        laboratory: laboratory.to_string(),
    }
}

/// Creates a set of valid forms, one per product
pub fn product_forms() -> Vec<ProductForm> {
    vec![
        ProductForm {
            name: "Alarm panel AMT 4010".to_string(),
            sector: "Intrusion".to_string(),
            ..product_form(10, 10, 10)
        },
        ProductForm {
            name: "Switch S1108".to_string(),
            sector: "Networking".to_string(),
            ..product_form(10, 0, 0)
        },
        ProductForm {
            name: "Video door phone".to_string(),
            sector: "Access control".to_string(),
            ..product_form(0, 0, 10)
        },
    ]
}
