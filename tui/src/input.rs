//! The six text inputs shared by the product form and the edit dialog.
use catalog::form::{ProductForm, LABORATORY_LABEL, MANUAL_DATASHEET_LABEL, TRAINING_LABEL};
use catalog::types::Product;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(crate) const FIELD_COUNT: usize = 6;

pub(crate) const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "Product",
    "Sector",
    "Release (YYYY-MM-DD)",
    TRAINING_LABEL,
    MANUAL_DATASHEET_LABEL,
    LABORATORY_LABEL,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FormInputs {
    values: [String; FIELD_COUNT],
}

impl FormInputs {
    pub(crate) fn from_product(product: &Product) -> Self {
        ProductForm::from_product(product).into()
    }

    pub(crate) fn value(&self, index: usize) -> &str {
        &self.values[index]
    }

    /// Applies a key to the input at `index`. Returns `false` if the key does not edit text.
    pub(crate) fn handle_key(&mut self, index: usize, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.values[index].push(c);
                true
            }
            KeyCode::Backspace => {
                self.values[index].pop();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn to_form(&self) -> ProductForm {
        let [name, sector, released, training, manual_datasheet, laboratory] = self.values.clone();
        ProductForm {
            name,
            sector,
            released,
            training,
            manual_datasheet,
            laboratory,
        }
    }
}

impl From<ProductForm> for FormInputs {
    fn from(form: ProductForm) -> Self {
        FormInputs {
            values: [
                form.name,
                form.sector,
                form.released,
                form.training,
                form.manual_datasheet,
                form.laboratory,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut inputs = FormInputs::default();
        for c in "12x".chars() {
            assert!(inputs.handle_key(3, key(KeyCode::Char(c))));
        }
        assert!(inputs.handle_key(3, key(KeyCode::Backspace)));
        assert_eq!(inputs.value(3), "12");
        assert_eq!(inputs.to_form().training, "12");
        assert_eq!(inputs.value(0), "");
    }

    #[test]
    fn test_control_keys_do_not_edit() {
        let mut inputs = FormInputs::default();
        assert!(!inputs.handle_key(
            0,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)
        ));
        assert!(!inputs.handle_key(0, key(KeyCode::Enter)));
        assert!(inputs.handle_key(
            0,
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)
        ));
        assert_eq!(inputs.value(0), "A");
    }

    #[test]
    fn test_form_conversion_keeps_field_order() {
        let form = ProductForm {
            name: "Camera".to_string(),
            sector: "Video".to_string(),
            released: "2024-01-01".to_string(),
            training: "1".to_string(),
            manual_datasheet: "2".to_string(),
            laboratory: "3".to_string(),
        };
        let inputs = FormInputs::from(form.clone());
        assert_eq!(inputs.value(2), "2024-01-01");
        assert_eq!(inputs.value(5), "3");
        assert_eq!(inputs.to_form(), form);
    }
}
