//! State of the interactive catalog and everything a key press can do to it.
//!
//! All database calls happen synchronously on the thread handling the key, after which the table
//! is reloaded so it always shows what is stored.
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog::error::CatalogError;
use catalog::export::ExportFormat;
use catalog::types::Product;
use catalog::{ApplicationRuntime, Operation, OperationResult};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use ratatui::widgets::TableState;

use crate::input::{FormInputs, FIELD_COUNT};

/// Which part of the main screen receives the keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Field(usize),
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Field(i) if i + 1 < FIELD_COUNT => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Table,
            Focus::Table => Focus::Field(0),
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Field(0) => Focus::Table,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Table => Focus::Field(FIELD_COUNT - 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EditDialog {
    pub id: i64,
    pub inputs: FormInputs,
    pub focused: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportPrompt {
    pub path: String,
    /// Set once the user was told the target exists, a second Enter replaces it
    pub overwrite: Option<PathBuf>,
}

impl ExportPrompt {
    pub(crate) fn new(path: String) -> Self {
        ExportPrompt {
            path,
            overwrite: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Modal {
    Edit(EditDialog),
    Export(ExportPrompt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

pub(crate) struct App {
    runtime: ApplicationRuntime,
    pub(crate) inputs: FormInputs,
    pub(crate) focus: Focus,
    pub(crate) products: Vec<Product>,
    pub(crate) table_state: TableState,
    pub(crate) modal: Option<Modal>,
    pub(crate) notifications: VecDeque<Notification>,
    refresh_failing: bool,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(runtime: ApplicationRuntime) -> Self {
        let mut app = App {
            runtime,
            inputs: FormInputs::default(),
            focus: Focus::Field(0),
            products: Vec::new(),
            table_state: TableState::default(),
            modal: None,
            notifications: VecDeque::new(),
            refresh_failing: false,
            should_quit: false,
        };
        app.refresh();
        app
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.runtime.config().ui.refresh_interval_secs.max(1))
    }

    pub(crate) fn selected_product(&self) -> Option<&Product> {
        self.table_state
            .selected()
            .and_then(|index| self.products.get(index))
    }

    /// Reloads the table, keeping the selected product selected if it still exists.
    pub(crate) fn refresh(&mut self) {
        let selected_id = self.selected_product().map(|p| p.id);
        match self.runtime.product_service().list() {
            Ok(products) => {
                self.products = products;
                self.refresh_failing = false;
                self.select(selected_id);
            }
            Err(err) => {
                warn!("Unable to reload the product table: {err}");
                // Reported once until a reload succeeds again
                if !self.refresh_failing {
                    self.refresh_failing = true;
                    self.report_error(err);
                }
            }
        }
    }

    fn select(&mut self, id: Option<i64>) {
        let by_id = id.and_then(|id| self.products.iter().position(|p| p.id == id));
        let index = match (by_id, self.table_state.selected()) {
            _ if self.products.is_empty() => None,
            (Some(index), _) => Some(index),
            (None, Some(index)) => Some(index.min(self.products.len() - 1)),
            (None, None) => Some(0),
        };
        self.table_state.select(index);
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        // Any key dismisses the notification in front
        if self.notifications.pop_front().is_some() {
            return;
        }
        match self.modal.take() {
            Some(Modal::Edit(dialog)) => self.handle_edit_key(dialog, key),
            Some(Modal::Export(prompt)) => self.handle_export_key(prompt, key),
            None => self.handle_main_key(key),
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('x') {
            self.modal = Some(Modal::Export(ExportPrompt::new(
                self.runtime.config().export.default_path.clone(),
            )));
            return;
        }
        match (key.code, self.focus) {
            (KeyCode::Tab, focus) => self.focus = focus.next(),
            (KeyCode::BackTab, focus) => self.focus = focus.previous(),
            (KeyCode::Enter, Focus::Field(_)) => self.insert(),
            (_, Focus::Field(index)) => {
                self.inputs.handle_key(index, key);
            }
            (KeyCode::Up, Focus::Table) => self.move_selection(-1),
            (KeyCode::Down, Focus::Table) => self.move_selection(1),
            (KeyCode::Home, Focus::Table) if !self.products.is_empty() => {
                self.table_state.select(Some(0));
            }
            (KeyCode::End, Focus::Table) if !self.products.is_empty() => {
                self.table_state.select(Some(self.products.len() - 1));
            }
            (KeyCode::Char('e'), Focus::Table) => self.open_edit_dialog(),
            (KeyCode::Char('d') | KeyCode::Delete, Focus::Table) => self.delete_selected(),
            (KeyCode::Char('q') | KeyCode::Esc, Focus::Table) => self.should_quit = true,
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.products.is_empty() {
            return;
        }
        let last = self.products.len() - 1;
        let index = match self.table_state.selected() {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.table_state.select(Some(index));
    }

    fn insert(&mut self) {
        match self.runtime.execute(Operation::Insert(self.inputs.to_form())) {
            Ok(OperationResult::Inserted(product)) => {
                self.notify(
                    "Product inserted",
                    format!(
                        "'{}' stored with id {} and qualification {}",
                        product.name, product.id, product.qualification
                    ),
                );
                self.refresh();
                self.select(Some(product.id));
            }
            Ok(other) => warn!("Unexpected result of insert {other:?}"),
            Err(err) => self.report_error(err),
        }
    }

    fn open_edit_dialog(&mut self) {
        let dialog = self.selected_product().map(|product| EditDialog {
            id: product.id,
            inputs: FormInputs::from_product(product),
            focused: 0,
        });
        match dialog {
            Some(dialog) => {
                debug!("Editing product {}", dialog.id);
                self.modal = Some(Modal::Edit(dialog));
            }
            None => self.push(Severity::Error, "No product selected", "Select a product to edit"),
        }
    }

    fn handle_edit_key(&mut self, mut dialog: EditDialog, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                debug!("Edit of product {} cancelled", dialog.id);
            }
            KeyCode::Enter => {
                let operation = Operation::Edit {
                    id: dialog.id,
                    form: dialog.inputs.to_form(),
                };
                match self.runtime.execute(operation) {
                    Ok(OperationResult::Edited(product)) => {
                        self.notify(
                            "Product updated",
                            format!(
                                "'{}' (id {}) now has qualification {}",
                                product.name, product.id, product.qualification
                            ),
                        );
                        self.refresh();
                    }
                    Ok(other) => warn!("Unexpected result of edit {other:?}"),
                    Err(err) => {
                        let keep_open = err.is_validation_error();
                        self.report_error(err);
                        if keep_open {
                            self.modal = Some(Modal::Edit(dialog));
                        } else {
                            self.refresh();
                        }
                    }
                }
            }
            KeyCode::Tab => {
                dialog.focused = (dialog.focused + 1) % FIELD_COUNT;
                self.modal = Some(Modal::Edit(dialog));
            }
            KeyCode::BackTab => {
                dialog.focused = (dialog.focused + FIELD_COUNT - 1) % FIELD_COUNT;
                self.modal = Some(Modal::Edit(dialog));
            }
            _ => {
                dialog.inputs.handle_key(dialog.focused, key);
                self.modal = Some(Modal::Edit(dialog));
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_product().map(|p| p.id) else {
            self.push(Severity::Error, "No product selected", "Select a product to delete");
            return;
        };
        match self.runtime.execute(Operation::Delete(id)) {
            Ok(_) => self.notify("Product deleted", format!("Product {id} was deleted")),
            Err(err) => self.report_error(err),
        }
        self.refresh();
    }

    fn handle_export_key(&mut self, mut prompt: ExportPrompt, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter if prompt.path.trim().is_empty() => {
                self.push(Severity::Error, "Export error", "Please enter a file name");
                self.modal = Some(Modal::Export(prompt));
            }
            KeyCode::Enter => {
                let target = match ExportFormat::for_path(Path::new(prompt.path.trim())) {
                    Ok((_, target)) => target,
                    Err(err) => {
                        self.report_error(err);
                        self.modal = Some(Modal::Export(prompt));
                        return;
                    }
                };
                if target.exists() && prompt.overwrite.as_ref() != Some(&target) {
                    debug!("Asking before replacing {}", target.to_string_lossy());
                    prompt.overwrite = Some(target);
                    self.modal = Some(Modal::Export(prompt));
                    return;
                }
                self.export(prompt, target);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.path.push(c);
                prompt.overwrite = None;
                self.modal = Some(Modal::Export(prompt));
            }
            KeyCode::Backspace => {
                prompt.path.pop();
                prompt.overwrite = None;
                self.modal = Some(Modal::Export(prompt));
            }
            _ => self.modal = Some(Modal::Export(prompt)),
        }
    }

    fn export(&mut self, prompt: ExportPrompt, target: PathBuf) {
        match self.runtime.execute(Operation::Export(target)) {
            Ok(OperationResult::Exported(summary)) => self.notify(
                "Export complete",
                format!(
                    "{} products exported to {}",
                    summary.rows,
                    summary.path.to_string_lossy()
                ),
            ),
            Ok(other) => warn!("Unexpected result of export {other:?}"),
            Err(err) => {
                self.report_error(err);
                self.modal = Some(Modal::Export(prompt));
            }
        }
    }

    fn notify(&mut self, title: &str, message: String) {
        self.push(Severity::Info, title, &message);
    }

    fn push(&mut self, severity: Severity, title: &str, message: &str) {
        self.notifications.push_back(Notification {
            severity,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// Queues one notification per rejected input category, or a single one for other failures.
    fn report_error(&mut self, err: CatalogError) {
        match err {
            CatalogError::InvalidInput(invalid) => {
                for error in invalid.errors() {
                    self.push(Severity::Error, "Validation error", &error.to_string());
                }
            }
            CatalogError::Export { .. } | CatalogError::UnsupportedExportFormat(_) => {
                self.push(Severity::Error, "Export error", &err.to_string());
            }
            _ => self.push(Severity::Error, "Database error", &err.to_string()),
        }
    }
}
