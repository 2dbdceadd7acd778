//! Foreign-key selection: pure choice handling plus an interactive adapter
//!
//! Choice building, label rendering, and id validation are plain functions
//! so non-interactive callers (flags, tests) resolve ids without a
//! terminal. Only [`pick`] touches dialoguer.

use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use miette::{IntoDiagnostic, Result};

use crate::store::Store;

/// One selectable row, shown as `"<id> - <label>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: i64,
    pub label: String,
}

/// Build the choice list from (id, label) rows, sorted by id ascending.
pub fn sorted_choices(rows: Vec<(i64, String)>) -> Vec<Choice> {
    let mut choices: Vec<Choice> = rows
        .into_iter()
        .map(|(id, label)| Choice { id, label })
        .collect();
    choices.sort_by_key(|c| c.id);
    choices
}

/// Menu rows: one per choice plus a trailing Cancel entry.
pub fn menu_labels(choices: &[Choice]) -> Vec<String> {
    let mut labels: Vec<String> = choices
        .iter()
        .map(|c| format!("{} - {}", c.id, c.label))
        .collect();
    labels.push("Cancel".to_string());
    labels
}

/// Map a menu index back to an id; the trailing Cancel row maps to None.
pub fn resolve(choices: &[Choice], index: usize) -> Option<i64> {
    choices.get(index).map(|c| c.id)
}

/// Check an id passed as a flag against the eligible rows.
pub fn validate(choices: &[Choice], id: i64) -> Option<i64> {
    choices.iter().find(|c| c.id == id).map(|c| c.id)
}

/// Interactive selection. Returns None when the user cancels.
pub fn pick(prompt: &str, choices: &[Choice]) -> Result<Option<i64>> {
    let labels = menu_labels(choices);
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    Ok(resolve(choices, index))
}

/// Select a supplier by flag or prompt. Returns None when the operation
/// should be aborted (no suppliers, unknown id, or cancel).
pub fn select_supplier(store: &Store, flag: Option<i64>) -> Result<Option<i64>> {
    let rows = store
        .supplier_choices()
        .map_err(|e| miette::miette!("{}", e))?;
    let choices = sorted_choices(rows);
    if choices.is_empty() {
        println!("No suppliers available. Add a supplier first.");
        return Ok(None);
    }
    if let Some(id) = flag {
        if validate(&choices, id).is_none() {
            println!("{} No supplier with id {}.", style("✗").red(), id);
            return Ok(None);
        }
        return Ok(Some(id));
    }
    pick("Select supplier (ID - Name)", &choices)
}

/// Select an order by flag or prompt. Returns None when the operation
/// should be aborted (no orders, unknown id, or cancel).
pub fn select_order(store: &Store, flag: Option<i64>) -> Result<Option<i64>> {
    let rows = store
        .order_choices()
        .map_err(|e| miette::miette!("{}", e))?;
    let choices = sorted_choices(rows);
    if choices.is_empty() {
        println!("No orders available. Create an order first.");
        return Ok(None);
    }
    if let Some(id) = flag {
        if validate(&choices, id).is_none() {
            println!("{} No order with id {}.", style("✗").red(), id);
            return Ok(None);
        }
        return Ok(Some(id));
    }
    pick("Select order (ID - Customer)", &choices)
}
