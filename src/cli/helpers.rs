//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::error::StoreError;
use crate::store::Store;

/// Resolve the configured database path and open the store for one
/// operation. Open failures are fatal and reported through miette.
pub fn open_store(global: &GlobalOpts) -> Result<Store> {
    let config = Config::load();
    let db = config.db_file(global.db.as_deref());
    Store::open(&db).map_err(|e| miette::miette!("{}", e))
}

/// Use the flag value when present, otherwise prompt for it.
pub fn text_arg(flag: Option<String>, prompt: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()
            .into_diagnostic(),
    }
}

/// Like [`text_arg`] but for monetary amounts.
pub fn amount_arg(flag: Option<f64>, prompt: &str) -> Result<f64> {
    match flag {
        Some(value) => Ok(value),
        None => Input::<f64>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()
            .into_diagnostic(),
    }
}

/// Like [`text_arg`] but for record ids.
pub fn id_arg(flag: Option<i64>, prompt: &str) -> Result<i64> {
    match flag {
        Some(value) => Ok(value),
        None => Input::<i64>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()
            .into_diagnostic(),
    }
}

/// Print the coarse failure line for an operation, with the classified
/// store error dimmed beneath. The process keeps its zero exit status;
/// per-statement failures never abort a session.
pub fn report_failure(what: &str, err: &StoreError) {
    println!("{} {}", style("✗").red(), what);
    println!("   {}", style(err).dim());
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_text_arg_prefers_flag() {
        let value = text_arg(Some("ABC Liquors".to_string()), "Supplier name").unwrap();
        assert_eq!(value, "ABC Liquors");
    }

    #[test]
    fn test_amount_and_id_args_prefer_flags() {
        assert_eq!(amount_arg(Some(500.0), "Total amount").unwrap(), 500.0);
        assert_eq!(id_arg(Some(3), "Order ID").unwrap(), 3);
    }
}
