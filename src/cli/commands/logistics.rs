//! `lqs logistics` command - Logistics entry management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{id_arg, open_store, report_failure, text_arg, truncate_str};
use crate::cli::{select, GlobalOpts};
use crate::entities::logistics::{LogisticsEntry, LogisticsFields};

#[derive(Subcommand, Debug)]
pub enum LogisticsCommands {
    /// Record a shipment (prompts for an order and a supplier)
    Record(RecordArgs),

    /// List all logistics entries
    List,

    /// Search logistics entries by status
    Search(SearchArgs),

    /// Update a logistics entry's status
    Update(UpdateArgs),

    /// Delete a logistics entry
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct RecordArgs {
    /// Date of dispatch
    #[arg(long)]
    pub dispatch_date: Option<String>,

    /// Date of arrival
    #[arg(long)]
    pub arrival_date: Option<String>,

    /// Shipment status text
    #[arg(long)]
    pub status: Option<String>,

    /// Order id (skips the interactive selection)
    #[arg(long)]
    pub order_id: Option<i64>,

    /// Supplier id (skips the interactive selection)
    #[arg(long)]
    pub supplier_id: Option<i64>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Keyword to match against the status text
    pub keyword: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// ID of the logistics entry to update
    #[arg(long)]
    pub logistics_id: Option<i64>,

    /// New status text
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// ID of the logistics entry to delete
    #[arg(long)]
    pub logistics_id: Option<i64>,
}

/// Run a logistics subcommand
pub fn run(cmd: LogisticsCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        LogisticsCommands::Record(args) => run_record(args, global),
        LogisticsCommands::List => run_list(global),
        LogisticsCommands::Search(args) => run_search(args, global),
        LogisticsCommands::Update(args) => run_update(args, global),
        LogisticsCommands::Delete(args) => run_delete(args, global),
    }
}

fn print_table(entries: &[LogisticsEntry]) {
    println!(
        "{} {} {} {} {} {}",
        format!("{:<6}", style("ID").bold()),
        format!("{:<7}", style("ORDER").bold()),
        format!("{:<9}", style("SUPPLIER").bold()),
        format!("{:<12}", style("DISPATCH").bold()),
        format!("{:<12}", style("ARRIVAL").bold()),
        format!("{:<15}", style("STATUS").bold()),
    );
    println!("{}", "-".repeat(66));

    for entry in entries {
        let order = entry
            .order_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let supplier = entry
            .supplier_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<7} {:<9} {:<12} {:<12} {:<15}",
            entry.id,
            order,
            supplier,
            truncate_str(entry.dispatch_date.as_deref().unwrap_or("-"), 10),
            truncate_str(entry.arrival_date.as_deref().unwrap_or("-"), 10),
            truncate_str(entry.status.as_deref().unwrap_or("-"), 13),
        );
    }

    println!();
    println!("{} logistics entr(ies) found.", style(entries.len()).cyan());
}

fn run_record(args: RecordArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let dispatch_date = text_arg(args.dispatch_date, "Dispatch date")?;
    let arrival_date = text_arg(args.arrival_date, "Arrival date")?;
    let status = text_arg(args.status, "Status")?;

    let Some(order_id) = select::select_order(&store, args.order_id)? else {
        return Ok(());
    };
    let Some(supplier_id) = select::select_supplier(&store, args.supplier_id)? else {
        return Ok(());
    };

    let fields = LogisticsFields {
        order_id,
        supplier_id,
        dispatch_date,
        arrival_date,
        status,
    };

    match store.record_logistics(&fields) {
        Ok(id) => println!(
            "{} Recorded logistics entry {} for order {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan(),
            style(format!("#{}", order_id)).cyan()
        ),
        Err(e) => report_failure("Failed to record logistics entry.", &e),
    }

    Ok(())
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.list_logistics() {
        Ok(entries) if entries.is_empty() => println!("No logistics entries found."),
        Ok(entries) => print_table(&entries),
        Err(e) => report_failure("Failed to list logistics entries.", &e),
    }

    Ok(())
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.search_logistics(&args.keyword) {
        Ok(entries) if entries.is_empty() => println!("No logistics entries found."),
        Ok(entries) => print_table(&entries),
        Err(e) => report_failure("Failed to search logistics entries.", &e),
    }

    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.logistics_id, "Logistics ID")?;
    let status = text_arg(args.status, "Status")?;

    match store.update_logistics_status(id, &status) {
        Ok(_) => println!(
            "{} Updated logistics entry {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to update logistics entry {}.", id), &e),
    }

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.logistics_id, "Logistics ID")?;

    match store.delete_logistics(id) {
        Ok(_) => println!(
            "{} Deleted logistics entry {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to delete logistics entry {}.", id), &e),
    }

    Ok(())
}
