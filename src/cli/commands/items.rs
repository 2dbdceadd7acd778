//! `lqs items` command - Item management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{amount_arg, id_arg, open_store, report_failure, text_arg, truncate_str};
use crate::cli::{select, GlobalOpts};
use crate::entities::item::{Item, ItemFields};

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Add a new item (prompts for a supplier)
    Add(AddArgs),

    /// List all items
    List,

    /// Search items by name
    Search(SearchArgs),

    /// Update an item (prompts for a supplier)
    Update(UpdateArgs),

    /// Delete an item
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Name of the item
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Price of the item
    #[arg(long)]
    pub price: Option<f64>,

    /// Supplier id (skips the interactive selection)
    #[arg(long)]
    pub supplier_id: Option<i64>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Keyword to match against the item name
    pub keyword: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// ID of the item to update
    #[arg(long)]
    pub item_id: Option<i64>,

    /// Name of the item
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Price of the item
    #[arg(long)]
    pub price: Option<f64>,

    /// Supplier id (skips the interactive selection)
    #[arg(long)]
    pub supplier_id: Option<i64>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// ID of the item to delete
    #[arg(long)]
    pub item_id: Option<i64>,
}

/// Run an item subcommand
pub fn run(cmd: ItemCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ItemCommands::Add(args) => run_add(args, global),
        ItemCommands::List => run_list(global),
        ItemCommands::Search(args) => run_search(args, global),
        ItemCommands::Update(args) => run_update(args, global),
        ItemCommands::Delete(args) => run_delete(args, global),
    }
}

fn print_table(items: &[Item]) {
    println!(
        "{} {} {} {}",
        format!("{:<6}", style("ID").bold()),
        format!("{:<25}", style("NAME").bold()),
        format!("{:<10}", style("PRICE").bold()),
        format!("{:<9}", style("SUPPLIER").bold()),
    );
    println!("{}", "-".repeat(54));

    for item in items {
        let price = item
            .price
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        let supplier = item
            .supplier_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<25} {:<10} {:<9}",
            item.id,
            truncate_str(&item.name, 23),
            price,
            supplier,
        );
    }

    println!();
    println!("{} item(s) found.", style(items.len()).cyan());
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let name = text_arg(args.name, "Item name")?;
    let price = amount_arg(args.price, "Item price")?;

    let Some(supplier_id) = select::select_supplier(&store, args.supplier_id)? else {
        return Ok(());
    };

    let fields = ItemFields {
        name,
        price,
        supplier_id,
    };

    match store.add_item(&fields) {
        Ok(id) => println!(
            "{} Added item {} {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan(),
            style(&fields.name).yellow()
        ),
        Err(e) => report_failure("Failed to add item.", &e),
    }

    Ok(())
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.list_items() {
        Ok(items) if items.is_empty() => println!("No items found."),
        Ok(items) => print_table(&items),
        Err(e) => report_failure("Failed to list items.", &e),
    }

    Ok(())
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.search_items(&args.keyword) {
        Ok(items) if items.is_empty() => println!("No items found."),
        Ok(items) => print_table(&items),
        Err(e) => report_failure("Failed to search items.", &e),
    }

    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.item_id, "Item ID")?;
    let name = text_arg(args.name, "Item name")?;
    let price = amount_arg(args.price, "Item price")?;

    // The owning supplier is re-selected on every update, like creation.
    let Some(supplier_id) = select::select_supplier(&store, args.supplier_id)? else {
        return Ok(());
    };

    let fields = ItemFields {
        name,
        price,
        supplier_id,
    };

    match store.update_item(id, &fields) {
        Ok(_) => println!(
            "{} Updated item {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to update item {}.", id), &e),
    }

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.item_id, "Item ID")?;

    match store.delete_item(id) {
        Ok(_) => println!(
            "{} Deleted item {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to delete item {}.", id), &e),
    }

    Ok(())
}
