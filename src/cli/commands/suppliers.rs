//! `lqs suppliers` command - Supplier management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{id_arg, open_store, report_failure, text_arg, truncate_str};
use crate::cli::GlobalOpts;
use crate::entities::supplier::{Supplier, SupplierFields};

#[derive(Subcommand, Debug)]
pub enum SupplierCommands {
    /// Add a new supplier
    Add(AddArgs),

    /// List all suppliers
    List,

    /// Search suppliers by name or contact name
    Search(SearchArgs),

    /// Update a supplier
    Update(UpdateArgs),

    /// Delete a supplier
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Name of the supplier
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Name of the contact person
    #[arg(long)]
    pub contact_name: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub contact_phone: Option<String>,

    /// Address of the supplier
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Keyword to match against name and contact name
    pub keyword: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// ID of the supplier to update
    #[arg(long)]
    pub supplier_id: Option<i64>,

    /// Name of the supplier
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Name of the contact person
    #[arg(long)]
    pub contact_name: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub contact_phone: Option<String>,

    /// Address of the supplier
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// ID of the supplier to delete
    #[arg(long)]
    pub supplier_id: Option<i64>,
}

/// Run a supplier subcommand
pub fn run(cmd: SupplierCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SupplierCommands::Add(args) => run_add(args, global),
        SupplierCommands::List => run_list(global),
        SupplierCommands::Search(args) => run_search(args, global),
        SupplierCommands::Update(args) => run_update(args, global),
        SupplierCommands::Delete(args) => run_delete(args, global),
    }
}

/// Collect the full field set, prompting for anything not given as a flag.
fn collect_fields(
    name: Option<String>,
    contact_name: Option<String>,
    contact_phone: Option<String>,
    address: Option<String>,
) -> Result<SupplierFields> {
    Ok(SupplierFields {
        name: text_arg(name, "Supplier name")?,
        contact_name: text_arg(contact_name, "Contact name")?,
        contact_phone: text_arg(contact_phone, "Contact phone")?,
        address: text_arg(address, "Address")?,
    })
}

fn print_table(suppliers: &[Supplier]) {
    println!(
        "{} {} {} {} {}",
        format!("{:<6}", style("ID").bold()),
        format!("{:<25}", style("NAME").bold()),
        format!("{:<20}", style("CONTACT").bold()),
        format!("{:<15}", style("PHONE").bold()),
        format!("{:<25}", style("ADDRESS").bold()),
    );
    println!("{}", "-".repeat(95));

    for sup in suppliers {
        println!(
            "{:<6} {:<25} {:<20} {:<15} {:<25}",
            sup.id,
            truncate_str(&sup.name, 23),
            truncate_str(sup.contact_name.as_deref().unwrap_or("-"), 18),
            truncate_str(sup.contact_phone.as_deref().unwrap_or("-"), 13),
            truncate_str(sup.address.as_deref().unwrap_or("-"), 23),
        );
    }

    println!();
    println!("{} supplier(s) found.", style(suppliers.len()).cyan());
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let fields = collect_fields(args.name, args.contact_name, args.contact_phone, args.address)?;

    match store.add_supplier(&fields) {
        Ok(id) => println!(
            "{} Added supplier {} {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan(),
            style(&fields.name).yellow()
        ),
        Err(e) => report_failure("Failed to add supplier.", &e),
    }

    Ok(())
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.list_suppliers() {
        Ok(suppliers) if suppliers.is_empty() => println!("No suppliers found."),
        Ok(suppliers) => print_table(&suppliers),
        Err(e) => report_failure("Failed to list suppliers.", &e),
    }

    Ok(())
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.search_suppliers(&args.keyword) {
        Ok(suppliers) if suppliers.is_empty() => println!("No suppliers found."),
        Ok(suppliers) => print_table(&suppliers),
        Err(e) => report_failure("Failed to search suppliers.", &e),
    }

    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.supplier_id, "Supplier ID")?;
    let fields = collect_fields(args.name, args.contact_name, args.contact_phone, args.address)?;

    match store.update_supplier(id, &fields) {
        Ok(_) => println!(
            "{} Updated supplier {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to update supplier {}.", id), &e),
    }

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.supplier_id, "Supplier ID")?;

    match store.delete_supplier(id) {
        Ok(_) => println!(
            "{} Deleted supplier {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to delete supplier {}.", id), &e),
    }

    Ok(())
}
