//! `lqs orders` command - Order management
//!
//! Creation never sets a status; the update subcommand sets nothing else.

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{amount_arg, id_arg, open_store, report_failure, text_arg, truncate_str};
use crate::cli::{select, GlobalOpts};
use crate::entities::order::{Order, OrderFields};

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// Create a new order (prompts for a supplier)
    Create(CreateArgs),

    /// List all orders
    List,

    /// Search orders by customer name
    Search(SearchArgs),

    /// Update an order's status
    Update(UpdateArgs),

    /// Delete an order
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Name of the customer
    #[arg(long)]
    pub customer_name: Option<String>,

    /// Date of the order
    #[arg(long)]
    pub order_date: Option<String>,

    /// Total amount of the order
    #[arg(long)]
    pub total_amount: Option<f64>,

    /// Supplier id (skips the interactive selection)
    #[arg(long)]
    pub supplier_id: Option<i64>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Keyword to match against the customer name
    pub keyword: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// ID of the order to update
    #[arg(long)]
    pub order_id: Option<i64>,

    /// New status text
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// ID of the order to delete
    #[arg(long)]
    pub order_id: Option<i64>,
}

/// Run an order subcommand
pub fn run(cmd: OrderCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        OrderCommands::Create(args) => run_create(args, global),
        OrderCommands::List => run_list(global),
        OrderCommands::Search(args) => run_search(args, global),
        OrderCommands::Update(args) => run_update(args, global),
        OrderCommands::Delete(args) => run_delete(args, global),
    }
}

fn print_table(orders: &[Order]) {
    println!(
        "{} {} {} {} {} {}",
        format!("{:<6}", style("ID").bold()),
        format!("{:<25}", style("CUSTOMER").bold()),
        format!("{:<12}", style("DATE").bold()),
        format!("{:<10}", style("TOTAL").bold()),
        format!("{:<9}", style("SUPPLIER").bold()),
        format!("{:<15}", style("STATUS").bold()),
    );
    println!("{}", "-".repeat(82));

    for order in orders {
        let total = order
            .total_amount
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        let supplier = order
            .supplier_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<25} {:<12} {:<10} {:<9} {:<15}",
            order.id,
            truncate_str(&order.customer_name, 23),
            truncate_str(order.order_date.as_deref().unwrap_or("-"), 10),
            total,
            supplier,
            truncate_str(order.status.as_deref().unwrap_or("-"), 13),
        );
    }

    println!();
    println!("{} order(s) found.", style(orders.len()).cyan());
}

fn run_create(args: CreateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let customer_name = text_arg(args.customer_name, "Customer name")?;
    let order_date = text_arg(args.order_date, "Order date")?;
    let total_amount = amount_arg(args.total_amount, "Total amount")?;

    let Some(supplier_id) = select::select_supplier(&store, args.supplier_id)? else {
        return Ok(());
    };

    let fields = OrderFields {
        customer_name,
        order_date,
        total_amount,
        supplier_id,
    };

    match store.create_order(&fields) {
        Ok(id) => println!(
            "{} Created order {} for {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan(),
            style(&fields.customer_name).yellow()
        ),
        Err(e) => report_failure("Failed to create order.", &e),
    }

    Ok(())
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.list_orders() {
        Ok(orders) if orders.is_empty() => println!("No orders found."),
        Ok(orders) => print_table(&orders),
        Err(e) => report_failure("Failed to list orders.", &e),
    }

    Ok(())
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    match store.search_orders(&args.keyword) {
        Ok(orders) if orders.is_empty() => println!("No orders found."),
        Ok(orders) => print_table(&orders),
        Err(e) => report_failure("Failed to search orders.", &e),
    }

    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.order_id, "Order ID")?;
    let status = text_arg(args.status, "Order status")?;

    match store.update_order_status(id, &status) {
        Ok(_) => println!(
            "{} Updated order {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to update order {}.", id), &e),
    }

    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let id = id_arg(args.order_id, "Order ID")?;

    match store.delete_order(id) {
        Ok(_) => println!(
            "{} Deleted order {}",
            style("✓").green(),
            style(format!("#{}", id)).cyan()
        ),
        Err(e) => report_failure(&format!("Failed to delete order {}.", id), &e),
    }

    Ok(())
}
