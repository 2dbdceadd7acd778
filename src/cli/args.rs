//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs,
    items::ItemCommands,
    logistics::LogisticsCommands,
    orders::OrderCommands,
    suppliers::SupplierCommands,
};

#[derive(Parser)]
#[command(name = "lqs")]
#[command(author, version, about = "Liquor Supply Pro - supply chain management for liquor distribution")]
#[command(long_about = "Manage the suppliers, items, orders, and logistics entries of a liquor distribution business from the command line. Records live in a single SQLite database file.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Database file (default: liquor_supply.db in the working directory)
    #[arg(long, global = true, env = "LQS_DB")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage suppliers
    #[command(subcommand)]
    Suppliers(SupplierCommands),

    /// Manage orders
    #[command(subcommand)]
    Orders(OrderCommands),

    /// Manage logistics entries
    #[command(subcommand)]
    Logistics(LogisticsCommands),

    /// Manage items
    #[command(subcommand)]
    Items(ItemCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
