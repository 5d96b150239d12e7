//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with prices and subtotal (default)
    Show,

    /// Add one unit of a product
    Add {
        /// Product id
        id: u64,
    },

    /// Change a line's quantity by a signed step
    Change {
        /// Product id
        id: u64,

        /// Signed step, e.g. 2 or -1
        #[arg(allow_hyphen_values = true)]
        step: i32,
    },

    /// Set a line's quantity outright
    Set {
        /// Product id
        id: u64,

        /// New quantity; 0 or anything non-numeric removes the line
        quantity: String,
    },

    /// Remove a line
    Remove {
        /// Product id
        id: u64,
    },

    /// Print the total unit count (the badge number)
    Count,

    /// Empty the cart
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List the storefront selection: hero first, then recommendations (default)
    List {
        /// List every product instead
        #[arg(short, long)]
        all: bool,
    },

    /// Show one product in detail
    Show {
        /// Product id
        id: u64,
    },

    /// Reload the catalog and report which source answered
    Refresh,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}
