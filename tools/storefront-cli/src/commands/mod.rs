//! CLI command implementations.

pub mod cart;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    pub product_id: String,

    /// Product name.
    #[arg(short, long)]
    pub name: String,

    /// Unit price in currency units (e.g. 499 or 499.50).
    #[arg(short, long)]
    pub price: f64,

    /// Photo path or URL.
    #[arg(long, default_value = "")]
    pub photo: String,

    /// Known available stock.
    #[arg(short, long, default_value = "1")]
    pub stock: u32,

    /// Quantity to set. Omit to add one more of an existing line.
    #[arg(short, long)]
    pub quantity: Option<u32>,

    /// Skip the stock check.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for commands that target one cart line.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub product_id: String,
}

/// Arguments for the discount command.
#[derive(Args)]
pub struct DiscountArgs {
    /// Discount amount in currency units.
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
}

/// Arguments for the ship command.
#[derive(Args)]
pub struct ShipArgs {
    /// Street address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// City.
    #[arg(long, default_value = "")]
    pub city: String,

    /// State or province.
    #[arg(long, default_value = "")]
    pub state: String,

    /// Country.
    #[arg(long, default_value = "")]
    pub country: String,

    /// Postal (PIN) code.
    #[arg(long, default_value = "")]
    pub pin_code: String,
}

/// Arguments for the reset command.
#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
