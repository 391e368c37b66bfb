//! Cart CLI - drive the storefront cart from the command line.
//!
//! Commands:
//! - `cart show` - Print the cart and its totals
//! - `cart add` - Add a product or set its quantity
//! - `cart remove` - Remove a product
//! - `cart inc` / `cart dec` - Change a line's quantity by one
//! - `cart discount` - Apply a coupon discount
//! - `cart ship` - Save the shipping address
//! - `cart reset` - Empty the cart
//! - `cart config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, ConfigArgs, DiscountArgs, ProductArgs, ResetArgs, ShipArgs};

/// Cart CLI - manage a locally persisted shopping cart
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cart lines and totals
    Show,

    /// Add a product to the cart
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(ProductArgs),

    /// Increase a line's quantity by one
    Inc(ProductArgs),

    /// Decrease a line's quantity by one
    Dec(ProductArgs),

    /// Apply a coupon discount amount
    Discount(DiscountArgs),

    /// Save the shipping address
    Ship(ShipArgs),

    /// Empty the cart
    Reset(ResetArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging, cli.verbose)?;

    // Execute command
    let result = match cli.command {
        Commands::Show => commands::cart::show(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Inc(args) => commands::cart::increment(args, &ctx),
        Commands::Dec(args) => commands::cart::decrement(args, &ctx),
        Commands::Discount(args) => commands::cart::discount(args, &ctx),
        Commands::Ship(args) => commands::cart::ship(args, &ctx),
        Commands::Reset(args) => commands::cart::reset(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
