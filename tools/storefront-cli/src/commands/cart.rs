//! Cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use storefront_commerce::cart::{CartItem, CartState};
use storefront_commerce::checkout::ShippingInfo;
use storefront_commerce::{Currency, Money, ProductId};

use super::{AddArgs, DiscountArgs, ProductArgs, ResetArgs, ShipArgs};
use crate::context::Context;
use crate::output::truncate;

const LINE_WIDTHS: [usize; 5] = [14, 28, 12, 5, 12];

/// Print the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    print_cart(store.state(), ctx);
    Ok(())
}

/// Add a product or set its quantity.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    let item = CartItem::new(args.product_id.as_str(), args.name, Money::from_decimal(args.price))
        .with_photo(args.photo)
        .with_stock(args.stock)
        .with_quantity(args.quantity.unwrap_or(0));

    if args.force {
        store.add_item(item);
    } else {
        store
            .try_add_item(item)
            .with_context(|| format!("Cannot add {}", args.product_id))?;
    }

    let quantity = store
        .get_item(&ProductId::new(args.product_id.as_str()))
        .map(|i| i.quantity)
        .unwrap_or_default();
    ctx.output.success(&format!("{} x{} in cart", args.product_id, quantity));
    print_summary(store.state(), ctx);
    Ok(())
}

/// Remove a product.
pub fn remove(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let product_id = ProductId::new(args.product_id);

    if store.get_item(&product_id).is_none() {
        ctx.output.warn(&format!("{} is not in the cart", product_id));
    }
    store.remove_item(&product_id);

    ctx.output.success(&format!("Removed {}", product_id));
    print_summary(store.state(), ctx);
    Ok(())
}

/// Increase a line's quantity by one.
pub fn increment(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let product_id = ProductId::new(args.product_id);

    let quantity = store.increment(&product_id)?;
    ctx.output.success(&format!("{} x{} in cart", product_id, quantity));
    print_summary(store.state(), ctx);
    Ok(())
}

/// Decrease a line's quantity by one.
pub fn decrement(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let product_id = ProductId::new(args.product_id);

    match store.decrement(&product_id)? {
        Some(quantity) => ctx.output.success(&format!("{} x{} in cart", product_id, quantity)),
        None => ctx.output.success(&format!("Removed {}", product_id)),
    }
    print_summary(store.state(), ctx);
    Ok(())
}

/// Apply a coupon discount.
pub fn discount(args: DiscountArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let amount = Money::from_decimal(args.amount);

    store.apply_discount(amount);
    ctx.output.success(&format!("Discount set to {}", amount.display(currency(ctx))));
    print_summary(store.state(), ctx);
    Ok(())
}

/// Save the shipping address.
pub fn ship(args: ShipArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let info = ShippingInfo::new(args.address, args.city, args.state, args.country, args.pin_code);

    if !info.is_complete() {
        ctx.output.warn("Some address fields are blank");
    }
    store.save_shipping_info(info);

    ctx.output.success("Shipping address saved");
    if ctx.output.is_json() {
        ctx.output.json(store.state());
    } else {
        ctx.output.kv("Ship to", &store.state().shipping_info.one_line());
    }
    Ok(())
}

/// Empty the cart.
pub fn reset(args: ResetArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if !args.yes && !ctx.output.is_json() && !store.is_empty() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} item(s) from the cart?",
                store.item_count()
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            ctx.output.info("Reset cancelled.");
            return Ok(());
        }
    }

    store.reset();
    ctx.output.success("Cart emptied");
    if ctx.output.is_json() {
        ctx.output.json(store.state());
    }
    Ok(())
}

fn currency(ctx: &Context) -> Currency {
    ctx.config.display.currency
}

fn print_cart(state: &CartState, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(state);
        return;
    }

    let currency = currency(ctx);
    ctx.output.header("Cart");

    if state.is_empty() {
        ctx.output.info("Your cart is empty.");
    } else {
        ctx.output.table_row(&["PRODUCT", "NAME", "PRICE", "QTY", "LINE"], &LINE_WIDTHS);
        for item in &state.cart_items {
            let name = truncate(&item.name, LINE_WIDTHS[1]);
            let price = item.price.display(currency);
            let quantity = item.quantity.to_string();
            let line = item.line_total().display(currency);
            ctx.output.table_row(
                &[item.product_id.as_str(), &name, &price, &quantity, &line],
                &LINE_WIDTHS,
            );
        }
    }

    print_totals(state, currency, ctx);

    if !state.shipping_info.is_empty() {
        ctx.output.kv("Ship to", &state.shipping_info.one_line());
    }
}

fn print_summary(state: &CartState, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(state);
        return;
    }
    print_totals(state, currency(ctx), ctx);
}

fn print_totals(state: &CartState, currency: Currency, ctx: &Context) {
    ctx.output.header("Totals");
    ctx.output.kv("Items", &state.item_count().to_string());
    ctx.output.kv("Subtotal", &state.subtotal.display(currency));
    ctx.output.kv("Shipping", &state.shipping_charges.display(currency));
    ctx.output.kv("Tax", &state.tax.display(currency));
    ctx.output.kv("Discount", &(-state.discount).display(currency));
    ctx.output.kv("Total", &state.total.display(currency));
}
