//! Cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use glow_commerce::{CommerceError, ProductId};
use glow_store::{CartAction, StoreError};

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::view::CartView;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(ctx).await,
        CartCommand::Add { id } => mutate(CartAction::Add(ProductId::new(id)), ctx).await,
        CartCommand::Change { id, step } => {
            mutate(CartAction::Change(ProductId::new(id), step), ctx).await
        }
        CartCommand::Set { id, quantity } => {
            mutate(CartAction::SetFromInput(ProductId::new(id), quantity), ctx).await
        }
        CartCommand::Remove { id } => mutate(CartAction::Remove(ProductId::new(id)), ctx).await,
        CartCommand::Count => count(ctx),
        CartCommand::Clear { yes } => clear(yes, ctx),
    }
}

/// Show the cart joined against the catalog.
async fn show(ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    let cart = store.load()?;

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let spinner = ctx.output.spinner("Loading catalog...");
    let resolver = ctx.resolver();
    let catalog = resolver.catalog().await;
    spinner.finish_and_clear();

    let view = CartView::build(&cart, &catalog)?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    if view.degraded {
        ctx.output
            .warn("Catalog unavailable, showing provisional product data");
    }
    for id in &view.unresolved {
        ctx.output.warn(&format!(
            "Product {} is no longer in the catalog; line left unpriced",
            id
        ));
    }

    ctx.output.header("Your Cart");
    for line in &view.lines {
        let id = line.product_id.to_string();
        let name = if line.synthetic {
            format!("{} (details pending)", line.name)
        } else {
            line.name.clone()
        };
        let quantity = format!("x{}", line.quantity);
        let unit_price = line.unit_price.display();
        let line_total = line.line_total.display();
        ctx.output.table_row(
            &[&id, &name, &quantity, &unit_price, &line_total],
            &[4, 52, 5, 10, 10],
        );
    }
    ctx.output.info("");
    ctx.output.kv("Items", &view.item_count.to_string());
    ctx.output.kv("Subtotal", &view.subtotal.display());
    ctx.output.kv("Shipping", "free");

    Ok(())
}

/// Apply one cart action through the store.
///
/// Quantity-cap and not-in-cart outcomes are user feedback, not failures;
/// only storage trouble exits nonzero.
async fn mutate(action: CartAction, ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;

    match store.apply(action) {
        Ok(cart) => {
            ctx.output
                .success(&format!("Cart updated ({} items)", cart.item_count()));
            Ok(())
        }
        Err(StoreError::Commerce(CommerceError::QuantityCapped { product_id, max })) => {
            ctx.output.warn(&format!(
                "Quantity for product {} is capped at {}; cart unchanged",
                product_id, max
            ));
            Ok(())
        }
        Err(StoreError::Commerce(CommerceError::NotInCart(id))) => {
            ctx.output.info(&format!("Product {} is not in the cart", id));
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Could not save your cart")),
    }
}

/// Print the badge count.
fn count(ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    let count = store.item_count()?;

    if ctx.output.is_json() {
        println!(r#"{{"itemCount": {}}}"#, count);
    } else {
        println!("{}", count);
    }

    Ok(())
}

/// Empty the cart, confirming first unless `--yes`.
fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    let cart = store.load()?;

    if cart.is_empty() {
        ctx.output.info("Your cart is already empty");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} items from your cart?",
                cart.item_count()
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    store.clear()?;
    ctx.output.success("Cart emptied");

    Ok(())
}
