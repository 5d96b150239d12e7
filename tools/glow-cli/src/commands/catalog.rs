//! Catalog commands.

use anyhow::Result;
use glow_commerce::product::Product;
use glow_commerce::ProductId;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CatalogCommand::List { all: false }) {
        CatalogCommand::List { all } => list(all, ctx).await,
        CatalogCommand::Show { id } => show(ProductId::new(id), ctx).await,
        CatalogCommand::Refresh => refresh(ctx).await,
    }
}

/// List products: the storefront selection by default, everything with `--all`.
async fn list(all: bool, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading catalog...");
    let resolver = ctx.resolver();
    let catalog = resolver.catalog().await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&catalog.products());
        return Ok(());
    }

    if catalog.origin().is_degraded() {
        ctx.output
            .warn("Catalog unavailable, showing embedded emergency data");
    } else {
        ctx.output
            .debug(&format!("catalog source: {}", catalog.origin()));
    }

    if all {
        ctx.output.header("All Products");
        for product in catalog.products() {
            print_row(ctx, product);
        }
        return Ok(());
    }

    if let Some(hero) = catalog.featured() {
        ctx.output.header("Featured");
        print_row(ctx, hero);
    }

    let recommended = catalog.recommended(ctx.config.catalog.recommended);
    if !recommended.is_empty() {
        ctx.output.header("Recommended");
        for product in recommended {
            print_row(ctx, product);
        }
    }

    Ok(())
}

fn print_row(ctx: &Context, product: &Product) {
    let id = product.id.to_string();
    let price = product.unit_price.display();
    ctx.output
        .table_row(&[&id, &product.brand, &product.name, &price], &[4, 18, 52, 10]);
}

/// Show one product in detail.
///
/// Resolves through the full source chain, so in degraded mode an unknown
/// id still shows as a provisional placeholder.
async fn show(id: ProductId, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading catalog...");
    let resolver = ctx.resolver();
    let product = resolver.resolve(id).await;
    spinner.finish_and_clear();

    let Some(product) = product else {
        anyhow::bail!("Product {} not found in the catalog", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("price", &product.unit_price.display());
    if let Some(category) = &product.category {
        ctx.output.kv("category", category);
    }
    if product.featured {
        ctx.output.list_item("featured");
    }
    if let Some(description) = &product.description {
        ctx.output.info("");
        ctx.output.info(description);
    }
    if product.synthetic {
        ctx.output
            .warn("Provisional data: the catalog could not resolve this id");
    }

    Ok(())
}

/// Reload the catalog and report which source answered.
async fn refresh(ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Reloading catalog...");
    let resolver = ctx.resolver();
    let catalog = resolver.refresh().await;
    spinner.finish_and_clear();

    if catalog.origin().is_degraded() {
        ctx.output
            .warn("All catalog sources failed; embedded emergency data in use");
    } else {
        ctx.output.success(&format!(
            "Catalog loaded: {} products from {}",
            catalog.len(),
            catalog.origin()
        ));
    }

    Ok(())
}
