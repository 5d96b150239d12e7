//! Source-chain and degraded-mode scenarios over real files.

use glow_catalog::{CatalogOrigin, FileSource, ProductResolver};
use glow_commerce::cart::Cart;
use glow_commerce::product::ProductLookup;
use glow_commerce::ProductId;
use std::path::Path;

fn write_feed(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
}

fn chain(paths: &[&Path]) -> ProductResolver {
    ProductResolver::with_sources(
        paths
            .iter()
            .map(|p| Box::new(FileSource::new(*p)) as Box<dyn glow_catalog::CatalogSource>)
            .collect(),
    )
}

#[tokio::test]
async fn first_usable_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let blank = dir.path().join("blank.json");
    let good = dir.path().join("products.json");

    write_feed(&blank, "   ");
    write_feed(
        &good,
        r#"{"products":[
            {"id":1,"name":"Glow Serum Jumbo","brand":"Beauty of Joseon","price":16.17,"featured":true},
            {"id":6,"name":"Advanced Snail 96 Mucin Power Essence","brand":"COSRX","price":18.50}
        ]}"#,
    );

    let resolver = chain(&[&missing, &blank, &good]);
    let catalog = resolver.catalog().await;

    assert_eq!(
        catalog.origin(),
        &CatalogOrigin::Source(good.display().to_string())
    );
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.featured().unwrap().id,
        ProductId::new(1),
        "hero comes from the featured flag"
    );
}

#[tokio::test]
async fn malformed_file_falls_through_to_next() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    let good = dir.path().join("products.json");

    write_feed(&broken, "<html>not a feed</html>");
    write_feed(
        &good,
        r#"{"products":[{"id":2,"name":"Vita-A Booster","brand":"celimax","price":11.88}]}"#,
    );

    let resolver = chain(&[&broken, &good]);
    let catalog = resolver.catalog().await;
    assert!(!catalog.origin().is_degraded());
    assert!(catalog.product(ProductId::new(2)).is_some());
}

#[tokio::test]
async fn exhausted_chain_serves_embedded_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = chain(&[&dir.path().join("a.json"), &dir.path().join("b.json")]);

    let catalog = resolver.catalog().await;
    assert!(catalog.origin().is_degraded());

    // the core range is present with real prices
    let serum = catalog.product(ProductId::new(1)).unwrap();
    assert_eq!(serum.brand, "Beauty of Joseon");
    assert_eq!(serum.unit_price.amount_cents, 1617);
}

#[tokio::test]
async fn refresh_picks_up_a_repaired_feed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");

    // first load: nothing there, degraded
    let resolver = chain(&[&path]);
    assert!(resolver.catalog().await.origin().is_degraded());

    // feed appears; the session cache still serves the old snapshot
    write_feed(
        &path,
        r#"{"products":[{"id":8,"name":"Water Bank Blue Hyaluronic Cream","brand":"LANEIGE","price":25.00}]}"#,
    );
    assert!(resolver.catalog().await.origin().is_degraded());

    // explicit refresh reloads the chain
    let catalog = resolver.refresh().await;
    assert!(!catalog.origin().is_degraded());
    assert!(catalog.product(ProductId::new(8)).is_some());
}

#[tokio::test]
async fn subtotal_skips_lines_the_catalog_cannot_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    write_feed(
        &path,
        r#"{"products":[{"id":1,"name":"Glow Serum Jumbo","brand":"Beauty of Joseon","price":16.17}]}"#,
    );

    let resolver = chain(&[&path]);
    let catalog = resolver.catalog().await;

    let mut cart = Cart::new();
    cart.add_or_increment(ProductId::new(1)).unwrap();
    cart.add_or_increment(ProductId::new(1)).unwrap();
    cart.add_or_increment(ProductId::new(999)).unwrap();

    let pricing = cart.pricing(catalog.as_ref()).unwrap();
    assert_eq!(pricing.subtotal.amount_cents, 3234); // 16.17 * 2
    assert_eq!(pricing.unresolved, vec![ProductId::new(999)]);
}

#[tokio::test]
async fn degraded_mode_prices_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = chain(&[&dir.path().join("nope.json")]);
    let catalog = resolver.catalog().await;
    assert!(catalog.origin().is_degraded());

    let mut cart = Cart::new();
    cart.add_or_increment(ProductId::new(5)).unwrap();
    let unknown = resolver.resolve(ProductId::new(77)).await.unwrap();
    assert!(unknown.synthetic);

    // known embedded product prices normally
    let pricing = cart.pricing(catalog.as_ref()).unwrap();
    assert_eq!(pricing.subtotal.amount_cents, 98);
}
