//! Page Counters - UPDATE Builder Example
//!
//! Renders a few UPDATE statements a small analytics service would issue:
//! - in-place increments with expression parameters
//! - a two-table update touching a page and its site
//! - an ordered, limited batch update
//!
//! Run with: cargo run --example counters

use oxide_sql_update::{Condition, ExpressionParameter, Field, Parameters, UpdateQuery};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn print(title: &str, sql: &str, params: &Parameters) {
    println!("-- {title}");
    println!("{sql}");
    for (name, value) in params.iter() {
        println!("   {name} = {value:?}");
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Count one more view of a page.
    let mut hit = UpdateQuery::new("pages")?;
    hit.set_column("views", ExpressionParameter::add("views", 1_i64));
    hit.set_column("last_seen", "2024-05-01T10:00:00Z");
    hit.set_where(Condition::eq("path", "/index.html"));
    let (sql, params) = hit.render()?;
    print("page hit", &sql, &params);

    // Move a page to another site and bump the site's page count.
    let mut moved = UpdateQuery::new(["pages", "sites"])?;
    moved.set_column("site_id", 7_i64);
    moved.set_column(
        Field::at("pages", 1),
        ExpressionParameter::add(Field::at("pages", 1), 1_i64),
    );
    moved.set_where(Condition::eq(Field::at("id", 1), 7_i64));
    let (sql, params) = moved.render()?;
    print("page moved", &sql, &params);

    // Archive the hundred oldest pages.
    let mut archive = UpdateQuery::new("pages")?;
    archive.set_column("archived", true);
    archive.set_where(Condition::lt("last_seen", "2023-01-01"));
    archive.set_order_by(["last_seen"])?;
    archive.set_limit(100)?;
    let (sql, params) = archive.render()?;
    print("archive", &sql, &params);

    // Multi-table statements cannot be limited.
    if let Err(e) = moved.set_limit(1) {
        info!("expected rejection: {e}");
    }

    Ok(())
}
