use std::collections::{HashMap, HashSet};
use std::env;

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use sqlx::Row;

/// Report integrity problems in a catalog database
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Exit with an error when any problem is found
    #[arg(long)]
    strict: bool,
}

/// Categories whose parent chain loops back on itself
fn cycle_members(parents: &HashMap<i64, Option<i64>>) -> Vec<i64> {
    let mut on_cycle = HashSet::new();

    for &start in parents.keys() {
        let mut seen = Vec::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if on_cycle.contains(&id) {
                break;
            }
            if let Some(pos) = seen.iter().position(|&s| s == id) {
                on_cycle.extend(seen[pos..].iter().copied());
                break;
            }
            seen.push(id);
            current = parents.get(&id).copied().flatten();
        }
    }

    let mut members: Vec<i64> = on_cycle.into_iter().collect();
    members.sort_unstable();
    members
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set or passed with --database-url")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    let mut problems = 0usize;

    // Prices below zero
    let negative_prices =
        sqlx::query(r#"SELECT id, product_id, cents FROM prices WHERE cents < 0 ORDER BY id"#)
            .fetch_all(&pool)
            .await?;

    println!("Negative price rows: {}", negative_prices.len());
    for r in negative_prices.iter() {
        let id: i64 = r.get("id");
        let product_id: i64 = r.get("product_id");
        let cents: i64 = r.get("cents");
        println!("price {}: product {}, cents {}", id, product_id, cents);
    }
    problems += negative_prices.len();

    // Pivot rows pointing at missing products, categories or attributes
    let dangling_categories = sqlx::query(
        r#"
        SELECT pc.id FROM product_category pc
        LEFT JOIN products p ON p.id = pc.product_id
        LEFT JOIN categories c ON c.id = pc.category_id
        WHERE p.id IS NULL OR c.id IS NULL
        ORDER BY pc.id
        "#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Dangling product_category rows: {}", dangling_categories.len());
    for r in dangling_categories.iter() {
        let id: i64 = r.get("id");
        println!("product_category {}", id);
    }
    problems += dangling_categories.len();

    let dangling_attributes = sqlx::query(
        r#"
        SELECT pa.id FROM product_attribute pa
        LEFT JOIN products p ON p.id = pa.product_id
        LEFT JOIN attributes a ON a.id = pa.attribute_id
        WHERE p.id IS NULL OR a.id IS NULL
        ORDER BY pa.id
        "#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Dangling product_attribute rows: {}", dangling_attributes.len());
    for r in dangling_attributes.iter() {
        let id: i64 = r.get("id");
        println!("product_attribute {}", id);
    }
    problems += dangling_attributes.len();

    // Category parent cycles
    let categories = sqlx::query(r#"SELECT id, parent_id FROM categories"#)
        .fetch_all(&pool)
        .await?;
    let parents: HashMap<i64, Option<i64>> = categories
        .iter()
        .map(|r| (r.get::<i64, _>("id"), r.get::<Option<i64>, _>("parent_id")))
        .collect();

    let cycles = cycle_members(&parents);
    println!("Categories on a parent cycle: {}", cycles.len());
    for id in cycles.iter() {
        println!("category {}", id);
    }
    problems += cycles.len();

    if cli.strict && problems > 0 {
        anyhow::bail!("{} catalog integrity problems found", problems);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_members() {
        let parents = HashMap::from([
            (1, None),
            (2, Some(1)),
            (3, Some(4)),
            (4, Some(3)),
            (5, Some(3)),
            (6, Some(6)),
        ]);

        assert_eq!(cycle_members(&parents), vec![3, 4, 6]);
    }

    #[test]
    fn test_no_cycles_in_forest() {
        let parents = HashMap::from([(1, None), (2, Some(1)), (3, Some(99))]);
        assert!(cycle_members(&parents).is_empty());
    }
}
