#![cfg(test)]
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::entity::Product;

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

/// `count` products named "Product 1".. with strictly increasing `created_at`.
pub fn numbered_products(count: usize) -> Vec<Product> {
    let base = Utc::now();
    (1..=count)
        .map(|i| {
            let mut p = Product::new(format!("Product {i}"), 10.0 * i as f64).expect("valid product");
            p.created_at = base + Duration::seconds(i as i64);
            p
        })
        .collect()
}
