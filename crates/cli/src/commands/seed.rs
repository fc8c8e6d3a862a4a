//! Demo-data seeding command.
//!
//! Writes array-style notification documents and default settings for a
//! handful of demo shops, so the admin UI and widget have something to
//! show against a fresh database.

use chrono::{Duration, Utc};

use sales_pop_core::{NotificationRecord, SettingsPatch, ShopId, ShopSettings};
use sales_pop_server::store::{
    NotificationStore as _, PostgresStore, SettingsStore as _, StoreError,
};

use super::{CommandError, connect};

const FIRST_NAMES: &[&str] = &["Jane", "John", "Mike", "Sara", "Tom", "Lena"];
const CITIES: &[(&str, &str)] = &[
    ("New York", "United States"),
    ("London", "United Kingdom"),
    ("Toronto", "Canada"),
    ("Berlin", "Germany"),
    ("Sydney", "Australia"),
    ("Hanoi", "Vietnam"),
];
const PRODUCTS: &[&str] = &[
    "Puffer Jacket With Hidden Hood",
    "Leather Bag",
    "Sneakers",
    "Canvas Tote",
    "Wool Scarf",
    "Desk Lamp",
];

/// Seed `shops` demo shops, each with `notifications` notification records
/// and the default settings document.
///
/// # Errors
///
/// Returns an error when the database is unreachable or a write fails.
pub async fn run(shops: u32, notifications: u32) -> Result<(), CommandError> {
    let pool = connect().await?;
    let store = PostgresStore::new(pool);

    tracing::info!(shops, notifications, "Seeding demo data...");

    for shop_index in 0..shops {
        let shop_id = ShopId::new(format!("demo-shop-{shop_index}"));
        let shop_domain = format!("demo-shop-{shop_index}.myshopify.com");

        seed_shop(&store, &shop_id, &shop_domain, notifications).await?;
        tracing::info!(shop = %shop_domain, "Seeded");
    }

    tracing::info!("Seeding complete");
    Ok(())
}

async fn seed_shop(
    store: &PostgresStore,
    shop_id: &ShopId,
    shop_domain: &str,
    notifications: u32,
) -> Result<(), StoreError> {
    let now = Utc::now();

    let items: Vec<NotificationRecord> = FIRST_NAMES
        .iter()
        .cycle()
        .zip(CITIES.iter().cycle())
        .zip(PRODUCTS.iter().cycle())
        .take(notifications as usize)
        .enumerate()
        .map(|(i, ((first_name, (city, country)), product_name))| {
            let product_id = 1000 + i as u64;
            NotificationRecord {
                id: format!("gid://shopify/Product/{product_id}"),
                first_name: (*first_name).to_string(),
                city: (*city).to_string(),
                country: (*country).to_string(),
                product_name: (*product_name).to_string(),
                product_id: product_id.to_string(),
                product_image: format!("https://cdn.example.com/products/{product_id}.jpg"),
                timestamp: now - Duration::hours(i as i64),
            }
        })
        .collect();

    store.replace_items(shop_id, shop_domain, items).await?;

    let defaults = ShopSettings::seed_defaults(shop_id.clone(), shop_domain);
    let patch = SettingsPatch::from_settings(&defaults);
    store.upsert_merge(shop_id, shop_domain, &patch).await?;

    Ok(())
}
