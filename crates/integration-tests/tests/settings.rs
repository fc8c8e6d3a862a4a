//! Settings service integration tests.

use sales_pop_core::{PagesRestriction, PopupPosition, SettingsPatch, ShopId};
use sales_pop_integration_tests::TestHarness;

const SHOP: &str = "s1.myshopify.com";

#[tokio::test]
async fn get_returns_none_before_first_write() {
    let harness = TestHarness::new();

    let settings = harness
        .settings
        .get(&ShopId::new("s1"))
        .await
        .expect("get");

    assert!(settings.is_none());
}

#[tokio::test]
async fn get_or_seed_writes_the_default_document() {
    let harness = TestHarness::new();
    let shop_id = ShopId::new("s1");

    let seeded = harness
        .settings
        .get_or_seed(&shop_id, SHOP)
        .await
        .expect("seed");

    // The 10-field default object, exactly.
    assert_eq!(seeded.shop_id, shop_id);
    assert_eq!(seeded.shop_domain, SHOP);
    assert_eq!(seeded.position, PopupPosition::BottomLeft);
    assert!(!seeded.hide_time_ago);
    assert!(seeded.truncate_content);
    assert_eq!(seeded.display_duration, 5);
    assert_eq!(seeded.first_delay, 10);
    assert_eq!(seeded.gap_time, 2);
    assert_eq!(seeded.max_popups, 20);
    assert_eq!(seeded.pages_restriction, PagesRestriction::All);
    assert_eq!(seeded.included_urls, "");
    assert_eq!(seeded.excluded_urls, "");

    // And it is now persisted.
    let stored = harness
        .settings
        .get(&shop_id)
        .await
        .expect("get")
        .expect("document exists");
    assert_eq!(stored, seeded);
}

#[tokio::test]
async fn get_or_seed_does_not_clobber_existing_settings() {
    let harness = TestHarness::new();
    let shop_id = ShopId::new("s1");

    harness
        .settings
        .save(
            &shop_id,
            SHOP,
            &SettingsPatch {
                position: Some(PopupPosition::TopRight),
                ..SettingsPatch::default()
            },
        )
        .await
        .expect("save");

    let settings = harness
        .settings
        .get_or_seed(&shop_id, SHOP)
        .await
        .expect("get_or_seed");

    assert_eq!(settings.position, PopupPosition::TopRight);
}

#[tokio::test]
async fn save_merges_instead_of_overwriting() {
    let harness = TestHarness::new();
    let shop_id = ShopId::new("s1");

    harness
        .settings
        .save(
            &shop_id,
            SHOP,
            &SettingsPatch {
                position: Some(PopupPosition::TopLeft),
                ..SettingsPatch::default()
            },
        )
        .await
        .expect("first save");

    let merged = harness
        .settings
        .save(
            &shop_id,
            SHOP,
            &SettingsPatch {
                display_duration: Some(12),
                ..SettingsPatch::default()
            },
        )
        .await
        .expect("second save");

    assert_eq!(merged.display_duration, 12);
    assert_eq!(merged.position, PopupPosition::TopLeft);

    let stored = harness
        .settings
        .get(&shop_id)
        .await
        .expect("get")
        .expect("document exists");
    assert_eq!(stored.display_duration, 12);
    assert_eq!(stored.position, PopupPosition::TopLeft);
}

#[tokio::test]
async fn save_accepts_a_full_document() {
    let harness = TestHarness::new();
    let shop_id = ShopId::new("s1");

    let patch = SettingsPatch {
        position: Some(PopupPosition::BottomRight),
        hide_time_ago: Some(true),
        truncate_content: Some(false),
        display_duration: Some(7),
        first_delay: Some(3),
        gap_time: Some(4),
        max_popups: Some(10),
        pages_restriction: Some(PagesRestriction::Specific),
        included_urls: Some("/products\n/collections".to_string()),
        excluded_urls: Some("/cart".to_string()),
    };

    let saved = harness
        .settings
        .save(&shop_id, SHOP, &patch)
        .await
        .expect("save");

    assert_eq!(saved.position, PopupPosition::BottomRight);
    assert!(saved.hide_time_ago);
    assert!(!saved.truncate_content);
    assert_eq!(saved.display_duration, 7);
    assert_eq!(saved.pages_restriction, PagesRestriction::Specific);
    assert_eq!(saved.included_urls, "/products\n/collections");
    assert_eq!(saved.excluded_urls, "/cart");
}
