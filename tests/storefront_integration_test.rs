use anyhow::Result;
use small_storefront::core::snapshot::{load_snapshot, save_snapshot};
use small_storefront::utils::validation::Validate;
use small_storefront::{
    CartStore, LocalStorage, MemoryCatalog, ProductId, Storefront, StorefrontConfig,
    StorefrontError,
};
use tempfile::TempDir;

const CONFIG: &str = r#"
[store]
name = "Shopping Hub"

[[products]]
id = 1
title = "Wireless Headphones"
slug = "wireless-headphones"
price = 50.0
hero_image = "headphones.png"
max_quantity = 3

[[products]]
id = 2
title = "Phone Charger"
slug = "phone-charger"
price = 30.0
hero_image = "charger.png"
max_quantity = 10

[[categories]]
id = 1
name = "Accessories"
slug = "accessories"
image_url = "accessories.png"

[[orders]]
id = 7
slug = "order-7"
item = "Phone Charger"
details = "Fast charger, 2 units"
status = "Completed"
date = "2024-04-02"

[[script]]
action = "add"
slug = "wireless-headphones"

[[script]]
action = "add"
slug = "phone-charger"
quantity = 2

[[script]]
action = "increase"
slug = "wireless-headphones"

[[script]]
action = "increase"
slug = "wireless-headphones"

[[script]]
action = "increase"
slug = "wireless-headphones"

[[script]]
action = "decrease"
slug = "phone-charger"

[[script]]
action = "checkout"
"#;

fn storefront(config: &StorefrontConfig) -> Storefront<MemoryCatalog> {
    Storefront::new(
        MemoryCatalog::new(config.products.clone(), config.orders.clone())
            .with_categories(config.categories.clone()),
    )
}

#[tokio::test]
async fn test_scripted_session_from_toml() -> Result<()> {
    let config = StorefrontConfig::from_toml_str(CONFIG)?;
    config.validate()?;

    let storefront = storefront(&config);
    let mut cart = CartStore::new();
    let report = storefront.run(&mut cart, &config.script).await?;

    // the third increase hits max_quantity = 3
    assert_eq!(report.limits_reached, 1);
    assert_eq!(cart.get(ProductId(1)).map(|i| i.quantity), Some(3));
    assert_eq!(cart.get(ProductId(2)).map(|i| i.quantity), Some(1));
    assert_eq!(report.checkouts.len(), 1);
    assert_eq!(report.checkouts[0].total, 180.0);
    assert_eq!(report.checkouts[0].to_string(), "Total amount: Rs 180.00");

    let category = storefront.category("accessories").await?;
    assert_eq!(category.name, "Accessories");
    assert!(matches!(
        storefront.category("toys").await,
        Err(StorefrontError::NotFound { .. })
    ));

    let order = storefront.order("order-7").await?;
    assert_eq!(order.item, "Phone Charger");
    assert!(matches!(
        storefront.order("order-99").await,
        Err(StorefrontError::NotFound { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_snapshot_survives_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path());

    let config = StorefrontConfig::from_toml_str(CONFIG)?;
    let storefront = storefront(&config);

    let mut cart = CartStore::new();
    storefront.run(&mut cart, &config.script[..2]).await?;
    save_snapshot(&storage, "carts/cart.json", &cart).await?;
    assert!(temp_dir.path().join("carts/cart.json").exists());

    let mut restored = load_snapshot(&storage, "carts/cart.json").await?;
    assert_eq!(restored.items(), cart.items());

    // the restored cart behaves like the original one
    restored.increment_item(ProductId(1));
    assert_eq!(restored.total_price(), 160.0);

    Ok(())
}

#[tokio::test]
async fn test_corrupt_snapshot_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(
        temp_dir.path().join("cart.json"),
        r#"{"items":[{"id":1,"title":"A","image":"a.png","price":5.0,"quantity":0}]}"#,
    )
    .await?;

    let storage = LocalStorage::new(temp_dir.path());
    let err = load_snapshot(&storage, "cart.json").await.unwrap_err();
    assert!(matches!(err, StorefrontError::InvalidConfigValueError { .. }));

    Ok(())
}
