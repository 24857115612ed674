mod common;

use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use storefront_api::{
    dto::products::ProductPatch,
    entity::{Products, products::ActiveModel as ProductActive},
    error::AppError,
    repository::CatalogRepository,
};
use uuid::Uuid;

use common::{memory_catalog, new_product};

#[tokio::test]
async fn create_then_get_returns_supplied_fields() -> anyhow::Result<()> {
    let catalog = memory_catalog().await?;
    let input = new_product("mesa-roble");

    let created = catalog.create_product(input.clone()).await?;
    let fetched = catalog
        .get_product(created.id)
        .await?
        .expect("created product is readable");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.slug, input.slug);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.price, input.price);
    assert_eq!(fetched.image_url, input.image_url);
    assert_eq!(fetched.stock, input.stock);
    assert_eq!(fetched.category_id, input.category_id);
    Ok(())
}

#[tokio::test]
async fn delete_then_get_yields_not_found() -> anyhow::Result<()> {
    let catalog = memory_catalog().await?;
    let created = catalog.create_product(new_product("silla")).await?;

    catalog.delete_product(created.id).await?;
    assert!(catalog.get_product(created.id).await?.is_none());

    // A second delete matches no row.
    let again = catalog.delete_product(created.id).await;
    assert!(matches!(again, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn update_patches_only_supplied_fields() -> anyhow::Result<()> {
    let catalog = memory_catalog().await?;
    let created = catalog.create_product(new_product("sofa")).await?;

    let patch = ProductPatch {
        price: Some(2599),
        description: Some(None),
        ..Default::default()
    };
    let updated = catalog.update_product(created.id, patch).await?;

    assert_eq!(updated.price, 2599);
    assert_eq!(updated.description, None);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.stock, created.stock);
    assert_eq!(updated.image_url, created.image_url);
    Ok(())
}

#[tokio::test]
async fn update_unknown_id_is_not_found() -> anyhow::Result<()> {
    let catalog = memory_catalog().await?;
    let patch = ProductPatch {
        stock: Some(1),
        ..Default::default()
    };
    let result = catalog.update_product(Uuid::new_v4(), patch).await;
    assert!(matches!(result, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn duplicate_slug_is_a_client_error() -> anyhow::Result<()> {
    let catalog = memory_catalog().await?;
    catalog.create_product(new_product("lampara")).await?;

    let result = catalog.create_product(new_product("lampara")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn list_is_newest_first_and_respects_limit() -> anyhow::Result<()> {
    let catalog = memory_catalog().await?;
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();

    let mut ids = Vec::new();
    for i in 0..15 {
        let created = catalog
            .create_product(new_product(&format!("producto-{i}")))
            .await?;
        let model = Products::find_by_id(created.id)
            .one(catalog.connection())
            .await?
            .expect("row exists");
        let mut active: ProductActive = model.into();
        active.created_at = Set((base + Duration::minutes(i)).into());
        active.update(catalog.connection()).await?;
        ids.push(created.id);
    }

    let all = catalog.list_products(None).await?;
    assert_eq!(all.len(), 15);
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(all[0].id, ids[14]);

    let capped = catalog.list_products(Some(12)).await?;
    assert_eq!(capped.len(), 12);
    assert_eq!(capped[0].id, ids[14]);
    assert_eq!(capped[11].id, ids[3]);
    Ok(())
}
