use super::*;

fn upsert_param() -> UpsertInventoryItemParam {
    UpsertInventoryItemParam {
        name: "Starter Feed".to_string(),
        category: "feed".to_string(),
        quantity: 100.0,
        unit: "kg".to_string(),
        reorder_level: 20.0,
    }
}

/// Tests creating an inventory item.
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = InventoryRepository::new(db);
    let item = repo.create_item(farm.id, upsert_param()).await?;

    assert_eq!(item.farm_id, farm.id);
    assert_eq!(item.name, "Starter Feed");
    assert_eq!(item.quantity, 100.0);

    Ok(())
}

/// Tests that updating item metadata does not touch the stored quantity.
///
/// Stock only moves through transactions; a metadata edit carrying a
/// different quantity must leave the stored level alone.
#[tokio::test]
async fn update_preserves_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let item = factory::inventory_item::InventoryItemFactory::new(db, farm.id)
        .quantity(42.0)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let updated = repo.update_item(farm.id, item.id, upsert_param()).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Starter Feed");
    assert_eq!(updated.quantity, 42.0);

    Ok(())
}

/// Tests paginated listing scoped to the farm.
#[tokio::test]
async fn lists_items_for_farm_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm_a = factory::create_farm(db).await?;
    let farm_b = factory::create_farm(db).await?;
    factory::create_inventory_item(db, farm_a.id).await?;
    factory::create_inventory_item(db, farm_a.id).await?;
    factory::create_inventory_item(db, farm_b.id).await?;

    let repo = InventoryRepository::new(db);
    let (items, total) = repo.get_items_paginated(farm_a.id, 0, 10).await?;

    assert_eq!(items.len(), 2);
    assert_eq!(total, 2);

    Ok(())
}

/// Tests deleting an item, including the cross-farm rejection.
#[tokio::test]
async fn deletes_item_within_farm() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm_a = factory::create_farm(db).await?;
    let farm_b = factory::create_farm(db).await?;
    let item = factory::create_inventory_item(db, farm_a.id).await?;

    let repo = InventoryRepository::new(db);

    assert!(!repo.delete_item(farm_b.id, item.id).await?);
    assert!(repo.delete_item(farm_a.id, item.id).await?);
    assert!(repo.find_item_by_id(farm_a.id, item.id).await?.is_none());

    Ok(())
}
