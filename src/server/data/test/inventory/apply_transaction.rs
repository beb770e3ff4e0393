use super::*;

/// Tests applying a positive stock movement.
///
/// Expected: Applied with updated quantity and a movement row recorded
#[tokio::test]
async fn applies_stock_increase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let item = factory::inventory_item::InventoryItemFactory::new(db, farm.id)
        .quantity(50.0)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let outcome = repo
        .apply_transaction(farm.id, item.id, 25.0, "delivery".to_string())
        .await?;

    match outcome {
        ApplyTransactionOutcome::Applied { item, transaction } => {
            assert_eq!(item.quantity, 75.0);
            assert_eq!(transaction.delta, 25.0);
            assert_eq!(transaction.reason, "delivery");
        }
        _ => panic!("expected Applied outcome"),
    }

    let history = repo.transactions_for_item(farm.id, item.id).await?;
    assert_eq!(history.len(), 1);

    Ok(())
}

/// Tests applying a negative movement within the available stock.
#[tokio::test]
async fn applies_stock_decrease() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let item = factory::inventory_item::InventoryItemFactory::new(db, farm.id)
        .quantity(50.0)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let outcome = repo
        .apply_transaction(farm.id, item.id, -50.0, "used up".to_string())
        .await?;

    match outcome {
        ApplyTransactionOutcome::Applied { item, .. } => {
            assert_eq!(item.quantity, 0.0);
        }
        _ => panic!("expected Applied outcome"),
    }

    Ok(())
}

/// Tests rejecting a movement that would push the quantity below zero.
///
/// The quantity must stay unchanged and no movement row may be written.
///
/// Expected: InsufficientStock
#[tokio::test]
async fn rejects_overdraw() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let item = factory::inventory_item::InventoryItemFactory::new(db, farm.id)
        .quantity(10.0)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let outcome = repo
        .apply_transaction(farm.id, item.id, -10.5, "spill".to_string())
        .await?;

    assert!(matches!(outcome, ApplyTransactionOutcome::InsufficientStock));

    let reloaded = repo.find_item_by_id(farm.id, item.id).await?.unwrap();
    assert_eq!(reloaded.quantity, 10.0);
    assert!(repo.transactions_for_item(farm.id, item.id).await?.is_empty());

    Ok(())
}

/// Tests applying a movement against an item of another farm.
///
/// Expected: ItemNotFound
#[tokio::test]
async fn rejects_cross_farm_movement() -> Result<(), DbErr> {
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
    let outcome = repo
        .apply_transaction(farm_b.id, item.id, 5.0, "delivery".to_string())
        .await?;

    assert!(matches!(outcome, ApplyTransactionOutcome::ItemNotFound));

    Ok(())
}

/// Tests that the movement history comes back newest first.
#[tokio::test]
async fn lists_movements_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let item = factory::create_inventory_item(db, farm.id).await?;

    let repo = InventoryRepository::new(db);
    repo.apply_transaction(farm.id, item.id, 5.0, "first".to_string())
        .await?;
    repo.apply_transaction(farm.id, item.id, 5.0, "second".to_string())
        .await?;

    let history = repo.transactions_for_item(farm.id, item.id).await?;
    assert_eq!(history.len(), 2);
    assert!(history[0].recorded_at >= history[1].recorded_at);

    Ok(())
}
