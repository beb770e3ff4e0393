use super::*;

/// Tests storing a message and paging through the history.
#[tokio::test]
async fn stores_and_paginates_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await?;

    let repo = ChatRepository::new(db);
    let thread = repo
        .create_thread(CreateChatThreadParam {
            farm_id: farm.id,
            subject: "Morning shift".to_string(),
            created_by: owner.id,
            participant_ids: vec![],
        })
        .await?;

    for i in 0..3 {
        repo.create_message(thread.id, owner.id, format!("message {}", i))
            .await?;
    }

    let (page, total) = repo.messages_paginated(thread.id, 0, 2).await?;

    assert_eq!(page.len(), 2);
    assert_eq!(total, 3);
    assert!(page.iter().all(|m| m.thread_id == thread.id));

    Ok(())
}

/// Tests that a created message carries sender and body.
#[tokio::test]
async fn records_sender_and_body() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await?;

    let repo = ChatRepository::new(db);
    let thread = repo
        .create_thread(CreateChatThreadParam {
            farm_id: farm.id,
            subject: "Morning shift".to_string(),
            created_by: owner.id,
            participant_ids: vec![],
        })
        .await?;

    let message = repo
        .create_message(thread.id, owner.id, "feed delivery at noon".to_string())
        .await?;

    assert_eq!(message.sender_id, owner.id);
    assert_eq!(message.body, "feed delivery at noon");

    Ok(())
}
