use super::*;

/// Tests creating a thread with participants.
///
/// The creator must always end up in the participant list, even when the
/// caller forgot to include them.
#[tokio::test]
async fn creates_thread_with_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await?;
    let worker = factory::create_user(db, farm.id).await?;

    let repo = ChatRepository::new(db);
    let thread = repo
        .create_thread(CreateChatThreadParam {
            farm_id: farm.id,
            subject: "Morning shift".to_string(),
            created_by: owner.id,
            participant_ids: vec![worker.id],
        })
        .await?;

    assert_eq!(thread.subject, "Morning shift");
    assert!(thread.participant_ids.contains(&owner.id));
    assert!(thread.participant_ids.contains(&worker.id));

    Ok(())
}

/// Tests listing only the threads the user participates in.
#[tokio::test]
async fn lists_threads_for_participant_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await?;
    let worker = factory::create_user(db, farm.id).await?;
    let outsider = factory::create_user(db, farm.id).await?;

    let repo = ChatRepository::new(db);
    repo.create_thread(CreateChatThreadParam {
        farm_id: farm.id,
        subject: "Shared".to_string(),
        created_by: owner.id,
        participant_ids: vec![worker.id],
    })
    .await?;
    repo.create_thread(CreateChatThreadParam {
        farm_id: farm.id,
        subject: "Private".to_string(),
        created_by: owner.id,
        participant_ids: vec![],
    })
    .await?;

    let worker_threads = repo.threads_for_user(farm.id, worker.id).await?;
    assert_eq!(worker_threads.len(), 1);
    assert_eq!(worker_threads[0].subject, "Shared");

    let outsider_threads = repo.threads_for_user(farm.id, outsider.id).await?;
    assert!(outsider_threads.is_empty());

    Ok(())
}

/// Tests the participant membership check.
#[tokio::test]
async fn reports_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await?;
    let outsider = factory::create_user(db, farm.id).await?;

    let repo = ChatRepository::new(db);
    let thread = repo
        .create_thread(CreateChatThreadParam {
            farm_id: farm.id,
            subject: "Morning shift".to_string(),
            created_by: owner.id,
            participant_ids: vec![],
        })
        .await?;

    assert!(repo.is_participant(thread.id, owner.id).await?);
    assert!(!repo.is_participant(thread.id, outsider.id).await?);

    Ok(())
}

/// Tests that adding a participant twice leaves a single row.
#[tokio::test]
async fn add_participant_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await?;
    let worker = factory::create_user(db, farm.id).await?;

    let repo = ChatRepository::new(db);
    let thread = repo
        .create_thread(CreateChatThreadParam {
            farm_id: farm.id,
            subject: "Morning shift".to_string(),
            created_by: owner.id,
            participant_ids: vec![],
        })
        .await?;

    repo.add_participant(thread.id, worker.id).await?;
    repo.add_participant(thread.id, worker.id).await?;

    let ids = repo.participant_ids(thread.id).await?;
    assert_eq!(ids.iter().filter(|id| **id == worker.id).count(), 1);

    Ok(())
}

/// Tests that a thread is invisible from another farm.
#[tokio::test]
async fn hides_thread_from_other_farm() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm_a, owner) = factory::helpers::create_farm_with_owner(db).await?;
    let farm_b = factory::create_farm(db).await?;

    let repo = ChatRepository::new(db);
    let thread = repo
        .create_thread(CreateChatThreadParam {
            farm_id: farm_a.id,
            subject: "Morning shift".to_string(),
            created_by: owner.id,
            participant_ids: vec![],
        })
        .await?;

    assert!(repo.find_thread(farm_a.id, thread.id).await?.is_some());
    assert!(repo.find_thread(farm_b.id, thread.id).await?.is_none());

    Ok(())
}
