use super::*;

/// Tests the existence check for a present power.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_power() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let power = factory::create_power(db).await?;

    assert!(PowerRepository::new(db).exists(power.id).await?);

    Ok(())
}

/// Tests the existence check for an absent power.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_power() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PowerRepository::new(db).exists(42).await?);

    Ok(())
}
