use super::*;

/// Tests the existence check for a present hero.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;

    assert!(HeroRepository::new(db).exists(hero.id).await?);

    Ok(())
}

/// Tests the existence check for an absent hero.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!HeroRepository::new(db).exists(42).await?);

    Ok(())
}
