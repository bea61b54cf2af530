use super::*;

/// Tests fetching an existing hero by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_hero_when_it_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;

    let found = HeroRepository::new(db).get_by_id(hero.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, hero.id);
    assert_eq!(found.name, hero.name);
    assert_eq!(found.super_name, hero.super_name);

    Ok(())
}

/// Tests fetching a hero id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_hero_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = HeroRepository::new(db).get_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
