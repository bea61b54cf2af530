use super::*;

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok with no heroes
#[tokio::test]
async fn returns_empty_list_without_heroes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let heroes = HeroRepository::new(db).get_all().await?;

    assert!(heroes.is_empty());

    Ok(())
}

/// Tests that all heroes are returned ordered by id.
///
/// Expected: Ok with both heroes in insertion order
#[tokio::test]
async fn returns_all_heroes_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::hero::HeroFactory::new(db)
        .name("Kamala Khan")
        .super_name("Ms. Marvel")
        .build()
        .await?;
    let second = factory::hero::HeroFactory::new(db)
        .name("Doreen Green")
        .super_name("Squirrel Girl")
        .build()
        .await?;

    let heroes = HeroRepository::new(db).get_all().await?;

    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[0].id, first.id);
    assert_eq!(heroes[0].name, "Kamala Khan");
    assert_eq!(heroes[0].super_name, "Ms. Marvel");
    assert_eq!(heroes[1].id, second.id);
    assert_eq!(heroes[1].name, "Doreen Green");

    Ok(())
}
