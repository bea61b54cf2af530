use super::*;

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok with no powers
#[tokio::test]
async fn returns_empty_list_without_powers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let powers = PowerRepository::new(db).get_all().await?;

    assert!(powers.is_empty());

    Ok(())
}

/// Tests that all powers are returned ordered by id.
///
/// Expected: Ok with both powers in insertion order
#[tokio::test]
async fn returns_all_powers_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::power::PowerFactory::new(db)
        .name("Flight")
        .build()
        .await?;
    let second = factory::power::PowerFactory::new(db)
        .name("Super Strength")
        .build()
        .await?;

    let powers = PowerRepository::new(db).get_all().await?;

    assert_eq!(powers.len(), 2);
    assert_eq!(powers[0].id, first.id);
    assert_eq!(powers[0].name, "Flight");
    assert_eq!(powers[1].id, second.id);
    assert_eq!(powers[1].name, "Super Strength");

    Ok(())
}
