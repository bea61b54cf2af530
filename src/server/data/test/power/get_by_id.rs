use super::*;

/// Tests fetching an existing power by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_power_when_it_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let power = factory::create_power(db).await?;

    let found = PowerRepository::new(db).get_by_id(power.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, power.id);
    assert_eq!(found.name, power.name);
    assert_eq!(found.description, power.description);

    Ok(())
}

/// Tests fetching a power id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_power_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PowerRepository::new(db).get_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
