use super::*;
use sea_orm::EntityTrait;

/// Tests updating a power's description.
///
/// Expected: Ok with the new description, persisted in the database
#[tokio::test]
async fn updates_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let power = factory::create_power(db).await?;

    let updated = PowerRepository::new(db)
        .update_description(power.id, "Super strength beyond human limits".to_string())
        .await?;

    assert_eq!(updated.id, power.id);
    assert_eq!(updated.description, "Super strength beyond human limits");

    // Verify the new description is persisted
    let db_power = entity::prelude::Power::find_by_id(power.id).one(db).await?;
    assert_eq!(
        db_power.unwrap().description,
        "Super strength beyond human limits"
    );

    Ok(())
}

/// Tests updating a power that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_power() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PowerRepository::new(db)
        .update_description(9999, "A description that is long enough".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
