use super::*;
use sea_orm::EntityTrait;

/// Tests creating a hero-power association.
///
/// Expected: Ok with the association persisted, carrying the given strength
/// and both foreign keys
#[tokio::test]
async fn creates_hero_power() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;
    let power = factory::create_power(db).await?;

    let hero_power = HeroPowerRepository::new(db)
        .create(Strength::Strong, hero.id, power.id)
        .await?;

    assert_eq!(hero_power.strength, "Strong");
    assert_eq!(hero_power.hero_id, hero.id);
    assert_eq!(hero_power.power_id, power.id);

    // Verify the association exists in the database
    let db_hero_power = entity::prelude::HeroPower::find_by_id(hero_power.id)
        .one(db)
        .await?;
    assert!(db_hero_power.is_some());
    assert_eq!(db_hero_power.unwrap().strength, "Strong");

    Ok(())
}

/// Tests that each association gets a fresh identifier.
///
/// Expected: Ok with distinct ids for two associations of the same hero
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;
    let first_power = factory::create_power(db).await?;
    let second_power = factory::create_power(db).await?;

    let repo = HeroPowerRepository::new(db);
    let first = repo.create(Strength::Weak, hero.id, first_power.id).await?;
    let second = repo
        .create(Strength::Average, hero.id, second_power.id)
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
