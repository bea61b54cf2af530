use crate::server::{
    error::AppError,
    model::hero_power::CreateHeroPowerParam,
    service::{hero::HeroService, hero_power::HeroPowerService},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that the hero list carries the `{id, name, super_name}` projection.
#[tokio::test]
async fn get_all_returns_list_projections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::HeroFactory::new(db)
        .name("Kamala Khan")
        .super_name("Ms. Marvel")
        .build()
        .await?;

    let heroes = HeroService::new(db).get_all().await.unwrap();

    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].id, hero.id);
    assert_eq!(heroes[0].name, "Kamala Khan");
    assert_eq!(heroes[0].super_name, "Ms. Marvel");

    Ok(())
}

/// Tests the not-found taxonomy for an unknown hero id.
///
/// Expected: Err(NotFound) with the "Hero not found" message
#[tokio::test]
async fn get_by_id_yields_not_found_for_unknown_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HeroService::new(db).get_by_id(9999).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Hero not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests the create-then-read round trip: creating an association for a hero
/// makes it visible in the hero's detail projection with the nested power.
#[tokio::test]
async fn detail_reflects_created_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;
    let power = factory::create_power(db).await?;

    HeroPowerService::new(db)
        .create(CreateHeroPowerParam {
            strength: "Strong".to_string(),
            hero_id: hero.id,
            power_id: power.id,
        })
        .await
        .unwrap();

    let detail = HeroService::new(db).get_by_id(hero.id).await.unwrap();

    assert_eq!(detail.id, hero.id);
    assert_eq!(detail.hero_powers.len(), 1);
    let association = &detail.hero_powers[0];
    assert_eq!(association.strength, "Strong");
    assert_eq!(association.power_id, power.id);
    assert_eq!(association.power.id, power.id);
    assert_eq!(association.power.name, power.name);

    Ok(())
}

/// Tests that a hero without associations has an empty `hero_powers` array.
#[tokio::test]
async fn detail_has_empty_associations_for_new_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;

    let detail = HeroService::new(db).get_by_id(hero.id).await.unwrap();

    assert!(detail.hero_powers.is_empty());

    Ok(())
}
