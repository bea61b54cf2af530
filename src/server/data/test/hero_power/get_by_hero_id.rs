use super::*;

/// Tests that a hero without associations yields an empty list.
///
/// Expected: Ok with no associations
#[tokio::test]
async fn returns_empty_list_without_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;

    let associations = HeroPowerRepository::new(db).get_by_hero_id(hero.id).await?;

    assert!(associations.is_empty());

    Ok(())
}

/// Tests that associations come back with their powers joined, and only for
/// the requested hero.
///
/// Expected: Ok with one association carrying the nested power data
#[tokio::test]
async fn returns_associations_with_joined_powers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_superhero_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;
    let power = factory::power::PowerFactory::new(db)
        .name("Flight")
        .description("Gives the wielder the ability to fly at supersonic speed")
        .build()
        .await?;
    let hero_power = factory::hero_power::HeroPowerFactory::new(db, hero.id, power.id)
        .strength("Strong")
        .build()
        .await?;

    // Another hero's association must not leak into the result
    factory::helpers::create_hero_power_with_dependencies(db).await?;

    let associations = HeroPowerRepository::new(db).get_by_hero_id(hero.id).await?;

    assert_eq!(associations.len(), 1);
    let association = &associations[0];
    assert_eq!(association.hero_power.id, hero_power.id);
    assert_eq!(association.hero_power.strength, "Strong");
    assert_eq!(association.hero_power.hero_id, hero.id);
    assert_eq!(association.power.id, power.id);
    assert_eq!(association.power.name, "Flight");
    assert_eq!(
        association.power.description,
        "Gives the wielder the ability to fly at supersonic speed"
    );

    Ok(())
}
