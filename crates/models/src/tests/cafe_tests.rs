use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::cafe::{self, NewCafe};
use crate::db::connect_and_migrate;
use crate::errors::ModelError;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}

fn new_cafe(name: &str) -> NewCafe {
    NewCafe {
        name: name.to_string(),
        map_url: "https://goo.gl/maps/abc".into(),
        img_url: "https://example.com/cafe.jpg".into(),
        location: "Peckham".into(),
        seats: "4".into(),
        has_toilet: true,
        has_wifi: true,
        has_sockets: true,
        can_take_calls: true,
        coffee_price: Some("£2.50".into()),
    }
}

#[tokio::test]
async fn test_create_then_list_preserves_fields() -> Result<()> {
    let db = setup_test_db().await?;

    let created = cafe::create(&db, new_cafe("Mare Street Market")).await?;
    assert!(created.id > 0);

    let all = cafe::list_all(&db).await?;
    let matching: Vec<_> = all.iter().filter(|c| c.name == "Mare Street Market").collect();
    assert_eq!(matching.len(), 1);
    let found = matching[0];
    assert_eq!(found.seats, "4");
    assert_eq!(found.coffee_price.as_deref(), Some("£2.50"));
    assert!(found.has_toilet && found.has_wifi && found.has_sockets && found.can_take_calls);
    assert_eq!(found, &created);
    Ok(())
}

#[tokio::test]
async fn test_null_coffee_price_round_trips() -> Result<()> {
    let db = setup_test_db().await?;
    let mut c = new_cafe("Ground Café");
    c.coffee_price = None;
    c.has_wifi = false;
    let created = cafe::create(&db, c).await?;
    let found = cafe::fetch(&db, created.id).await?;
    assert_eq!(found.coffee_price, None);
    assert!(!found.has_wifi);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    cafe::create(&db, new_cafe("Social - Copeland Road")).await?;

    let dup = cafe::create(&db, new_cafe("Social - Copeland Road")).await;
    assert!(matches!(dup, Err(ModelError::DuplicateName(ref n)) if n == "Social - Copeland Road"));
    assert_eq!(cafe::count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_only_target() -> Result<()> {
    let db = setup_test_db().await?;
    let a = cafe::create(&db, new_cafe("A")).await?;
    let b = cafe::create(&db, new_cafe("B")).await?;

    cafe::delete(&db, a.id).await?;

    assert!(matches!(cafe::fetch(&db, a.id).await, Err(ModelError::NotFound(id)) if id == a.id));
    let remaining = cafe::list_all(&db).await?;
    assert_eq!(remaining, vec![b]);
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_reports_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    cafe::create(&db, new_cafe("Only")).await?;

    let res = cafe::delete(&db, 9999).await;
    assert!(matches!(res, Err(ModelError::NotFound(9999))));
    assert_eq!(cafe::count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() -> Result<()> {
    let db = setup_test_db().await?;
    let first = cafe::create(&db, new_cafe("First")).await?;
    cafe::delete(&db, first.id).await?;

    let second = cafe::create(&db, new_cafe("Second")).await?;
    assert!(second.id > first.id);
    Ok(())
}

#[tokio::test]
async fn test_list_is_insertion_ordered() -> Result<()> {
    let db = setup_test_db().await?;
    for name in ["Zeta", "Alpha", "Mu"] {
        cafe::create(&db, new_cafe(name)).await?;
    }
    let names: Vec<String> = cafe::list_all(&db).await?.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    Ok(())
}
