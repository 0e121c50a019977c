use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::{db, product};

/// Connect and migrate, or `None` when no database is available.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = db::run_migrations(&db).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_product_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = product::ActiveModel {
        name: Set("Lamp".into()),
        description: Set("Desk lamp".into()),
        price: Set(19.5),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);

    let found = product::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut am: product::ActiveModel = created.clone().into();
    am.price = Set(25.0);
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, 25.0);

    let res = product::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert!(product::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_negative_price_rejected_by_check_constraint() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let res = product::ActiveModel {
        name: Set("Broken".into()),
        description: Set("Negative price".into()),
        price: Set(-1.0),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(res.is_err());
    Ok(())
}
