//! PostgreSQL store tests
//!
//! Skipped unless `DATABASE_URL` points at a disposable database. The
//! tables are truncated before each test, so they run serially.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serial_test::serial;
use storefront_api::backend::products::{PgProductStore, ProductStore};
use storefront_api::backend::store::StoreError;
use storefront_api::backend::users::{PgUserStore, UserInsert, UserStore, UserUpdate};
use storefront_api::shared::{NewProduct, ProductChanges};

use crate::common::database::{reset, test_pool};

#[tokio::test]
#[serial]
async fn test_pg_user_store() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set, skipping");
        return;
    };
    reset(&pool).await;
    let store = PgUserStore::new(pool);

    let user = store
        .create(UserInsert {
            email: "pg@example.com".to_string(),
            password_hash: Some("hash".to_string()),
        })
        .await
        .unwrap();

    let by_email = store.find_by_email("pg@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    let duplicate = store
        .create(UserInsert {
            email: "pg@example.com".to_string(),
            password_hash: None,
        })
        .await;
    assert_matches!(duplicate, Err(StoreError::Conflict(_)));

    let updated = store
        .update(
            user.id,
            UserUpdate {
                email: Some("pg2@example.com".to_string()),
                password_hash: None,
            },
        )
        .await
        .unwrap()
        .expect("user exists");
    assert_eq!(updated.email, "pg2@example.com");
    assert_eq!(updated.password_hash.as_deref(), Some("hash"));

    assert_eq!(store.find_all().await.unwrap().len(), 1);
    assert!(store.delete(user.id).await.unwrap());
    assert!(!store.delete(user.id).await.unwrap());
    assert!(store.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_pg_product_store() {
    let Some(pool) = test_pool().await else {
        eprintln!("DATABASE_URL not set, skipping");
        return;
    };
    reset(&pool).await;
    let store = PgProductStore::new(pool);

    let product = store
        .create(NewProduct {
            name: "Kettle".to_string(),
            description: None,
            price: 30.0,
        })
        .await
        .unwrap();

    let updated = store
        .update(
            product.id,
            ProductChanges {
                name: None,
                description: Some("Electric".to_string()),
                price: None,
            },
        )
        .await
        .unwrap()
        .expect("product exists");
    assert_eq!(updated.name, "Kettle");
    assert_eq!(updated.description.as_deref(), Some("Electric"));
    assert_eq!(updated.price, 30.0);

    assert!(store.delete(product.id).await.unwrap());
    assert!(store.find_by_id(product.id).await.unwrap().is_none());
}
