//! PostgreSQL repository tests. They need `DATABASE_URL` pointing at a server
//! where test databases can be created; run with `cargo test -- --ignored`.

use product_service::domain::call_context::CallContext;
use product_service::domain::entities::{NewProduct, ProductChanges};
use product_service::domain::errors::ProductError;
use product_service::domain::repositories::ProductRepository;
use product_service::infrastructure::persistence::PgProductRepository;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

fn new_product(code: &str) -> NewProduct {
    NewProduct {
        code: code.to_string(),
        title: "Toy".to_string(),
        description: "Description".to_string(),
        reference: "XZsdf5tY-AA".to_string(),
        price_in_cents: 2500,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_product(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let record = repo
        .insert(&CallContext::new(), new_product("XXCC"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.code, "XXCC");
    assert_eq!(record.reference, "XZsdf5tY-AA");
    assert_eq!(record.created_at, record.updated_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_duplicate_code(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));
    let ctx = CallContext::new();

    repo.insert(&ctx, new_product("DUP-1")).await.unwrap();

    assert_eq!(
        repo.insert(&ctx, new_product("DUP-1")).await,
        Err(ProductError::DuplicateCode)
    );
    assert_eq!(
        repo.insert(&ctx, new_product("dup-1")).await,
        Err(ProductError::DuplicateCode)
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_by_code(pool: PgPool) {
    sqlx::query(
        "INSERT INTO products (title, description, code, reference, price_in_cents)
         VALUES ('Toy', 'Description', 'XSZ-000741', 'REF', 2500)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = PgProductRepository::new(Arc::new(pool));
    let ctx = CallContext::new();

    let found = repo.get_by_code(&ctx, " xsz-000741").await.unwrap();
    assert_eq!(found.code, "XSZ-000741");
    assert_eq!(found.price_in_cents, 2500);

    assert_eq!(
        repo.get_by_code(&ctx, "XSZ-000742").await,
        Err(ProductError::NotFound)
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_by_code(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));
    let ctx = CallContext::new();
    repo.insert(&ctx, new_product("DEL-1")).await.unwrap();

    assert_eq!(repo.delete_by_code(&ctx, "DEL-1").await, Ok(true));
    assert_eq!(
        repo.delete_by_code(&ctx, "DEL-1").await,
        Err(ProductError::NotFound)
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_changes_mutable_fields(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));
    let ctx = CallContext::new();
    let before = repo.insert(&ctx, new_product("UPD-1")).await.unwrap();

    repo.update(
        &ctx,
        ProductChanges {
            code: "upd-1".to_string(),
            title: "Big toy".to_string(),
            description: "Bigger".to_string(),
            reference: "NEW-REF".to_string(),
            price_in_cents: 9900,
        },
    )
    .await
    .unwrap();

    let after = repo.get_by_code(&ctx, "UPD-1").await.unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.code, "UPD-1");
    assert_eq!(after.title, "Big toy");
    assert_eq!(after.price_in_cents, 9900);
    assert!(after.updated_at >= before.updated_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let result = repo
        .update(
            &CallContext::new(),
            ProductChanges {
                code: "NOPE".to_string(),
                title: "t".to_string(),
                description: "d".to_string(),
                reference: "r".to_string(),
                price_in_cents: 1,
            },
        )
        .await;

    assert_eq!(result, Err(ProductError::NotFound));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_expired_deadline_skips_query(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool.clone()));
    let ctx = CallContext::new().with_timeout(Duration::ZERO);
    tokio::time::sleep(Duration::from_millis(5)).await;

    let result = repo.insert(&ctx, new_product("LATE-1")).await;
    assert_eq!(result, Err(ProductError::Timeout));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));
    assert!(repo.health_check().await);
}
