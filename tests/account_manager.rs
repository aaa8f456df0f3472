mod common;

use account_auth::types::{error::AppError, user::UserFields};
use account_auth::utils::password::{is_usable, verify_password};
use common::{TestClient, TestContext};

#[actix_web::test]
async fn test_create_user_with_email_successful() {
    let ctx = TestContext::new().await;

    let user = ctx
        .db
        .create_user(Some("test@test.com"), Some("123456"), UserFields::default())
        .await
        .unwrap();

    assert_eq!(user.email, "test@test.com");
    assert!(verify_password("123456", &user.password));
    assert!(user.is_active);
    assert!(!user.is_staff);
    assert!(!user.is_superuser);
}

#[actix_web::test]
async fn test_new_user_email_normalized() {
    let ctx = TestContext::new().await;

    for (i, email) in ["testuser@DOMAIN.COM", "MiXeD.CaSe@Example.Org", "UPPER@X.IO"]
        .iter()
        .enumerate()
    {
        let user = ctx
            .db
            .create_user(Some(*email), Some("123456"), UserFields::default())
            .await
            .unwrap_or_else(|e| panic!("user {i} failed: {e}"));
        assert_eq!(user.email, email.to_lowercase());
    }
}

#[actix_web::test]
async fn test_new_user_invalid_email() {
    let ctx = TestContext::new().await;

    for email in [None, Some(""), Some("   ")] {
        let result = ctx.db.create_user(email, Some("123456"), UserFields::default()).await;
        match result {
            Err(AppError::Validation(fields)) => assert!(fields.contains("email")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[actix_web::test]
async fn test_create_new_superuser() {
    let ctx = TestContext::new().await;

    let user = ctx
        .db
        .create_superuser(Some("testsuper@domain.com"), Some("123456"), UserFields::default())
        .await
        .unwrap();

    assert!(user.is_superuser);
    assert!(user.is_staff);
}

#[actix_web::test]
async fn test_superuser_flags_cannot_be_overridden() {
    let ctx = TestContext::new().await;

    let fields = UserFields { is_staff: false, is_superuser: false, ..UserFields::named("Root") };
    let user = ctx
        .db
        .create_superuser(Some("root@domain.com"), Some("123456"), fields)
        .await
        .unwrap();

    assert!(user.is_superuser && user.is_staff);
    assert_eq!(user.name, "Root");
}

#[actix_web::test]
async fn test_user_without_password_cannot_log_in() {
    let ctx = TestContext::new().await;

    let user = ctx
        .db
        .create_user(Some("nopass@test.com"), None, UserFields::default())
        .await
        .unwrap();

    assert!(!is_usable(&user.password));
    let result = ctx.db.authenticate("nopass@test.com", "").await;
    assert!(matches!(result, Err(AppError::AuthFailure)));
}

#[actix_web::test]
async fn test_duplicate_email_exactly_one_succeeds() {
    let ctx = TestContext::new().await;

    let (a, b) = tokio::join!(
        ctx.db.create_user(Some("race@test.com"), Some("123456"), UserFields::default()),
        ctx.db.create_user(Some("RACE@test.com"), Some("654321"), UserFields::default()),
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
    let failure = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
    assert!(matches!(failure, AppError::AlreadyExists));
}

#[actix_web::test]
async fn test_authenticate() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let created = client.create_test_user("auth@test.com", "testpass").await.unwrap();

    let user = ctx.db.authenticate("AUTH@test.com", "testpass").await.unwrap();
    assert_eq!(user.id, created.id);

    assert!(matches!(
        ctx.db.authenticate("auth@test.com", "wrong").await,
        Err(AppError::AuthFailure)
    ));
    assert!(matches!(
        ctx.db.authenticate("missing@test.com", "testpass").await,
        Err(AppError::AuthFailure)
    ));
}

#[actix_web::test]
async fn test_serialized_user_has_no_password() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let user = client.create_test_user("json@test.com", "testpass").await.unwrap();
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password").is_none());
    assert!(!json.to_string().contains("testpass"));
}

#[actix_web::test]
async fn test_create_user_rejects_email_longer_than_column() {
    let ctx = TestContext::new().await;

    let email = format!("{}@test.com", "u".repeat(250));
    let result = ctx
        .db
        .create_superuser(Some(email.as_str()), Some("123456"), UserFields::default())
        .await;

    match result {
        Err(AppError::Validation(fields)) => assert!(fields.contains("email")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(!ctx.db.user_exists_by_email(&email).await.unwrap());
}

#[actix_web::test]
async fn test_update_user_applies_name_and_password_together() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let user = client.create_test_user("both@test.com", "testpass").await.unwrap();

    let updated = ctx
        .db
        .update_user(&user.id, Some("Renamed".to_string()), Some("newpass"))
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(verify_password("newpass", &updated.password));
    let stored = ctx.db.get_user_by_id(&user.id).await.unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.password, updated.password);
}

#[actix_web::test]
async fn test_update_user_for_missing_user_changes_nothing() {
    let ctx = TestContext::new().await;

    let result = ctx
        .db
        .update_user(&uuid::Uuid::new_v4(), Some("Ghost".to_string()), Some("newpass"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[actix_web::test]
async fn test_set_password_and_rename() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let user = client.create_test_user("single@test.com", "testpass").await.unwrap();

    let renamed = ctx.db.update_user_name(&user.id, "Solo".to_string()).await.unwrap();
    assert_eq!(renamed.name, "Solo");
    assert!(verify_password("testpass", &renamed.password));

    let repassed = ctx.db.set_password(&user.id, "another").await.unwrap();
    assert_eq!(repassed.name, "Solo");
    assert!(ctx.db.authenticate("single@test.com", "another").await.is_ok());
}
